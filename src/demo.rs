//! The four demo steps run in order, producing one report

use crate::config::Config;
use crate::error::DemoError;
use crate::input::args::ArgumentList;
use crate::input::extension::swap_extension;
use crate::input::int_arg::IntArgument;
use crate::input::program_path::{default_dividers, split_program_path};
use crate::input::source::{resolve_companion, SourceReader};
use crate::output::report::{RunReport, SourceOutcome};
use log::{debug, info, warn};
use std::path::PathBuf;

/// Settings for one run, after CLI flags have been applied over the config
#[derive(Debug, Clone)]
pub struct DemoOptions {
    pub fallback_name: String,
    pub source_extension: String,
    /// Display this file instead of the derived companion
    pub source_override: Option<PathBuf>,
}

impl DemoOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            fallback_name: config.program.fallback_name.clone(),
            source_extension: config.program.source_extension.clone(),
            source_override: None,
        }
    }
}

pub async fn run(args: &ArgumentList, options: &DemoOptions) -> RunReport {
    info!("Inspecting {} command line arguments", args.count());

    let program = split_program_path(args.program(), default_dividers(), &options.fallback_name);
    debug!("Program path split into '{}' and '{}'", program.path, program.file_name);

    let int_argument = IntArgument::from_args(args);
    if let IntArgument::Invalid(raw) = &int_argument {
        debug!("'{}' is not an integer", raw);
    }

    let (companion, source_path) = match &options.source_override {
        Some(path) => (None, path.clone()),
        None => {
            let swap = swap_extension(&program.file_name, &options.source_extension);
            let path = resolve_companion(&swap.target, &program.path);
            (Some(swap), path)
        }
    };

    let source = match SourceReader.read(&source_path).await {
        Ok(file) => SourceOutcome::Loaded(file),
        Err(DemoError::SourceNotFound(path)) => {
            warn!("Could not open file {}", path);
            SourceOutcome::Missing { path }
        }
        Err(e) => {
            warn!("Reading {} failed: {}", source_path.display(), e);
            SourceOutcome::Missing {
                path: source_path.display().to_string(),
            }
        }
    };

    RunReport::new(args, program, int_argument, companion, source)
}
