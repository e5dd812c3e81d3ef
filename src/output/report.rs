//! Report structures describing one run of the demo

use crate::input::args::ArgumentList;
use crate::input::extension::ExtensionSwap;
use crate::input::int_arg::IntArgument;
use crate::input::program_path::ProgramPath;
use crate::input::source::{SourceFile, EXIT_FILE_ERROR, EXIT_FILE_OK};
use serde::Serialize;

/// Everything one run computed, in the order it was computed
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub argument_count: usize,
    pub arguments: ArgumentList,
    pub program: ProgramPath,
    pub int_argument: IntArgument,
    /// `None` when an explicit source file replaced the derived one
    pub companion: Option<ExtensionSwap>,
    pub source: SourceOutcome,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SourceOutcome {
    Loaded(SourceFile),
    Missing { path: String },
}

impl RunReport {
    pub fn new(
        args: &ArgumentList,
        program: ProgramPath,
        int_argument: IntArgument,
        companion: Option<ExtensionSwap>,
        source: SourceOutcome,
    ) -> Self {
        Self {
            argument_count: args.count(),
            arguments: args.clone(),
            program,
            int_argument,
            companion,
            source,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.source {
            SourceOutcome::Loaded(_) => EXIT_FILE_OK,
            SourceOutcome::Missing { .. } => EXIT_FILE_ERROR,
        }
    }
}
