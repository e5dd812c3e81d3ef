//! Command line demo: lists arguments, splits the program path, reads an
//! integer argument and echoes the program's companion source file

use command_line_demo::cli::{self, Cli};
use command_line_demo::config::Config;
use command_line_demo::demo::{self, DemoOptions};
use command_line_demo::error::{DemoError, Result};
use command_line_demo::input::args::ArgumentList;
use command_line_demo::input::source::EXIT_FILE_ERROR;
use command_line_demo::output::formatter::ReportGenerator;
use log::{debug, error};
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = cli::parse_lenient(std::env::args_os());

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(EXIT_FILE_ERROR);
        }
    };

    match run_demo(cli, config).await {
        Ok(code) => process::exit(code),
        Err(e) => {
            error!("Command failed: {}", e);
            process::exit(EXIT_FILE_ERROR);
        }
    }
}

async fn run_demo(cli: Cli, mut config: Config) -> Result<i32> {
    if let Some(format) = &cli.output {
        config.output.format = cli::parse_output_format(format).map_err(DemoError::InvalidInput)?;
    }
    if let Some(extension) = cli.extension {
        config.program.source_extension = extension;
    }
    if cli.no_color {
        config.output.color_output = false;
    }

    debug!("Parsed value {:?}, {} trailing arguments", cli.value, cli.rest.len());

    let mut options = DemoOptions::from_config(&config);
    options.source_override = cli.source;

    let args = ArgumentList::from_env();
    let report = demo::run(&args, &options).await;

    let generator = ReportGenerator::with_options(config.output.color_output, config.output.pretty_json);
    let rendered = generator.generate_report(&report, &config.output.format)?;
    if rendered.ends_with('\n') {
        print!("{}", rendered);
    } else {
        println!("{}", rendered);
    }

    Ok(report.exit_code())
}
