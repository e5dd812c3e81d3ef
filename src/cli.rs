//! CLI interface for the command line demo

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "command_line_demo")]
#[command(ignore_errors = true, disable_help_flag = true)]
#[command(about = "Command line argument, file name and text file display demo")]
#[command(long_about = "Lists the command line arguments, splits the program path into folder and \
file name, reads an optional integer argument and echoes the program's companion source file")]
pub struct Cli {
    /// Integer argument to echo back
    #[arg(allow_negative_numbers = true)]
    pub value: Option<String>,

    /// Additional arguments (listed only)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format: console, json
    #[arg(short, long)]
    pub output: Option<String>,

    /// Display this file instead of the companion source file
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Extension of the companion source file
    #[arg(short, long)]
    pub extension: Option<String>,

    /// Disable colored headings
    #[arg(long)]
    pub no_color: bool,
}

/// Reads the run options out of `args` without rejecting anything: the raw
/// argument list belongs to the demo, so unknown tokens are left for it to
/// enumerate and a parse failure yields the default options.
pub fn parse_lenient<I, T>(args: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args).unwrap_or_default()
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" | "text" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: console, json", format)),
    }
}
