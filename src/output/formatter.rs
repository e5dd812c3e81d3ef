//! Output formatters for the run report

use crate::config::OutputFormat;
use crate::error::{DemoError, Result};
use crate::input::int_arg::IntArgument;
use crate::output::report::*;
use colored::{Color, Colorize};

/// Trait for formatting run reports
pub trait OutputFormatter {
    fn format_report(&self, report: &RunReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Plain transcript, one section per operation
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter for scripted consumers
pub struct JsonFormatter {
    pretty: bool,
}

/// Picks the formatter whose `supports_format` matches the requested format
pub struct ReportGenerator {
    formatters: Vec<Box<dyn OutputFormatter>>,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn heading(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn format_arguments(&self, report: &RunReport, output: &mut String) {
        output.push_str(&format!(
            "\n{} {}\n\n",
            self.heading("Command line argument count:", Color::Blue),
            report.argument_count
        ));
        for (index, arg) in report.arguments.iter() {
            output.push_str(&format!("arg {}: {}\n", index, arg));
        }
        output.push('\n');
    }

    fn format_program(&self, report: &RunReport, output: &mut String) {
        output.push_str(&format!("\tpath: {}\n", report.program.path));
        output.push_str(&format!("\tfile name with suffix: {}\n", report.program.file_name));
    }

    fn format_int_argument(&self, report: &RunReport, output: &mut String) {
        match &report.int_argument {
            IntArgument::Absent => {}
            IntArgument::Parsed(value) => {
                output.push_str(&format!(
                    "\n{} {}\n",
                    self.heading("Integer command line argument:", Color::Green),
                    value
                ));
            }
            IntArgument::Invalid(_) => {
                output.push_str(&format!(
                    "\n{} {} <integer>\n",
                    self.heading("Usage:", Color::Yellow),
                    report.program.file_name
                ));
            }
        }
    }

    fn format_companion(&self, report: &RunReport, output: &mut String) {
        let Some(swap) = &report.companion else {
            return;
        };
        output.push_str(&format!(
            "\n{} {} filename suffix to .{}\n",
            self.heading("Changing", Color::Blue),
            swap.original,
            swap.extension
        ));
        output.push_str(&format!("\tfilename: {}\n", swap.stem));
        output.push_str(&format!("\tsuffix: {}\n", swap.suffix.as_deref().unwrap_or("")));
        output.push_str(&format!("\tcompanion filename: {}\n\n", swap.target));
    }

    fn format_source(&self, report: &RunReport, output: &mut String) {
        match &report.source {
            SourceOutcome::Loaded(source) => {
                output.push_str(&format!(
                    "\n{}\n\n",
                    self.heading("Source code in this file:", Color::Green)
                ));
                output.push_str(&source.content);
                output.push('\n');
            }
            SourceOutcome::Missing { path } => {
                output.push_str(&format!(
                    "\n{} {}\n\n",
                    self.heading("Could not open file", Color::Red),
                    path
                ));
            }
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &RunReport) -> Result<String> {
        let mut output = String::new();
        self.format_arguments(report, &mut output);
        self.format_program(report, &mut output);
        self.format_int_argument(report, &mut output);
        self.format_companion(report, &mut output);
        self.format_source(report, &mut output);
        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &RunReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl ReportGenerator {
    pub fn with_options(use_colors: bool, pretty_json: bool) -> Self {
        Self {
            formatters: vec![
                Box::new(ConsoleFormatter::new(use_colors)),
                Box::new(JsonFormatter::new(pretty_json)),
            ],
        }
    }

    pub fn generate_report(&self, report: &RunReport, format: &OutputFormat) -> Result<String> {
        let formatter = self
            .formatters
            .iter()
            .find(|formatter| formatter.supports_format() == *format)
            .ok_or_else(|| DemoError::InvalidInput(format!("No formatter for {:?}", format)))?;
        formatter.format_report(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::args::ArgumentList;
    use crate::input::extension::swap_extension;
    use crate::input::program_path::ProgramPath;
    use crate::input::source::SourceFile;
    use std::path::PathBuf;

    fn sample_report(int_argument: IntArgument, source: SourceOutcome) -> RunReport {
        let args = ArgumentList::new(vec!["./bin/demo.exe".into(), "12".into()]);
        RunReport::new(
            &args,
            ProgramPath {
                path: "./bin".into(),
                file_name: "demo.exe".into(),
            },
            int_argument,
            Some(swap_extension("demo.exe", "rs")),
            source,
        )
    }

    fn loaded() -> SourceOutcome {
        SourceOutcome::Loaded(SourceFile {
            path: PathBuf::from("demo.rs"),
            content: "fn main() {}".into(),
        })
    }

    #[test]
    fn test_console_transcript() {
        let report = sample_report(IntArgument::Parsed(12), loaded());
        let text = ConsoleFormatter::new(false).format_report(&report).unwrap();

        assert!(text.contains("Command line argument count: 2\n\narg 0: ./bin/demo.exe\narg 1: 12\n"));
        assert!(text.contains("\tpath: ./bin\n\tfile name with suffix: demo.exe\n"));
        assert!(text.contains("Integer command line argument: 12"));
        assert!(text.contains("Changing demo.exe filename suffix to .rs"));
        assert!(text.contains("\tfilename: demo\n\tsuffix: exe\n\tcompanion filename: demo.rs\n"));
        assert!(text.contains("Source code in this file:\n\nfn main() {}\n"));
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_console_usage_and_missing_file() {
        let report = sample_report(
            IntArgument::Invalid("twelve".into()),
            SourceOutcome::Missing { path: "demo.rs".into() },
        );
        let text = ConsoleFormatter::new(false).format_report(&report).unwrap();

        assert!(text.contains("Usage: demo.exe <integer>"));
        assert!(!text.contains("Integer command line argument"));
        assert!(text.contains("Could not open file demo.rs"));
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_console_absent_argument() {
        let report = sample_report(IntArgument::Absent, loaded());
        let text = ConsoleFormatter::new(false).format_report(&report).unwrap();
        assert!(!text.contains("Usage:"));
        assert!(!text.contains("Integer command line argument"));
    }

    #[test]
    fn test_json_output() {
        let report = sample_report(IntArgument::Parsed(12), loaded());
        let json = JsonFormatter::new(false).format_report(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["argument_count"], 2);
        assert_eq!(value["arguments"][1], "12");
        assert_eq!(value["int_argument"]["status"], "parsed");
        assert_eq!(value["int_argument"]["value"], 12);
        assert_eq!(value["companion"]["target"], "demo.rs");
        assert_eq!(value["source"]["status"], "loaded");
        assert_eq!(value["source"]["content"], "fn main() {}");
    }

    #[test]
    fn test_generator_dispatch() {
        let generator = ReportGenerator::with_options(false, true);
        let report = sample_report(IntArgument::Absent, loaded());

        let console = generator.generate_report(&report, &OutputFormat::Console).unwrap();
        assert!(console.starts_with("\nCommand line argument count"));

        let json = generator.generate_report(&report, &OutputFormat::Json).unwrap();
        assert!(json.trim_start().starts_with('{'));
        assert_eq!(JsonFormatter::new(true).supports_format(), OutputFormat::Json);
    }
}
