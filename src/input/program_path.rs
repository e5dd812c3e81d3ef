//! Splits the program path into folder path and file name

use log::debug;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgramPath {
    pub path: String,
    pub file_name: String,
}

/// Folder dividers for the host platform.
pub fn default_dividers() -> &'static [char] {
    if cfg!(windows) {
        &['/', '\\']
    } else {
        &['/']
    }
}

/// Splits `argv0` at the last divider. A missing `argv0` yields
/// `fallback_name` with an empty folder path.
pub fn split_program_path(argv0: Option<&str>, dividers: &[char], fallback_name: &str) -> ProgramPath {
    let Some(argv0) = argv0 else {
        debug!("No program path supplied, using {}", fallback_name);
        return ProgramPath {
            path: String::new(),
            file_name: fallback_name.to_string(),
        };
    };

    match argv0.rfind(dividers) {
        Some(found) => ProgramPath {
            path: argv0[..found].to_string(),
            // dividers are ASCII, so found + 1 is a char boundary
            file_name: argv0[found + 1..].to_string(),
        },
        None => ProgramPath {
            path: String::new(),
            file_name: argv0.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = "command_line_demo";

    #[test]
    fn test_unix_path() {
        let split = split_program_path(Some("/usr/local/bin/demo.exe"), &['/'], FALLBACK);
        assert_eq!(split.path, "/usr/local/bin");
        assert_eq!(split.file_name, "demo.exe");
    }

    #[test]
    fn test_relative_path() {
        let split = split_program_path(Some("./demo"), &['/'], FALLBACK);
        assert_eq!(split.path, ".");
        assert_eq!(split.file_name, "demo");
    }

    #[test]
    fn test_windows_dividers() {
        let split = split_program_path(Some(r"C:\work/bin\demo.exe"), &['/', '\\'], FALLBACK);
        assert_eq!(split.path, r"C:\work/bin");
        assert_eq!(split.file_name, "demo.exe");
    }

    #[test]
    fn test_backslash_is_plain_char_on_unix() {
        let split = split_program_path(Some(r"bin\demo.exe"), &['/'], FALLBACK);
        assert_eq!(split.path, "");
        assert_eq!(split.file_name, r"bin\demo.exe");
    }

    #[test]
    fn test_no_divider() {
        let split = split_program_path(Some("demo"), &['/'], FALLBACK);
        assert_eq!(split.path, "");
        assert_eq!(split.file_name, "demo");
    }

    #[test]
    fn test_trailing_divider() {
        let split = split_program_path(Some("bin/"), &['/'], FALLBACK);
        assert_eq!(split.path, "bin");
        assert_eq!(split.file_name, "");
    }

    #[test]
    fn test_missing_program_path() {
        let split = split_program_path(None, default_dividers(), FALLBACK);
        assert_eq!(split.path, "");
        assert_eq!(split.file_name, FALLBACK);
    }
}
