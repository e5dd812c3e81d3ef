//! Optional integer argument at `argv[1]`

use crate::input::args::ArgumentList;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum IntArgument {
    Absent,
    Parsed(i32),
    Invalid(String),
}

impl IntArgument {
    pub fn from_args(args: &ArgumentList) -> Self {
        if args.count() <= 1 {
            return IntArgument::Absent;
        }
        let raw = args.first().unwrap_or_default();
        match parse_int_prefix(raw) {
            Some(value) => IntArgument::Parsed(value),
            None => IntArgument::Invalid(raw.to_string()),
        }
    }
}

fn int_prefix() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\s*([+-]?[0-9]+)").expect("integer prefix pattern is valid"))
}

/// Reads a leading integer the way stream extraction does: whitespace is
/// skipped, a sign is optional and anything after the digits is ignored.
/// Returns `None` when there are no digits or the value overflows `i32`.
pub fn parse_int_prefix(input: &str) -> Option<i32> {
    let digits = int_prefix().captures(input)?.get(1)?.as_str();
    digits.parse::<i32>().ok()
}
