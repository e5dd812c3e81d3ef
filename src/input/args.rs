//! Raw command line argument enumeration

use serde::Serialize;
use std::env;

/// The arguments as the OS passed them, `argv[0]` included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ArgumentList {
    values: Vec<String>,
}

impl ArgumentList {
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    pub fn from_env() -> Self {
        let values = env::args_os()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        Self::new(values)
    }

    pub fn count(&self) -> usize {
        self.values.len()
    }

    pub fn program(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    pub fn first(&self) -> Option<&str> {
        self.values.get(1).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.values.iter().map(String::as_str).enumerate()
    }
}
