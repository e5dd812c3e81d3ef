//! Configuration management for the command line demo

use crate::error::{DemoError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub program: ProgramConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramConfig {
    /// File name used when the OS passes no program path
    pub fallback_name: String,
    /// Extension of the companion source file
    pub source_extension: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    pub pretty_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            program: ProgramConfig {
                fallback_name: "command_line_demo".to_string(),
                source_extension: "rs".to_string(),
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
                pretty_json: true,
            },
        }
    }
}

impl Config {
    /// Loads `path` when given, else the user config file if one exists,
    /// else the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let default_path = Self::config_path();
                if default_path.exists() {
                    Self::load_from(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DemoError::Configuration(format!("Failed to read config '{}': {}", path.display(), e))
        })?;
        toml::from_str(&content)
            .map_err(|e| DemoError::Configuration(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| DemoError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("command-line-demo")
            .join("config.toml")
    }
}
