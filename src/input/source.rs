//! Reads the companion source file into memory

use crate::error::{DemoError, Result};
use log::{debug, info};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;

pub const EXIT_FILE_OK: i32 = 0;
pub const EXIT_FILE_ERROR: i32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    pub path: PathBuf,
    pub content: String,
}

pub struct SourceReader;

impl SourceReader {
    /// Reads `path` whole. Invalid UTF-8 is replaced rather than rejected.
    pub async fn read(&self, path: &Path) -> Result<SourceFile> {
        let bytes = fs::read(path).await.map_err(|e| {
            debug!("Failed to read {}: {}", path.display(), e);
            DemoError::SourceNotFound(path.display().to_string())
        })?;

        info!("Read {} bytes from {}", bytes.len(), path.display());

        Ok(SourceFile {
            path: path.to_path_buf(),
            content: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}

/// Looks for `file_name` in the working directory first, then next to the
/// executable in `program_dir`. Falls back to `file_name` as given so the
/// read reports the name the user expects.
pub fn resolve_companion(file_name: &str, program_dir: &str) -> PathBuf {
    let local = PathBuf::from(file_name);
    if local.exists() || program_dir.is_empty() {
        return local;
    }

    let beside_program = Path::new(program_dir).join(file_name);
    if beside_program.exists() {
        debug!("Using companion file beside the program: {}", beside_program.display());
        beside_program
    } else {
        local
    }
}
