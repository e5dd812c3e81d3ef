//! Companion filename derivation by extension swap

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionSwap {
    pub original: String,
    pub stem: String,
    pub suffix: Option<String>,
    pub extension: String,
    pub target: String,
}

/// Replaces everything after the last `.` of `file_name` with `new_ext`.
/// A name without a `.` gets `new_ext` appended.
pub fn swap_extension(file_name: &str, new_ext: &str) -> ExtensionSwap {
    let new_ext = new_ext.trim_start_matches('.');

    let (stem, suffix) = match file_name.rfind('.') {
        Some(found) => (&file_name[..found], Some(file_name[found + 1..].to_string())),
        None => (file_name, None),
    };

    ExtensionSwap {
        original: file_name.to_string(),
        stem: stem.to_string(),
        suffix,
        extension: new_ext.to_string(),
        target: format!("{}.{}", stem, new_ext),
    }
}
