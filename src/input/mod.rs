//! Input processing module
//! Handles argument enumeration, program path splitting and source file reading

pub mod args;
pub mod extension;
pub mod int_arg;
pub mod program_path;
pub mod source;
