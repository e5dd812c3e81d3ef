//! Command line demo library

pub mod cli;
pub mod config;
pub mod demo;
pub mod error;
pub mod input;
pub mod output;

pub use config::Config;
pub use error::{DemoError, Result};
