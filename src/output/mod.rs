//! Output module
//! Collects the run results and renders them as a console transcript or JSON

pub mod formatter;
pub mod report;
