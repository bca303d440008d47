//! CLI library components for the CDD reformatter.

pub mod config;
pub mod logging;
pub mod report;
