//! Command-line interface for listening-insights.
//!
//! The process surface around the engine: read a payload, analyze it once,
//! write the report. Everything here returns `anyhow::Result`.

mod commands;

pub use commands::{AnalyzeArgs, Cli, Commands, run_command};
