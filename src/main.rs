//! Listening Insights - computes listening metrics from a JSON snapshot.
//!
//! Reads the payload from stdin (or a file), writes the report as JSON to
//! stdout (or a file). Diagnostics go to stderr.

use clap::Parser;
use listening_insights::cli;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Logs share stderr with anyhow; stdout is reserved for the report
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("listening_insights=info".parse()?))
        .init();

    cli::run_command(&args)
}
