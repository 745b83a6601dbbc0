//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `analyze`: payload in, report out
//! - `init_config`: write a default configuration file

mod analyze;
mod init_config;

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::{self, Config};

pub use analyze::cmd_analyze;
pub use init_config::cmd_init_config;

/// Listening Insights CLI
///
/// With no subcommand, reads a listening snapshot from stdin and writes the
/// report to stdout.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to the OS config directory)
    #[arg(long, global = true, env = "LISTENING_INSIGHTS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a listening snapshot
    Analyze(AnalyzeArgs),
    /// Write the default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Arguments for `analyze`
#[derive(Args, Debug, Clone, Default)]
pub struct AnalyzeArgs {
    /// Read the payload from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Emit single-line JSON regardless of config
    #[arg(long)]
    pub compact: bool,
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Analyze(args)) => {
            let config = load_config(cli.config.as_deref());
            cmd_analyze(args, &config)
        }
        Some(Commands::InitConfig { force }) => cmd_init_config(cli.config.as_deref(), *force),
        None => {
            let config = load_config(cli.config.as_deref());
            cmd_analyze(&AnalyzeArgs::default(), &config)
        }
    }
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Load config from an explicit path or the default location
pub(crate) fn load_config(path: Option<&Path>) -> Config {
    match path {
        Some(path) => config::load_from(path),
        None => config::load(),
    }
}
