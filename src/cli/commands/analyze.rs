//! Analyze command: payload in, report out.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;

use tracing::info;

use super::AnalyzeArgs;
use crate::analytics::{self, Report};
use crate::config::Config;
use crate::error::{Result, ResultExt};
use crate::input;
use crate::model::ListeningSnapshot;

/// Read a snapshot, analyze it once and write the report
pub fn cmd_analyze(args: &AnalyzeArgs, config: &Config) -> anyhow::Result<()> {
    config.analysis.mood.validate()?;

    let snapshot = match &args.input {
        Some(path) => read_snapshot(path)?,
        None => input::from_reader(io::stdin().lock()).with_context("reading payload from stdin")?,
    };

    let report = analytics::analyze(&snapshot, &config.analysis);
    let pretty = config.output.pretty && !args.compact;

    match &args.output {
        Some(path) => {
            write_report(&report, pretty, File::create(path)?)?;
            info!("Wrote report to {:?}", path);
        }
        None => write_report(&report, pretty, io::stdout().lock())?,
    }

    Ok(())
}

fn read_snapshot(path: &Path) -> Result<ListeningSnapshot> {
    let file = File::open(path).with_context(format!("opening {}", path.display()))?;
    input::from_reader(BufReader::new(file)).with_context(format!("reading {}", path.display()))
}

fn write_report(report: &Report, pretty: bool, mut out: impl Write) -> Result<()> {
    let json = report.to_json(pretty)?;
    writeln!(out, "{json}")?;
    out.flush()?;
    Ok(())
}
