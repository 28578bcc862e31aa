//! Output formatting for route rendering.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use flowroute_lib::{ComparisonSummary, RouteSummary};

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

pub fn print_route(summary: &RouteSummary, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", summary.render_plain()),
        OutputFormat::Json => print_json(summary)?,
    }
    Ok(())
}

pub fn print_comparison(summary: &ComparisonSummary, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", summary.render_plain()),
        OutputFormat::Json => print_json(summary)?,
    }
    Ok(())
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialise output")?;
    println!("{json}");
    Ok(())
}
