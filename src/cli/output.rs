//! Rendering of command results

use crate::config::OutputFormat;
use serde::Serialize;

/// A command result that renders as JSON or as a labelled table
pub trait Report: Serialize {
    /// Label/value rows for table output
    fn rows(&self) -> Vec<(&'static str, String)>;
}

/// Render a report in the requested format
pub fn render<R: Report>(report: &R, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Table => {
            let rows = report.rows();
            let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
            let lines: Vec<String> = rows
                .iter()
                .map(|(label, value)| format!("{label:<width$}  {value}"))
                .collect();
            Ok(lines.join("\n"))
        }
    }
}

/// Print a report to stdout
pub fn emit<R: Report>(report: &R, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(report, format)?);
    Ok(())
}
