//! Simulate command implementation

use super::output::{emit, Report};
use super::CommandContext;
use crate::format::{format_brl, format_pct};
use crate::history::{DailyVolume, PriceHistory, PriceSimulator, Trend};
use anyhow::Context;
use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// JSON file with an array of {date, buy_volume, sell_volume} records
    #[arg(short, long)]
    pub input: PathBuf,

    /// Price per share before the first day
    #[arg(long)]
    pub price: Decimal,

    /// Date of the starting price (YYYY-MM-DD)
    #[arg(long)]
    pub start: NaiveDate,

    /// Shares outstanding (defaults to the configured listing size)
    #[arg(long)]
    pub total_shares: Option<u64>,
}

/// Simulated price series with its summary
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub total_shares: u64,
    pub trend: Trend,
    pub change_pct: Decimal,
    pub history: PriceHistory,
}

impl Report for SimulationReport {
    fn rows(&self) -> Vec<(&'static str, String)> {
        let mut rows: Vec<(&'static str, String)> = self
            .history
            .points
            .iter()
            .map(|p| ("", format!("{}  {}", p.date, format_brl(p.price))))
            .collect();
        let trend = match self.trend {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Flat => "flat",
        };
        rows.push(("Trend", trend.to_string()));
        rows.push(("Change", format_pct(self.change_pct)));
        rows
    }
}

/// Read daily volume records from a JSON file
pub fn load_daily_volumes(path: impl AsRef<Path>) -> anyhow::Result<Vec<DailyVolume>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let days: Vec<DailyVolume> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid daily volume records in {}", path.display()))?;
    Ok(days)
}

impl SimulateArgs {
    /// Run the simulation without printing it
    pub fn run(&self, ctx: &CommandContext) -> anyhow::Result<SimulationReport> {
        let days = load_daily_volumes(&self.input)?;
        tracing::info!(days = days.len(), input = ?self.input, "Simulating price history");

        let simulator = PriceSimulator::new(ctx.shares(self.total_shares));
        let history = simulator.simulate(self.price, self.start, &days)?;

        Ok(SimulationReport {
            total_shares: simulator.total_shares(),
            trend: history.trend(),
            change_pct: history.change_pct()?,
            history,
        })
    }

    pub fn execute(&self, ctx: &CommandContext) -> anyhow::Result<()> {
        let report = self.run(ctx)?;
        emit(&report, ctx.format)
    }
}
