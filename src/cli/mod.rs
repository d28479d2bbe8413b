//! CLI interface for art-shares
//!
//! Provides subcommands for:
//! - `quote`: Next share price from a day's trading volume
//! - `value`: Market value and per-share price of an artwork
//! - `fee`: Platform fee for a transaction amount
//! - `settle`: Gross, fee, and payout of a share trade
//! - `holding`: Performance of a position since purchase
//! - `simulate`: Price history from daily volumes
//! - `config`: Show effective configuration

mod fee;
mod holding;
mod output;
mod quote;
mod simulate;
mod value;

pub use fee::{FeeArgs, SettleArgs};
pub use holding::HoldingArgs;
pub use output::Report;
pub use quote::QuoteArgs;
pub use simulate::{load_daily_volumes, SimulateArgs};
pub use value::ValueArgs;

use crate::config::{Config, OutputFormat};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "art-shares")]
#[command(about = "Share pricing for fractional artwork investment")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: String,

    /// Output format, overriding the configuration
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Next share price from a day's trading volume
    Quote(QuoteArgs),
    /// Market value and per-share price of an artwork
    Value(ValueArgs),
    /// Platform fee for a transaction amount
    Fee(FeeArgs),
    /// Gross, fee, and payout of a share trade
    Settle(SettleArgs),
    /// Performance of a position since purchase
    Holding(HoldingArgs),
    /// Price history from daily volumes
    Simulate(SimulateArgs),
    /// Show effective configuration
    Config,
}

/// Settings every command runs with
#[derive(Debug, Clone, Copy)]
pub struct CommandContext {
    /// How results are rendered
    pub format: OutputFormat,
    /// Shares per artwork when a command omits `--total-shares`
    pub total_shares: u64,
}

impl CommandContext {
    /// Resolve settings from the config and command-line overrides
    pub fn new(config: &Config, format: Option<OutputFormat>) -> Self {
        Self {
            format: format.unwrap_or(config.output.format),
            total_shares: config.listing.total_shares,
        }
    }

    /// Shares outstanding, falling back to the configured default
    pub fn shares(&self, total_shares: Option<u64>) -> u64 {
        total_shares.unwrap_or(self.total_shares)
    }
}
