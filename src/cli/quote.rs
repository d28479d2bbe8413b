//! Quote command implementation

use super::output::{emit, Report};
use super::CommandContext;
use crate::error::percent_change;
use crate::format::{format_brl, format_pct};
use crate::model::{compute_new_price, PriceUpdateInput};
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Current price per share
    #[arg(long)]
    pub price: Decimal,

    /// Shares bought during the day
    #[arg(long, default_value = "0")]
    pub buy: u64,

    /// Shares sold during the day
    #[arg(long, default_value = "0")]
    pub sell: u64,

    /// Shares outstanding (defaults to the configured listing size)
    #[arg(long)]
    pub total_shares: Option<u64>,
}

/// Result of a price update
#[derive(Debug, Clone, Serialize)]
pub struct QuoteReport {
    pub input: PriceUpdateInput,
    pub new_price: Decimal,
    pub change_pct: Decimal,
}

impl Report for QuoteReport {
    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Current price", format_brl(self.input.current_price)),
            ("Bought", self.input.daily_buy_volume.to_string()),
            ("Sold", self.input.daily_sell_volume.to_string()),
            ("Total shares", self.input.total_shares.to_string()),
            ("New price", format_brl(self.new_price)),
            ("Change", format_pct(self.change_pct)),
        ]
    }
}

impl QuoteArgs {
    /// Compute the quote without printing it
    pub fn run(&self, ctx: &CommandContext) -> anyhow::Result<QuoteReport> {
        let input = PriceUpdateInput::new(
            self.price,
            self.buy,
            self.sell,
            ctx.shares(self.total_shares),
        );
        let new_price = compute_new_price(&input)?;
        let change_pct = percent_change("quote change", input.current_price, new_price)?;

        tracing::debug!(
            current = %input.current_price,
            new = %new_price,
            net_buying = input.is_net_buying(),
            "Computed quote"
        );

        Ok(QuoteReport {
            input,
            new_price,
            change_pct,
        })
    }

    pub fn execute(&self, ctx: &CommandContext) -> anyhow::Result<()> {
        let report = self.run(ctx)?;
        emit(&report, ctx.format)
    }
}
