//! Value command implementation

use super::output::{emit, Report};
use super::CommandContext;
use crate::format::format_brl;
use crate::valuation::{compute_market_value, compute_share_price, MarketValueInput};
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct ValueArgs {
    /// Appraised price at listing
    #[arg(long)]
    pub original_price: Decimal,

    /// Shares sold so far
    #[arg(long)]
    pub sold: u64,

    /// Shares issued (defaults to the configured listing size)
    #[arg(long)]
    pub total_shares: Option<u64>,
}

/// Market value and derived share price
#[derive(Debug, Clone, Serialize)]
pub struct ValueReport {
    pub input: MarketValueInput,
    pub market_value: Decimal,
    pub share_price: Decimal,
}

impl Report for ValueReport {
    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Original price", format_brl(self.input.original_price)),
            (
                "Shares sold",
                format!("{} / {}", self.input.shares_sold, self.input.total_shares),
            ),
            ("Market value", format_brl(self.market_value)),
            ("Share price", format_brl(self.share_price)),
        ]
    }
}

impl ValueArgs {
    /// Compute the valuation without printing it
    pub fn run(&self, ctx: &CommandContext) -> anyhow::Result<ValueReport> {
        let input = MarketValueInput::new(
            self.original_price,
            ctx.shares(self.total_shares),
            self.sold,
        );
        let market_value = compute_market_value(&input)?;
        let share_price = compute_share_price(market_value, input.total_shares)?;

        if input.is_sold_out() {
            tracing::info!(market_value = %market_value, "Artwork sold out");
        }

        Ok(ValueReport {
            input,
            market_value,
            share_price,
        })
    }

    pub fn execute(&self, ctx: &CommandContext) -> anyhow::Result<()> {
        let report = self.run(ctx)?;
        emit(&report, ctx.format)
    }
}
