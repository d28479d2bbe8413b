//! Holding command implementation

use super::output::{emit, Report};
use super::CommandContext;
use crate::format::{format_brl, format_pct};
use crate::portfolio::HoldingPerformance;
use clap::Args;
use rust_decimal::Decimal;

#[derive(Args, Debug)]
pub struct HoldingArgs {
    /// Shares held
    #[arg(long)]
    pub shares: u64,

    /// Price per share paid at purchase
    #[arg(long)]
    pub bought_at: Decimal,

    /// Current quoted price per share
    #[arg(long)]
    pub price: Decimal,
}

impl Report for HoldingPerformance {
    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Shares", self.shares.to_string()),
            ("Cost basis", format_brl(self.cost_basis)),
            ("Current value", format_brl(self.current_value)),
            ("Profit", format_brl(self.profit)),
            ("Since purchase", format_pct(self.percentage_change)),
        ]
    }
}

impl HoldingArgs {
    pub fn execute(&self, ctx: &CommandContext) -> anyhow::Result<()> {
        let performance = HoldingPerformance::evaluate(self.shares, self.bought_at, self.price)?;
        emit(&performance, ctx.format)
    }
}
