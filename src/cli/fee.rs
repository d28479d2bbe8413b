//! Fee and settle command implementations

use super::output::{emit, Report};
use super::CommandContext;
use crate::format::format_brl;
use crate::valuation::{compute_platform_fee, settle_trade, FeeKind, Settlement};
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct FeeArgs {
    /// Transaction amount
    #[arg(long)]
    pub amount: Decimal,

    /// Fee schedule: ipo or secondary
    #[arg(long)]
    pub kind: FeeKind,
}

/// Platform fee on an amount
#[derive(Debug, Clone, Serialize)]
pub struct FeeReport {
    pub amount: Decimal,
    pub kind: FeeKind,
    pub rate: Decimal,
    pub fee: Decimal,
}

impl Report for FeeReport {
    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Amount", format_brl(self.amount)),
            ("Kind", self.kind.to_string()),
            ("Rate", self.rate.to_string()),
            ("Fee", format_brl(self.fee)),
        ]
    }
}

impl FeeArgs {
    /// Compute the fee without printing it
    pub fn run(&self) -> anyhow::Result<FeeReport> {
        let fee = compute_platform_fee(self.amount, self.kind)?;
        Ok(FeeReport {
            amount: self.amount,
            kind: self.kind,
            rate: self.kind.rate(),
            fee,
        })
    }

    pub fn execute(&self, ctx: &CommandContext) -> anyhow::Result<()> {
        let report = self.run()?;
        emit(&report, ctx.format)
    }
}

#[derive(Args, Debug)]
pub struct SettleArgs {
    /// Shares traded
    #[arg(long)]
    pub quantity: u64,

    /// Price per share
    #[arg(long)]
    pub price: Decimal,

    /// Fee schedule: ipo or secondary
    #[arg(long, default_value = "secondary")]
    pub kind: FeeKind,
}

impl Report for Settlement {
    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Kind", self.kind.to_string()),
            ("Quantity", self.quantity.to_string()),
            ("Price per share", format_brl(self.price_per_share)),
            ("Gross", format_brl(self.gross)),
            ("Platform fee", format_brl(self.fee)),
            ("Net payout", format_brl(self.net)),
        ]
    }
}

impl SettleArgs {
    pub fn execute(&self, ctx: &CommandContext) -> anyhow::Result<()> {
        let settlement = settle_trade(self.quantity, self.price, self.kind)?;
        tracing::debug!(
            kind = %settlement.kind,
            gross = %settlement.gross,
            fee = %settlement.fee,
            "Settled trade"
        );
        emit(&settlement, ctx.format)
    }
}
