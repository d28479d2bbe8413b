//! Valuation module
//!
//! Market value, per-share price, platform fees, and trade settlement

mod fees;
mod market;

pub use fees::{compute_platform_fee, settle_trade, FeeKind, Settlement};
pub use market::{compute_market_value, compute_share_price, MarketValueInput};

use rust_decimal::{Decimal, RoundingStrategy};

/// Round a monetary amount to whole cents, half away from zero
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
