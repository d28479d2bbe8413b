//! Market value and share price
//!
//! Market value grows linearly from the original price at 0% sold to twice
//! the original price at 100% sold, then doubles again on a full sellout.

use crate::error::{
    checked_mul, ensure_non_negative, ensure_positive, ensure_shares, Result, ValidationError,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Share structure of one artwork
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketValueInput {
    /// Appraised price at listing
    pub original_price: Decimal,
    /// Shares issued
    pub total_shares: u64,
    /// Shares sold so far
    pub shares_sold: u64,
}

impl MarketValueInput {
    /// Create a new market value input
    pub fn new(original_price: Decimal, total_shares: u64, shares_sold: u64) -> Self {
        Self {
            original_price,
            total_shares,
            shares_sold,
        }
    }

    /// Whether every issued share has been sold
    pub fn is_sold_out(&self) -> bool {
        self.shares_sold == self.total_shares
    }

    fn validate(&self) -> Result<()> {
        ensure_shares(self.total_shares)?;
        ensure_positive("original_price", self.original_price)?;
        if self.shares_sold > self.total_shares {
            return Err(ValidationError::SharesSoldOutOfRange {
                sold: self.shares_sold,
                total: self.total_shares,
            });
        }
        Ok(())
    }
}

/// Compute the implied market value of an artwork
pub fn compute_market_value(input: &MarketValueInput) -> Result<Decimal> {
    input.validate()?;

    let sold_ratio = Decimal::from(input.shares_sold) / Decimal::from(input.total_shares);
    let market_value =
        checked_mul("market value", input.original_price, Decimal::ONE + sold_ratio)?;

    // Full sellout jumps from 2x to 4x the original price
    if input.is_sold_out() {
        return checked_mul("market value", market_value, Decimal::TWO);
    }

    Ok(market_value)
}

/// Compute a uniform per-share price from a market value
pub fn compute_share_price(market_value: Decimal, total_shares: u64) -> Result<Decimal> {
    ensure_shares(total_shares)?;
    ensure_non_negative("market_value", market_value)?;
    Ok(market_value / Decimal::from(total_shares))
}
