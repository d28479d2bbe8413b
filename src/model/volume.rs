//! Volume pressure price model
//!
//! Moves the price by the fraction of outstanding shares that changed hands
//! net, capped at [`MAX_DAILY_MOVE`] in either direction:
//! new = current * (1 + clamp(sign(net) * |net| / total, -0.10, 0.10))

use super::{PriceModel, PriceUpdateInput};
use crate::error::{checked_mul, ensure_positive, ensure_shares, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Largest fractional price move allowed per update (one trading day)
pub const MAX_DAILY_MOVE: Decimal = dec!(0.10);

/// Net-volume driven price model
#[derive(Debug, Clone, Copy, Default)]
pub struct VolumePressureModel;

impl VolumePressureModel {
    /// Create a new volume pressure model
    pub fn new() -> Self {
        Self
    }

    /// Signed fractional change before clamping
    ///
    /// A day with no net volume counts as non-positive. The magnitude is
    /// zero in that case, so the price is unchanged.
    fn raw_change(input: &PriceUpdateInput) -> Decimal {
        let fraction = Decimal::from(input.net_volume_abs()) / Decimal::from(input.total_shares);
        if input.is_net_buying() {
            fraction
        } else {
            -fraction
        }
    }
}

impl PriceModel for VolumePressureModel {
    fn next_price(&self, input: &PriceUpdateInput) -> Result<Decimal> {
        ensure_shares(input.total_shares)?;
        ensure_positive("current_price", input.current_price)?;

        let change = Self::raw_change(input).clamp(-MAX_DAILY_MOVE, MAX_DAILY_MOVE);
        let new_price = checked_mul("price update", input.current_price, Decimal::ONE + change)?;

        Ok(new_price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }
}

/// Compute the next quoted share price with the default model
pub fn compute_new_price(input: &PriceUpdateInput) -> Result<Decimal> {
    VolumePressureModel.next_price(input)
}
