//! Share price model module
//!
//! Derives the next quoted share price from a day's net trading pressure

mod volume;

pub use volume::{compute_new_price, VolumePressureModel, MAX_DAILY_MOVE};

use crate::error::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One day's aggregated trading activity for one artwork
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceUpdateInput {
    /// Quoted price per share before the update
    pub current_price: Decimal,
    /// Shares bought during the day
    pub daily_buy_volume: u64,
    /// Shares sold during the day
    pub daily_sell_volume: u64,
    /// Shares outstanding for the artwork
    pub total_shares: u64,
}

impl PriceUpdateInput {
    /// Create a new price update input
    pub fn new(
        current_price: Decimal,
        daily_buy_volume: u64,
        daily_sell_volume: u64,
        total_shares: u64,
    ) -> Self {
        Self {
            current_price,
            daily_buy_volume,
            daily_sell_volume,
            total_shares,
        }
    }

    /// Whether buys outnumbered sells
    pub fn is_net_buying(&self) -> bool {
        self.daily_buy_volume > self.daily_sell_volume
    }

    /// Magnitude of the net volume in shares
    pub fn net_volume_abs(&self) -> u64 {
        self.daily_buy_volume.abs_diff(self.daily_sell_volume)
    }
}

/// Trait for share price model implementations
pub trait PriceModel: Send + Sync {
    /// Calculate the next quoted price per share
    fn next_price(&self, input: &PriceUpdateInput) -> Result<Decimal>;
}
