//! Price history simulator

use super::{DailyVolume, PriceHistory, PricePoint};
use crate::error::{ensure_positive, ensure_shares, Result, ValidationError};
use crate::model::{PriceModel, PriceUpdateInput, VolumePressureModel};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Applies a price model one trading day at a time
pub struct PriceSimulator<M: PriceModel = VolumePressureModel> {
    model: M,
    total_shares: u64,
}

impl PriceSimulator<VolumePressureModel> {
    /// Create a simulator using the volume pressure model
    pub fn new(total_shares: u64) -> Self {
        Self::with_model(VolumePressureModel, total_shares)
    }
}

impl<M: PriceModel> PriceSimulator<M> {
    /// Create a simulator with a custom price model
    pub fn with_model(model: M, total_shares: u64) -> Self {
        Self {
            model,
            total_shares,
        }
    }

    /// Shares outstanding for the simulated artwork
    pub fn total_shares(&self) -> u64 {
        self.total_shares
    }

    /// Build the price series starting at `start_price` on `start_date`
    ///
    /// Each day's price is computed from the previous day's quote. Days must
    /// come strictly after `start_date` and in increasing date order.
    pub fn simulate(
        &self,
        start_price: Decimal,
        start_date: NaiveDate,
        days: &[DailyVolume],
    ) -> Result<PriceHistory> {
        ensure_shares(self.total_shares)?;
        ensure_positive("start_price", start_price)?;

        let mut points = Vec::with_capacity(days.len() + 1);
        points.push(PricePoint {
            date: start_date,
            price: start_price,
        });

        let mut previous = PricePoint {
            date: start_date,
            price: start_price,
        };
        for day in days {
            if day.date <= previous.date {
                return Err(ValidationError::UnorderedHistory {
                    previous: previous.date,
                    date: day.date,
                });
            }

            let input = PriceUpdateInput::new(
                previous.price,
                day.buy_volume,
                day.sell_volume,
                self.total_shares,
            );
            previous = PricePoint {
                date: day.date,
                price: self.model.next_price(&input)?,
            };
            points.push(previous);
        }

        Ok(PriceHistory { points })
    }
}
