//! Price history module
//!
//! Replays daily trading volumes through a price model to build a dated
//! price series

mod simulator;

pub use simulator::PriceSimulator;

use crate::error::{percent_change, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregated trading for one artwork on one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyVolume {
    /// Trading day
    pub date: NaiveDate,
    /// Shares bought
    pub buy_volume: u64,
    /// Shares sold
    pub sell_volume: u64,
}

/// Quoted price at the close of a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading day the quote closed on
    pub date: NaiveDate,
    /// Price per share at the close
    pub price: Decimal,
}

/// Overall direction of a price series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Last price at or above the first
    Up,
    /// Last price below the first
    Down,
    /// Fewer than two points
    Flat,
}

/// Ordered price series for one artwork
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceHistory {
    /// Quotes in increasing date order, starting price first
    pub points: Vec<PricePoint>,
}

impl PriceHistory {
    /// Number of points in the series
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First quoted price
    pub fn first_price(&self) -> Option<Decimal> {
        self.points.first().map(|p| p.price)
    }

    /// Most recent quoted price
    pub fn last_price(&self) -> Option<Decimal> {
        self.points.last().map(|p| p.price)
    }

    /// Direction from first to last price
    pub fn trend(&self) -> Trend {
        if self.points.len() < 2 {
            return Trend::Flat;
        }
        match (self.first_price(), self.last_price()) {
            (Some(first), Some(last)) if last >= first => Trend::Up,
            (Some(_), Some(_)) => Trend::Down,
            _ => Trend::Flat,
        }
    }

    /// Percent change from first to last price, rounded to 2 places
    pub fn change_pct(&self) -> Result<Decimal> {
        match (self.first_price(), self.last_price()) {
            (Some(first), Some(last)) if !first.is_zero() => {
                percent_change("history change", first, last)
            }
            _ => Ok(Decimal::ZERO),
        }
    }
}
