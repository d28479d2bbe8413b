//! Portfolio module
//!
//! Performance of an investor's position in one artwork

use crate::error::{checked_mul, ensure_non_negative, ensure_positive, percent_change, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Value and return of a holding since purchase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldingPerformance {
    /// Shares held
    pub shares: u64,
    /// Amount paid for the shares
    pub cost_basis: Decimal,
    /// Shares valued at the current quote
    pub current_value: Decimal,
    /// Current value minus cost basis
    pub profit: Decimal,
    /// Price change since purchase, in percent
    pub percentage_change: Decimal,
}

impl HoldingPerformance {
    /// Evaluate a holding bought at `initial_price` and now quoted at `current_price`
    pub fn evaluate(shares: u64, initial_price: Decimal, current_price: Decimal) -> Result<Self> {
        ensure_positive("initial_price", initial_price)?;
        ensure_non_negative("current_price", current_price)?;

        let held = Decimal::from(shares);
        let cost_basis = checked_mul("cost basis", held, initial_price)?;
        let current_value = checked_mul("holding value", held, current_price)?;
        let percentage_change = percent_change("holding change", initial_price, current_price)?;

        Ok(Self {
            shares,
            cost_basis,
            current_value,
            profit: current_value - cost_basis,
            percentage_change,
        })
    }

    /// Whether the holding is at or above its purchase price
    pub fn is_gain(&self) -> bool {
        self.percentage_change >= Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_holding_gain() {
        let perf = HoldingPerformance::evaluate(10, dec!(15), dec!(16.50)).unwrap();
        assert_eq!(perf.cost_basis, dec!(150));
        assert_eq!(perf.current_value, dec!(165));
        assert_eq!(perf.profit, dec!(15));
        assert_eq!(perf.percentage_change, dec!(10.00));
        assert!(perf.is_gain());
    }

    #[test]
    fn test_holding_loss() {
        let perf = HoldingPerformance::evaluate(4, dec!(30), dec!(20)).unwrap();
        assert_eq!(perf.profit, dec!(-40));
        // -33.333... -> -33.33
        assert_eq!(perf.percentage_change, dec!(-33.33));
        assert!(!perf.is_gain());
    }

    #[test]
    fn test_holding_unchanged_counts_as_gain() {
        let perf = HoldingPerformance::evaluate(1, dec!(12), dec!(12)).unwrap();
        assert_eq!(perf.percentage_change, dec!(0));
        assert!(perf.is_gain());
    }

    #[test]
    fn test_holding_overflow_rejected() {
        assert_eq!(
            HoldingPerformance::evaluate(u64::MAX, dec!(10000000000), dec!(1)),
            Err(ValidationError::Overflow {
                operation: "cost basis"
            })
        );
        assert_eq!(
            HoldingPerformance::evaluate(1, dec!(0.01), Decimal::MAX),
            Err(ValidationError::Overflow {
                operation: "holding change"
            })
        );
    }

    #[test]
    fn test_holding_rejects_zero_purchase_price() {
        assert!(matches!(
            HoldingPerformance::evaluate(1, dec!(0), dec!(12)),
            Err(ValidationError::NonPositivePrice {
                field: "initial_price",
                ..
            })
        ));
    }
}
