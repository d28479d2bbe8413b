//! Platform fees and trade settlement

use super::round_cents;
use crate::error::{checked_mul, ensure_non_negative, ensure_positive, Result, ValidationError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Market a transaction happened in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeKind {
    /// Primary sale during the initial listing
    Ipo,
    /// Resale between investors
    Secondary,
}

impl FeeKind {
    /// Platform's share of the transaction amount
    pub fn rate(self) -> Decimal {
        match self {
            FeeKind::Ipo => dec!(0.05),
            FeeKind::Secondary => dec!(0.025),
        }
    }

    /// Name used in configuration and on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            FeeKind::Ipo => "ipo",
            FeeKind::Secondary => "secondary",
        }
    }
}

impl fmt::Display for FeeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeeKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ipo" => Ok(FeeKind::Ipo),
            "secondary" => Ok(FeeKind::Secondary),
            other => Err(ValidationError::UnknownFeeKind(other.to_string())),
        }
    }
}

/// Compute the platform's cut of a transaction amount
pub fn compute_platform_fee(amount: Decimal, kind: FeeKind) -> Result<Decimal> {
    ensure_non_negative("amount", amount)?;
    checked_mul("platform fee", amount, kind.rate())
}

/// Money movement for one share trade, in cents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Fee schedule applied
    pub kind: FeeKind,
    /// Shares traded
    pub quantity: u64,
    /// Price paid per share
    pub price_per_share: Decimal,
    /// Amount paid by the buyer
    pub gross: Decimal,
    /// Platform fee withheld
    pub fee: Decimal,
    /// Amount paid out after the fee
    pub net: Decimal,
}

/// Settle a trade of `quantity` shares at `price_per_share`
///
/// Gross and fee are each rounded to cents, so `net + fee == gross` holds
/// exactly.
pub fn settle_trade(quantity: u64, price_per_share: Decimal, kind: FeeKind) -> Result<Settlement> {
    if quantity == 0 {
        return Err(ValidationError::ZeroQuantity);
    }
    ensure_positive("price_per_share", price_per_share)?;

    let gross = round_cents(checked_mul(
        "settlement",
        Decimal::from(quantity),
        price_per_share,
    )?);
    let fee = round_cents(compute_platform_fee(gross, kind)?);

    Ok(Settlement {
        kind,
        quantity,
        price_per_share,
        gross,
        fee,
        net: gross - fee,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_rates() {
        assert_eq!(
            compute_platform_fee(dec!(1000), FeeKind::Ipo).unwrap(),
            dec!(50.00)
        );
        assert_eq!(
            compute_platform_fee(dec!(1000), FeeKind::Secondary).unwrap(),
            dec!(25.00)
        );
    }

    #[test]
    fn test_fee_is_unrounded() {
        assert_eq!(
            compute_platform_fee(dec!(0.01), FeeKind::Secondary).unwrap(),
            dec!(0.00025)
        );
    }

    #[test]
    fn test_fee_zero_amount() {
        assert_eq!(
            compute_platform_fee(dec!(0), FeeKind::Ipo).unwrap(),
            dec!(0)
        );
    }

    #[test]
    fn test_fee_rejects_negative_amount() {
        assert!(matches!(
            compute_platform_fee(dec!(-10), FeeKind::Ipo),
            Err(ValidationError::NegativeAmount { field: "amount", .. })
        ));
    }

    #[test]
    fn test_fee_kind_parse() {
        assert_eq!("ipo".parse::<FeeKind>().unwrap(), FeeKind::Ipo);
        assert_eq!("secondary".parse::<FeeKind>().unwrap(), FeeKind::Secondary);
        assert_eq!(
            "primary".parse::<FeeKind>(),
            Err(ValidationError::UnknownFeeKind("primary".to_string()))
        );
        assert!("IPO".parse::<FeeKind>().is_err());
    }

    #[test]
    fn test_fee_kind_serde() {
        let json = serde_json::to_string(&FeeKind::Secondary).unwrap();
        assert_eq!(json, "\"secondary\"");
        let kind: FeeKind = serde_json::from_str("\"ipo\"").unwrap();
        assert_eq!(kind, FeeKind::Ipo);
    }

    #[test]
    fn test_settle_secondary_trade() {
        let settlement = settle_trade(3, dec!(15.50), FeeKind::Secondary).unwrap();
        assert_eq!(settlement.gross, dec!(46.50));
        // 46.50 * 0.025 = 1.1625 -> 1.16
        assert_eq!(settlement.fee, dec!(1.16));
        assert_eq!(settlement.net, dec!(45.34));
    }

    #[test]
    fn test_settle_rounds_gross_to_cents() {
        let settlement = settle_trade(3, dec!(3.335), FeeKind::Ipo).unwrap();
        // 10.005 -> 10.01, fee 0.5005 -> 0.50
        assert_eq!(settlement.gross, dec!(10.01));
        assert_eq!(settlement.fee, dec!(0.50));
        assert_eq!(settlement.net + settlement.fee, settlement.gross);
    }

    #[test]
    fn test_settle_overflow_rejected() {
        assert_eq!(
            settle_trade(u64::MAX, dec!(10000000000), FeeKind::Ipo),
            Err(ValidationError::Overflow {
                operation: "settlement"
            })
        );
    }

    #[test]
    fn test_settle_rejects_empty_trade() {
        assert_eq!(
            settle_trade(0, dec!(10), FeeKind::Ipo),
            Err(ValidationError::ZeroQuantity)
        );
        assert!(settle_trade(1, dec!(0), FeeKind::Ipo).is_err());
    }
}
