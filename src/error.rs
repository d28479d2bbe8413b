//! Validation errors for pricing inputs

use rust_decimal::Decimal;
use thiserror::Error;

/// A violated precondition on a pricing input.
///
/// Every pricing operation either returns a well-formed decimal or one of
/// these. Nothing is clamped or defaulted on the caller's behalf.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Share structure with no shares outstanding
    #[error("Total shares must be positive")]
    ZeroTotalShares,
    /// Price that must be strictly positive
    #[error("{field} must be positive, got {value}")]
    NonPositivePrice { field: &'static str, value: Decimal },
    /// Amount that must not be negative
    #[error("{field} must not be negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },
    /// More shares sold than exist
    #[error("Shares sold ({sold}) exceeds total shares ({total})")]
    SharesSoldOutOfRange { sold: u64, total: u64 },
    /// Fee kind not in the fee schedule
    #[error("Unknown fee kind: {0:?} (expected \"ipo\" or \"secondary\")")]
    UnknownFeeKind(String),
    /// Trade for zero shares
    #[error("Trade quantity must be positive")]
    ZeroQuantity,
    /// Daily records not strictly after the previous date
    #[error("History dates must be strictly increasing: {date} follows {previous}")]
    UnorderedHistory {
        previous: chrono::NaiveDate,
        date: chrono::NaiveDate,
    },
    /// Result does not fit in a decimal
    #[error("Arithmetic overflow in {operation}")]
    Overflow { operation: &'static str },
}

/// Result alias for pricing operations
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Reject zero or negative prices
pub(crate) fn ensure_positive(field: &'static str, value: Decimal) -> Result<()> {
    if value <= Decimal::ZERO {
        return Err(ValidationError::NonPositivePrice { field, value });
    }
    Ok(())
}

/// Reject negative amounts
pub(crate) fn ensure_non_negative(field: &'static str, value: Decimal) -> Result<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::NegativeAmount { field, value });
    }
    Ok(())
}

/// Multiply, failing instead of panicking past `Decimal::MAX`
pub(crate) fn checked_mul(operation: &'static str, lhs: Decimal, rhs: Decimal) -> Result<Decimal> {
    lhs.checked_mul(rhs).ok_or(ValidationError::Overflow { operation })
}

/// Divide, failing instead of panicking past `Decimal::MAX`
pub(crate) fn checked_div(operation: &'static str, lhs: Decimal, rhs: Decimal) -> Result<Decimal> {
    lhs.checked_div(rhs).ok_or(ValidationError::Overflow { operation })
}

/// Percent change from `from` to `to`, rounded to cents
pub(crate) fn percent_change(
    operation: &'static str,
    from: Decimal,
    to: Decimal,
) -> Result<Decimal> {
    let diff = to
        .checked_sub(from)
        .ok_or(ValidationError::Overflow { operation })?;
    let ratio = checked_div(operation, diff, from)?;
    let pct = checked_mul(operation, ratio, Decimal::ONE_HUNDRED)?;
    Ok(pct.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero))
}

/// Reject an empty share structure
pub(crate) fn ensure_shares(total_shares: u64) -> Result<()> {
    if total_shares == 0 {
        return Err(ValidationError::ZeroTotalShares);
    }
    Ok(())
}
