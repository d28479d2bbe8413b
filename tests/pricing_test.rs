//! Integration tests for the pricing engine

use art_shares::valuation::{round_cents, settle_trade};
use art_shares::{
    compute_market_value, compute_new_price, compute_platform_fee, compute_share_price, FeeKind,
    MarketValueInput, PriceUpdateInput, ValidationError,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_reference_quotes() {
    let cases = [
        (dec!(100), 0, 0, 100, dec!(100.00)),
        (dec!(100), 20, 0, 100, dec!(110.00)),
        (dec!(200), 5, 10, 100, dec!(190.00)),
    ];
    for (price, buy, sell, total, expected) in cases {
        let input = PriceUpdateInput::new(price, buy, sell, total);
        assert_eq!(compute_new_price(&input).unwrap(), expected, "{input:?}");
    }
}

#[test]
fn test_reference_valuations() {
    let half = MarketValueInput::new(dec!(1000), 100, 50);
    assert_eq!(compute_market_value(&half).unwrap(), dec!(1500.00));

    let sold_out = MarketValueInput::new(dec!(1000), 100, 100);
    assert_eq!(compute_market_value(&sold_out).unwrap(), dec!(4000.00));

    assert_eq!(compute_share_price(dec!(1500), 100).unwrap(), dec!(15.00));
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
fn test_zero_shares_fail_fast() {
    let input = PriceUpdateInput::new(dec!(100), 10, 0, 0);
    assert_eq!(
        compute_new_price(&input),
        Err(ValidationError::ZeroTotalShares)
    );
    assert_eq!(
        compute_share_price(dec!(100), 0),
        Err(ValidationError::ZeroTotalShares)
    );
}

#[test]
fn test_value_to_share_price_pipeline() {
    let listing = MarketValueInput::new(dec!(2500), 50, 10);
    let value = compute_market_value(&listing).unwrap();
    let per_share = compute_share_price(value, listing.total_shares).unwrap();
    // 2500 * 1.2 = 3000, / 50 = 60
    assert_eq!(per_share, dec!(60));

    let settlement = settle_trade(10, per_share, FeeKind::Ipo).unwrap();
    assert_eq!(settlement.gross, dec!(600.00));
    assert_eq!(settlement.fee, dec!(30.00));
    assert_eq!(settlement.net, dec!(570.00));
}

fn cents() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000).prop_map(|c| Decimal::new(c, 2))
}

proptest! {
    #[test]
    fn prop_new_price_within_daily_band(
        price in cents(),
        buy in 0u64..50_000,
        sell in 0u64..50_000,
        total in 1u64..50_000,
    ) {
        let input = PriceUpdateInput::new(price, buy, sell, total);
        let new_price = compute_new_price(&input).unwrap();

        prop_assert!(new_price >= round_cents(price * dec!(0.90)));
        prop_assert!(new_price <= round_cents(price * dec!(1.10)));
        prop_assert!(new_price.scale() <= 2);
        prop_assert_eq!(compute_new_price(&input).unwrap(), new_price);
    }

    #[test]
    fn prop_price_direction_follows_net_volume(
        price in cents(),
        buy in 0u64..1_000,
        sell in 0u64..1_000,
        total in 1u64..1_000,
    ) {
        let input = PriceUpdateInput::new(price, buy, sell, total);
        let new_price = compute_new_price(&input).unwrap();
        if buy > sell {
            prop_assert!(new_price >= price);
        } else {
            prop_assert!(new_price <= price);
        }
    }

    #[test]
    fn prop_market_value_non_decreasing_before_sellout(
        price in cents(),
        total in 2u64..10_000,
        sold_frac in 0.0f64..1.0,
    ) {
        let sold = ((total - 1) as f64 * sold_frac) as u64;
        let sold = sold.min(total - 2);
        let lower = compute_market_value(&MarketValueInput::new(price, total, sold)).unwrap();
        let upper = compute_market_value(&MarketValueInput::new(price, total, sold + 1)).unwrap();
        prop_assert!(lower <= upper);
        prop_assert!(lower >= price);
        prop_assert!(upper <= price * dec!(2));
    }

    #[test]
    fn prop_fee_bounded_by_amount(amount in cents(), ipo in any::<bool>()) {
        let kind = if ipo { FeeKind::Ipo } else { FeeKind::Secondary };
        let fee = compute_platform_fee(amount, kind).unwrap();
        prop_assert!(fee >= Decimal::ZERO);
        prop_assert!(fee <= amount);
    }

    #[test]
    fn prop_settlement_balances(quantity in 1u64..10_000, price in cents()) {
        let settlement = settle_trade(quantity, price, FeeKind::Secondary).unwrap();
        prop_assert_eq!(settlement.net + settlement.fee, settlement.gross);
        prop_assert!(settlement.fee <= settlement.gross);
    }
}
