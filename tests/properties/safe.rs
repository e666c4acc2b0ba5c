//! Property tests for SAFE conversion pricing.

use proptest::prelude::*;

use captable::{convert_safe, parse_utc_date, Safe};

fn safe(amount: f64) -> Safe {
    Safe::new("safe-1", "investor", amount, parse_utc_date("2024-01-01").unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: shares * price reconstructs the amount within one share.
    #[test]
    fn property_shares_reconstruct_amount(
        amount in 1.0f64..10_000_000.0,
        price in 0.01f64..100.0,
        pre in 1u64..100_000_000,
        cap in proptest::option::of(100_000.0f64..1_000_000_000.0),
        discount in proptest::option::of(0.05f64..=1.0),
        post_money in any::<bool>(),
    ) {
        let mut s = safe(amount);
        s.cap = cap;
        s.discount = discount;

        let c = convert_safe(&s, price, pre, post_money);
        let converted = c.shares_issued as f64 * c.conversion_price;
        let slack = amount * 1e-9;
        prop_assert!(converted <= amount + slack, "{converted} > {amount}");
        prop_assert!(amount - converted < c.conversion_price + slack);
    }

    /// PROPERTY: adding a cap never raises the conversion price.
    #[test]
    fn property_cap_never_hurts(
        amount in 1.0f64..10_000_000.0,
        price in 0.01f64..100.0,
        pre in 1u64..100_000_000,
        cap in 100_000.0f64..1_000_000_000.0,
        discount in proptest::option::of(0.05f64..=1.0),
        post_money in any::<bool>(),
    ) {
        let mut without = safe(amount);
        without.discount = discount;
        let with = without.clone().with_cap(cap);

        let base = convert_safe(&without, price, pre, post_money);
        let capped = convert_safe(&with, price, pre, post_money);
        prop_assert!(capped.conversion_price <= base.conversion_price);
        prop_assert!(capped.shares_issued >= base.shares_issued);
    }

    /// PROPERTY: adding a discount never raises the conversion price.
    #[test]
    fn property_discount_never_hurts(
        amount in 1.0f64..10_000_000.0,
        price in 0.01f64..100.0,
        pre in 1u64..100_000_000,
        cap in proptest::option::of(100_000.0f64..1_000_000_000.0),
        discount in 0.05f64..=1.0,
        post_money in any::<bool>(),
    ) {
        let mut without = safe(amount);
        without.cap = cap;
        let with = without.clone().with_discount(discount);

        let base = convert_safe(&without, price, pre, post_money);
        let discounted = convert_safe(&with, price, pre, post_money);
        prop_assert!(discounted.conversion_price <= base.conversion_price);
    }

    /// PROPERTY: degenerate amounts convert to nothing.
    #[test]
    fn property_non_positive_amount_issues_nothing(
        amount in -1_000_000.0f64..=0.0,
        price in 0.01f64..100.0,
        pre in 1u64..100_000_000,
    ) {
        let c = convert_safe(&safe(amount).with_cap(1_000_000.0), price, pre, false);
        prop_assert_eq!(c.shares_issued, 0);
    }
}
