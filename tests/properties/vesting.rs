//! Property tests for the vesting calculator.

use proptest::prelude::*;

use captable::{vested_qty, UtcDate, Vesting};

fn date() -> impl Strategy<Value = UtcDate> {
    (2015i32..=2035, 1u32..=12, 1u32..=31)
        .prop_filter_map("day must exist", |(y, m, d)| UtcDate::from_ymd(y, m, d))
}

fn schedule() -> impl Strategy<Value = Vesting> {
    (date(), 1u32..=120)
        .prop_flat_map(|(start, total)| (Just(start), Just(total), 0..=total))
        .prop_map(|(start, total, cliff)| Vesting::new(start, total, cliff))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: vested quantity stays within [0, qty].
    #[test]
    fn property_vested_is_bounded(
        v in schedule(),
        qty in 0u64..=1_000_000_000_000,
        as_of in date(),
    ) {
        let vested = vested_qty(&as_of, qty, Some(&v));
        prop_assert!(vested <= qty);
    }

    /// PROPERTY: vested quantity never decreases as the as-of date advances.
    #[test]
    fn property_vested_is_monotonic(
        v in schedule(),
        qty in 0u64..=10_000_000,
        a in date(),
        b in date(),
    ) {
        let (early, late) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(vested_qty(&early, qty, Some(&v)) <= vested_qty(&late, qty, Some(&v)));
    }

    /// PROPERTY: cliff and end dates are exactly where vesting starts and completes.
    #[test]
    fn property_cliff_and_end(v in schedule(), qty in 1u64..=10_000_000, as_of in date()) {
        let cliff = v.cliff_date().unwrap();
        let end = v.end_date().unwrap();
        let vested = vested_qty(&as_of, qty, Some(&v));

        if as_of < cliff {
            prop_assert_eq!(vested, 0);
        }
        if as_of >= end {
            prop_assert_eq!(vested, qty);
        } else {
            prop_assert!(vested < qty);
        }
        if as_of >= cliff && v.cliff_months > 0 {
            prop_assert!(vested >= qty * u64::from(v.cliff_months) / u64::from(v.months_total));
        }
    }

    /// PROPERTY: a grant without a schedule never vests.
    #[test]
    fn property_no_schedule_vests_nothing(qty in 0u64..=u64::MAX, as_of in date()) {
        prop_assert_eq!(vested_qty(&as_of, qty, None), 0);
    }
}
