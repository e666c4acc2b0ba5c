//! Property tests for the cap table aggregator.

use proptest::prelude::*;

use captable::{
    calc_cap, Issuance, OptionGrant, SecurityClass, SecurityKind, Snapshot, Stakeholder, UtcDate,
    Vesting,
};

fn date() -> impl Strategy<Value = UtcDate> {
    (2018i32..=2032, 1u32..=12, 1u32..=31)
        .prop_filter_map("day must exist", |(y, m, d)| UtcDate::from_ymd(y, m, d))
}

fn grant_terms() -> impl Strategy<Value = (usize, u64, Option<Vesting>)> {
    let vesting = (date(), 1u32..=60)
        .prop_flat_map(|(start, total)| (Just(start), Just(total), 0..=total))
        .prop_map(|(start, total, cliff)| Vesting::new(start, total, cliff));
    (0usize..5, 1u64..=2_000_000, proptest::option::of(vesting))
}

fn snapshot() -> impl Strategy<Value = Snapshot> {
    (
        proptest::collection::vec((0usize..5, 1u64..=5_000_000), 0..8),
        proptest::collection::vec(grant_terms(), 0..8),
        0u64..=10_000_000,
    )
        .prop_map(|(issuances, grants, pool)| {
            let grant_date = UtcDate::from_ymd(2020, 1, 1).unwrap();
            Snapshot {
                stakeholders: (0..5)
                    .map(|i| Stakeholder::new(format!("sh-{i}"), format!("Holder {i}")))
                    .collect(),
                security_classes: vec![
                    SecurityClass::new("common", "Common", SecurityKind::Common, u64::MAX),
                    SecurityClass::new("pool", "Pool", SecurityKind::OptionPool, pool),
                ],
                issuances: issuances
                    .into_iter()
                    .enumerate()
                    .map(|(n, (holder, qty))| {
                        let holder = format!("sh-{holder}");
                        Issuance::new(format!("is-{n}"), holder, "common", qty, grant_date)
                    })
                    .collect(),
                option_grants: grants
                    .into_iter()
                    .enumerate()
                    .map(|(n, (holder, qty, vesting))| {
                        let holder = format!("sh-{holder}");
                        let grant =
                            OptionGrant::new(format!("og-{n}"), holder, qty, 0.1, grant_date);
                        match vesting {
                            Some(v) => grant.with_vesting(v),
                            None => grant,
                        }
                    })
                    .collect(),
                safes: vec![],
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: percentages sum to one whenever their denominator is positive.
    #[test]
    fn property_percentages_sum_to_one(snapshot in snapshot(), as_of in date()) {
        let table = calc_cap(&snapshot, &as_of);

        let pct_out: f64 = table.rows.iter().map(|r| r.pct_outstanding).sum();
        if table.totals.outstanding.total_outstanding > 0 {
            prop_assert!((pct_out - 1.0).abs() < 1e-6, "outstanding sums to {pct_out}");
        } else {
            prop_assert_eq!(pct_out, 0.0);
        }

        // remaining pool capacity belongs to no row
        let pct_fd: f64 = table.rows.iter().map(|r| r.pct_fully_diluted).sum();
        let held = table.totals.issued_total + table.totals.grants_total;
        if table.totals.fd.total_fd > 0 {
            let expected = held as f64 / table.totals.fd.total_fd as f64;
            prop_assert!((pct_fd - expected).abs() < 1e-6);
        }
    }

    /// PROPERTY: totals add up from their parts.
    #[test]
    fn property_totals_are_consistent(snapshot in snapshot(), as_of in date()) {
        let t = calc_cap(&snapshot, &as_of).totals;

        prop_assert_eq!(t.vested_total + t.unvested_total, t.grants_total);
        prop_assert_eq!(t.outstanding.total_outstanding, t.issued_total + t.vested_total);
        prop_assert_eq!(t.fd.total_fd, t.issued_total + t.grants_total + t.pool.remaining);
        prop_assert_eq!(t.pool.remaining, t.pool.authorized.saturating_sub(t.grants_total));
    }

    /// PROPERTY: rows are ordered by fully-diluted quantity, then by id.
    #[test]
    fn property_rows_are_sorted(snapshot in snapshot(), as_of in date()) {
        let table = calc_cap(&snapshot, &as_of);
        for pair in table.rows.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(
                a.fully_diluted > b.fully_diluted
                    || (a.fully_diluted == b.fully_diluted && a.stakeholder_id < b.stakeholder_id)
            );
        }
    }
}
