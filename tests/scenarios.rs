//! Worked examples through the public API.

use captable::{
    calc_cap, convert_safe, parse_utc_date, vested_qty, ConversionReason, Issuance, OptionGrant,
    Safe, SecurityClass, SecurityKind, Snapshot, Stakeholder, UtcDate, Vesting,
};

fn date(s: &str) -> UtcDate {
    parse_utc_date(s).unwrap()
}

#[test]
fn four_year_schedule_with_one_year_cliff() {
    let vesting = Vesting::new(date("2024-01-01"), 48, 12);

    assert_eq!(vested_qty(&date("2024-12-31"), 4800, Some(&vesting)), 0);
    assert_eq!(vested_qty(&date("2025-01-01"), 4800, Some(&vesting)), 1200);
    assert_eq!(vested_qty(&date("2028-01-01"), 4800, Some(&vesting)), 4800);
}

#[test]
fn safe_without_terms_converts_at_round_price() {
    let safe = Safe::new("safe-1", "inv", 100_000.0, date("2024-01-01"));
    let c = convert_safe(&safe, 2.0, 5_000_000, false);

    assert_eq!(c.shares_issued, 50_000);
    assert_eq!(c.conversion_price, 2.0);
    assert_eq!(c.conversion_reason, ConversionReason::Price);
}

#[test]
fn safe_with_cap_converts_at_cap_price() {
    let safe = Safe::new("safe-1", "inv", 100_000.0, date("2024-01-01")).with_cap(4_000_000.0);
    let c = convert_safe(&safe, 2.0, 5_000_000, false);

    assert_eq!(c.conversion_price, 0.8);
    assert_eq!(c.shares_issued, 125_000);
    assert_eq!(c.conversion_reason, ConversionReason::Cap);
}

#[test]
fn fully_diluted_total_counts_unallocated_pool() {
    let start = date("2024-01-01");
    let snapshot = Snapshot {
        stakeholders: vec![
            Stakeholder::new("founder", "Founder"),
            Stakeholder::new("employee", "Employee"),
        ],
        security_classes: vec![
            SecurityClass::new("common", "Common", SecurityKind::Common, 10_000_000),
            SecurityClass::new("pool", "2024 Plan", SecurityKind::OptionPool, 2_000_000),
        ],
        issuances: vec![Issuance::new("is-1", "founder", "common", 7_000_000, start)],
        option_grants: vec![OptionGrant::new("og-1", "employee", 500_000, 0.05, start)
            .with_vesting(Vesting::new(start, 48, 12))],
        safes: vec![],
    };

    let table = calc_cap(&snapshot, &date("2028-01-01"));
    assert_eq!(table.totals.fd.total_fd, 9_000_000);
    assert_eq!(table.totals.vested_total, 500_000);
    assert_eq!(table.totals.pool.remaining, 1_500_000);
    assert_eq!(table.rows[0].stakeholder_id.as_str(), "founder");
}
