//! Property tests for UTC date parsing and month arithmetic.

use proptest::prelude::*;

use captable::{format_utc_date, is_valid_iso_date, months_between, parse_utc_date, UtcDate};

/// Dates whose day exists in every month, so month arithmetic never clamps
fn safe_date() -> impl Strategy<Value = UtcDate> {
    (1900i32..=2200, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| UtcDate::from_ymd(y, m, d).unwrap())
}

fn any_date() -> impl Strategy<Value = UtcDate> {
    (1900i32..=2200, 1u32..=12, 1u32..=31)
        .prop_filter_map("day must exist", |(y, m, d)| UtcDate::from_ymd(y, m, d))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: formatting a parsed YYYY-MM-DD gives back the same string.
    #[test]
    fn property_plain_date_round_trips(date in any_date()) {
        let text = format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day());
        prop_assert!(is_valid_iso_date(&text));
        let parsed = parse_utc_date(&text).unwrap();
        prop_assert_eq!(format_utc_date(&parsed), text);
    }

    /// PROPERTY: adding n months and measuring back gives exactly n.
    #[test]
    fn property_months_between_inverts_add_months(start in safe_date(), n in 0u32..=600) {
        let later = start.checked_add_months(n).unwrap();
        prop_assert_eq!(months_between(&later, &start), n);
    }

    /// PROPERTY: whole_months_after lands on a date exactly n whole months on,
    /// including for starts on the 29th to 31st.
    #[test]
    fn property_whole_months_after_matches_months_between(start in any_date(), n in 0u32..=600) {
        let due = start.whole_months_after(n).unwrap();
        prop_assert_eq!(months_between(&due, &start), n);
        prop_assert!(due >= start);
    }

    /// PROPERTY: the day before a month anniversary is still inside the previous month.
    #[test]
    fn property_partial_month_does_not_count(
        start in (1900i32..=2200, 1u32..=12, 2u32..=28),
        n in 1u32..=600,
    ) {
        let (y, m, d) = start;
        let start = UtcDate::from_ymd(y, m, d).unwrap();
        let anniversary = start.checked_add_months(n).unwrap();
        let day_before = UtcDate::from_ymd(anniversary.year(), anniversary.month(), d - 1).unwrap();
        prop_assert_eq!(months_between(&day_before, &start), n - 1);
    }

    /// PROPERTY: months_between never goes negative, whatever the order.
    #[test]
    fn property_months_between_floors_at_zero(a in any_date(), b in any_date()) {
        let (later, earlier) = if a >= b { (a, b) } else { (b, a) };
        prop_assert_eq!(months_between(&earlier, &later), 0);
        let forward = months_between(&later, &earlier);
        let years = (later.year() - earlier.year()) as u32;
        prop_assert!(forward <= years * 12 + 11);
    }

    /// PROPERTY: arbitrary input never panics the parser.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,40}") {
        let valid = is_valid_iso_date(&s);
        prop_assert_eq!(valid, parse_utc_date(&s).is_ok());
    }
}
