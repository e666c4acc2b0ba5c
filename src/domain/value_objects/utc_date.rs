//! UTC date value object
//!
//! Calendar dates are always interpreted in UTC, never in the host's local
//! time zone. A bare `YYYY-MM-DD` is UTC midnight; an ISO-8601 timestamp
//! without an offset is a UTC instant.
//!
//! Parsing is the only fallible step. Callers validate input with
//! [`is_valid_iso_date`] or handle the `Err` from [`parse_utc_date`]
//! before anything date-dependent runs; the engine never re-validates.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CapTableError, CapTableResult};

/// A point in time pinned to UTC, usually midnight of a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcDate(DateTime<Utc>);

impl UtcDate {
    /// Build a date at UTC midnight. Returns `None` for impossible dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::from_naive_date)
    }

    /// Today's date in UTC, at midnight.
    pub fn today() -> Self {
        Self::from_naive_date(Utc::now().date_naive())
    }

    fn from_naive_date(date: NaiveDate) -> Self {
        Self(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// The underlying UTC instant
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Add calendar months, clamping the day to the end of shorter months.
    pub fn checked_add_months(&self, months: u32) -> Option<Self> {
        self.0.checked_add_months(Months::new(months)).map(Self)
    }

    /// First date at least `months` whole months after this one, as counted
    /// by [`months_between`].
    ///
    /// Same day of the month when it exists; otherwise the 1st of the
    /// following month (Jan 31 + 1 month is Mar 1, not Feb 29).
    pub fn whole_months_after(&self, months: u32) -> Option<Self> {
        let index = i64::from(self.year()) * 12 + i64::from(self.month() - 1) + i64::from(months);
        let year = i32::try_from(index.div_euclid(12)).ok()?;
        let month = u32::try_from(index.rem_euclid(12)).ok()? + 1;

        Self::from_ymd(year, month, self.day()).or_else(|| {
            if month == 12 {
                Self::from_ymd(year.checked_add(1)?, 1, 1)
            } else {
                Self::from_ymd(year, month + 1, 1)
            }
        })
    }
}

/// Parse `YYYY-MM-DD` or an ISO-8601 timestamp as UTC.
pub fn parse_utc_date(s: &str) -> CapTableResult<UtcDate> {
    let invalid = || CapTableError::InvalidDate {
        input: s.to_string(),
    };

    if has_plain_date_shape(s) {
        return NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(UtcDate::from_naive_date)
            .map_err(|_| invalid());
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(s) {
        return Ok(UtcDate(instant.with_timezone(&Utc)));
    }

    // No offset means UTC
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| UtcDate(Utc.from_utc_datetime(&naive)))
        .ok_or_else(invalid)
}

/// Render as zero-padded `YYYY-MM-DD` from the UTC fields.
pub fn format_utc_date(date: &UtcDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Format check plus successful parse. Never fails.
pub fn is_valid_iso_date(s: &str) -> bool {
    parse_utc_date(s).is_ok()
}

/// Whole months from `earlier` to `later`.
///
/// `(yearA - yearB) * 12 + (monthA - monthB)`, minus one when the day of
/// `later` is before the day of `earlier` (a partial final month does not
/// count). Floored at zero, so passing the dates in the wrong order yields 0.
pub fn months_between(later: &UtcDate, earlier: &UtcDate) -> u32 {
    let years = i64::from(later.year()) - i64::from(earlier.year());
    let mut months = years * 12 + i64::from(later.month()) - i64::from(earlier.month());
    if later.day() < earlier.day() {
        months -= 1;
    }
    u32::try_from(months.max(0)).unwrap_or(u32::MAX)
}

/// `NNNN-NN-NN` with ASCII digits, so only zero-padded dates take the
/// date-only path.
fn has_plain_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl fmt::Display for UtcDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_utc_date(self))
    }
}

impl FromStr for UtcDate {
    type Err = CapTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_utc_date(s)
    }
}

impl Serialize for UtcDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_utc_date(self))
    }
}

impl<'de> Deserialize<'de> for UtcDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_utc_date(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> UtcDate {
        parse_utc_date(s).unwrap()
    }

    #[test]
    fn parse_plain_date_is_utc_midnight() {
        let d = date("2024-03-15");
        assert_eq!((d.year(), d.month(), d.day()), (2024, 3, 15));
        assert_eq!(d.as_datetime().timestamp() % 86_400, 0);
    }

    #[test]
    fn parse_rfc3339_converts_offset_to_utc() {
        // 23:30 at -02:00 is already the next day in UTC
        let d = date("2024-03-15T23:30:00-02:00");
        assert_eq!(format_utc_date(&d), "2024-03-16");
    }

    #[test]
    fn parse_naive_timestamp_implies_utc() {
        let d = date("2024-03-15T23:30:00");
        assert_eq!(format_utc_date(&d), "2024-03-15");
        let d = date("2024-03-15T23:30:00.250");
        assert_eq!(format_utc_date(&d), "2024-03-15");
    }

    #[test]
    fn parse_rejects_malformed_input() {
        for bad in ["", "2024-13-01", "2024-02-30", "2024-1-01", "24-01-01", "yesterday"] {
            assert!(parse_utc_date(bad).is_err(), "expected {bad:?} to be rejected");
            assert!(!is_valid_iso_date(bad));
        }
    }

    #[test]
    fn format_zero_pads_fields() {
        let d = UtcDate::from_ymd(2024, 1, 5).unwrap();
        assert_eq!(format_utc_date(&d), "2024-01-05");
        assert_eq!(d.to_string(), "2024-01-05");
    }

    #[test]
    fn months_between_counts_whole_months() {
        assert_eq!(months_between(&date("2025-01-01"), &date("2024-01-01")), 12);
        assert_eq!(months_between(&date("2024-12-31"), &date("2024-01-01")), 11);
        assert_eq!(months_between(&date("2024-02-14"), &date("2024-01-15")), 0);
        assert_eq!(months_between(&date("2024-02-15"), &date("2024-01-15")), 1);
    }

    #[test]
    fn months_between_floors_at_zero() {
        assert_eq!(months_between(&date("2023-01-01"), &date("2024-01-01")), 0);
        assert_eq!(months_between(&date("2024-01-01"), &date("2024-01-01")), 0);
    }

    #[test]
    fn checked_add_months_clamps_to_month_end() {
        let d = date("2024-01-31").checked_add_months(1).unwrap();
        assert_eq!(d.to_string(), "2024-02-29");
    }

    #[test]
    fn whole_months_after_rolls_missing_day_forward() {
        let start = date("2024-01-31");
        assert_eq!(start.whole_months_after(1).unwrap().to_string(), "2024-03-01");
        assert_eq!(start.whole_months_after(2).unwrap().to_string(), "2024-03-31");
        assert_eq!(date("2023-11-30").whole_months_after(3).unwrap().to_string(), "2024-03-01");
        assert_eq!(date("2024-12-31").whole_months_after(0).unwrap().to_string(), "2024-12-31");
        assert_eq!(date("2024-10-31").whole_months_after(1).unwrap().to_string(), "2024-12-01");
        assert_eq!(date("2024-12-31").whole_months_after(11).unwrap().to_string(), "2025-12-01");
    }

    #[test]
    fn whole_months_after_is_first_day_reaching_the_count() {
        for start in ["2024-01-29", "2024-01-30", "2024-01-31", "2024-03-31", "2024-05-15"] {
            let start = date(start);
            for n in 0..=24 {
                let due = start.whole_months_after(n).unwrap();
                assert_eq!(months_between(&due, &start), n, "{start} + {n}");
                let day_before = UtcDate(due.as_datetime() - chrono::Duration::days(1));
                if n > 0 {
                    assert!(months_between(&day_before, &start) < n, "{start} + {n}");
                }
            }
        }
    }

    #[test]
    fn serde_uses_plain_date_string() {
        let d = date("2024-07-04");
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"2024-07-04\"");
        let back: UtcDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
        assert!(serde_json::from_str::<UtcDate>("\"07/04/2024\"").is_err());
    }
}
