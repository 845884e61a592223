//! Internal helpers for input normalization and time conversion.
//!
//! These utilities are **not** part of the public API.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

/// Trim a text field and drop it when nothing is left.
pub(crate) fn normalize_required_text(value: Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// Convert a wall-clock time in `tz` to UTC.
///
/// Ambiguous times resolve to the earliest instant; times inside a DST gap are
/// moved forward by one hour.
pub(crate) fn local_to_utc(tz: Tz, local: NaiveDateTime) -> Option<DateTime<Utc>> {
    tz.from_local_datetime(&local)
        .earliest()
        .or_else(|| {
            tz.from_local_datetime(&(local + TimeDelta::hours(1)))
                .earliest()
        })
        .map(|dt| dt.with_timezone(&Utc))
}

/// Start of `date` in `tz`, as UTC.
pub(crate) fn local_midnight(tz: Tz, date: NaiveDate) -> Option<DateTime<Utc>> {
    local_to_utc(tz, date.and_time(NaiveTime::MIN))
}

/// Parse a client supplied timestamp.
///
/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS` (local to `tz`) or a plain
/// `YYYY-MM-DD` date (local midnight).
pub(crate) fn parse_timestamp(raw: &str, tz: Tz) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return local_to_utc(tz, naive);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| local_midnight(tz, date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn normalize_trims_and_drops_blank() {
        assert_eq!(
            normalize_required_text(Some("  Pizza ".to_string())),
            Some("Pizza".to_string())
        );
        assert_eq!(normalize_required_text(Some("   ".to_string())), None);
        assert_eq!(normalize_required_text(None), None);
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        assert_eq!(
            parse_timestamp("2025-02-15T10:00:00+02:00", Tz::UTC),
            Some(utc(2025, 2, 15, 8))
        );
    }

    #[test]
    fn plain_dates_are_local_midnight() {
        assert_eq!(
            parse_timestamp("2025-02-15", Tz::UTC),
            Some(utc(2025, 2, 15, 0))
        );
        assert_eq!(
            parse_timestamp("2025-02-15", Tz::Europe__Rome),
            Some(utc(2025, 2, 14, 23))
        );
    }

    #[test]
    fn naive_datetimes_are_local() {
        assert_eq!(
            parse_timestamp("2025-07-01T12:00:00", Tz::Europe__Rome),
            Some(utc(2025, 7, 1, 10))
        );
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(parse_timestamp("yesterday", Tz::UTC), None);
        assert_eq!(parse_timestamp("2025-13-01", Tz::UTC), None);
    }

    #[test]
    fn dst_gap_moves_forward() {
        // Clocks in Rome jump from 02:00 to 03:00 on 2025-03-30.
        let local = NaiveDate::from_ymd_opt(2025, 3, 30)
            .unwrap()
            .and_hms_opt(2, 30, 0)
            .unwrap();
        assert_eq!(
            local_to_utc(Tz::Europe__Rome, local),
            Some(Utc.with_ymd_and_hms(2025, 3, 30, 1, 30, 0).unwrap())
        );
    }
}
