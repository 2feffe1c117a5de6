//! Shared timestamp parsing for incident data.
//!
//! Both the CSV loader and the chart-interaction resolver receive
//! timestamps as strings in a handful of common shapes; the accepted
//! formats are deliberately identical in both places.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parses a timestamp string in any of the accepted formats: ISO 8601
/// with a `T` or space separator (with optional fractional seconds), or
/// a bare date, which is taken as midnight.
#[must_use]
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_t_separator() {
        let dt = parse_timestamp("2020-03-15T14:30:00").unwrap();
        assert_eq!(dt.to_string(), "2020-03-15 14:30:00 UTC");
    }

    #[test]
    fn parses_space_separator_with_fractional() {
        let dt = parse_timestamp("2020-03-15 14:30:00.250").unwrap();
        assert_eq!(dt.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn parses_bare_date_as_midnight() {
        let dt = parse_timestamp("2020-03-15").unwrap();
        assert_eq!(dt.to_string(), "2020-03-15 00:00:00 UTC");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert!(parse_timestamp("  2020-03-15 ").is_some());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("not-a-date").is_none());
        assert!(parse_timestamp("").is_none());
    }
}
