//! Bucket-width specifiers and time-bucket flooring.
//!
//! A bucket width is an integer magnitude plus a calendar unit code, in
//! the text form the dashboard's aggregation field accepts: `"3H"`,
//! `"1D"`, `"2W"`, `"3M"`, `"1Y"`. Parsing returns a typed error rather
//! than swallowing bad input; the default-width policy on parse failure
//! belongs to the aggregation engine, which applies it explicitly.

use std::str::FromStr;

use chrono::{DateTime, Datelike as _, NaiveDate, Utc};
use strum_macros::{AsRefStr, Display, EnumString};
use thiserror::Error;

/// Calendar unit code of a bucket width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
pub enum TimeUnit {
    /// Clock hours.
    #[strum(serialize = "H")]
    Hours,
    /// Calendar days.
    #[strum(serialize = "D")]
    Days,
    /// Seven-day weeks.
    #[strum(serialize = "W")]
    Weeks,
    /// Calendar months.
    #[strum(serialize = "M")]
    Months,
    /// Calendar years.
    #[strum(serialize = "Y")]
    Years,
}

/// Error returned when a bucket-width string cannot be interpreted.
///
/// This is the explicit "unparseable" signal: callers decide whether to
/// fail or to substitute a default width.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unparseable bucket width {input:?}: expected e.g. 3H, 1D, 2W, 3M")]
pub struct ParseBucketWidthError {
    /// The rejected input text.
    pub input: String,
}

/// A time-bucket width: magnitude plus unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BucketWidth {
    /// Number of units per bucket. Always at least 1.
    pub magnitude: u32,
    /// Calendar unit.
    pub unit: TimeUnit,
}

impl BucketWidth {
    /// The fallback width applied when user input cannot be parsed:
    /// three months.
    pub const DEFAULT: Self = Self {
        magnitude: 3,
        unit: TimeUnit::Months,
    };

    /// Floors a timestamp to the start of the bucket containing it.
    ///
    /// Hour, day, and week widths are aligned to whole multiples of the
    /// width since the Unix epoch. Month and year widths are aligned to
    /// calendar boundaries, with the month index grouped by the
    /// magnitude (so `3M` buckets start on Jan/Apr/Jul/Oct 1).
    #[must_use]
    pub fn floor(self, ts: DateTime<Utc>) -> DateTime<Utc> {
        let magnitude = i64::from(self.magnitude);
        match self.unit {
            TimeUnit::Hours => floor_seconds(ts, magnitude * 3_600),
            TimeUnit::Days => floor_seconds(ts, magnitude * 86_400),
            TimeUnit::Weeks => floor_seconds(ts, magnitude * 7 * 86_400),
            TimeUnit::Months => floor_months(ts, magnitude),
            TimeUnit::Years => floor_months(ts, magnitude * 12),
        }
    }
}

impl std::fmt::Display for BucketWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.magnitude, self.unit)
    }
}

impl FromStr for BucketWidth {
    type Err = ParseBucketWidthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseBucketWidthError {
            input: s.to_string(),
        };

        let trimmed = s.trim();
        let unit_at = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(err)?;
        let (digits, unit) = trimmed.split_at(unit_at);

        // A bare unit code means magnitude 1 ("M" == "1M").
        let magnitude: u32 = if digits.is_empty() {
            1
        } else {
            digits.parse().map_err(|_| err())?
        };
        if magnitude == 0 {
            return Err(err());
        }

        let unit = TimeUnit::from_str(&unit.to_ascii_uppercase()).map_err(|_| err())?;

        Ok(Self { magnitude, unit })
    }
}

fn floor_seconds(ts: DateTime<Utc>, width_secs: i64) -> DateTime<Utc> {
    let floored = ts.timestamp().div_euclid(width_secs) * width_secs;
    DateTime::from_timestamp(floored, 0).unwrap_or(ts)
}

// Widths stay in i64; a u32 magnitude times 12 overflows i32.
fn floor_months(ts: DateTime<Utc>, width_months: i64) -> DateTime<Utc> {
    let month_index = i64::from(ts.year()) * 12 + i64::from(ts.month0());
    let start = month_index - month_index.rem_euclid(width_months);
    let year = i32::try_from(start.div_euclid(12)).unwrap_or_default();
    let month = u32::try_from(start.rem_euclid(12)).unwrap_or_default() + 1;
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map_or(ts, |d| d.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn ts(s: &str) -> DateTime<Utc> {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
            .unwrap()
            .and_utc()
    }

    #[test]
    fn parses_magnitude_and_unit() {
        assert_eq!(
            "3H".parse::<BucketWidth>().unwrap(),
            BucketWidth {
                magnitude: 3,
                unit: TimeUnit::Hours
            }
        );
        assert_eq!(
            "2W".parse::<BucketWidth>().unwrap(),
            BucketWidth {
                magnitude: 2,
                unit: TimeUnit::Weeks
            }
        );
    }

    #[test]
    fn bare_unit_means_magnitude_one() {
        assert_eq!(
            "M".parse::<BucketWidth>().unwrap(),
            BucketWidth {
                magnitude: 1,
                unit: TimeUnit::Months
            }
        );
    }

    #[test]
    fn accepts_lowercase_unit() {
        assert_eq!(
            "1d".parse::<BucketWidth>().unwrap().unit,
            TimeUnit::Days
        );
    }

    #[test]
    fn rejects_bad_input() {
        for input in ["", "3", "X", "0D", "1.5M", "M3", "three months"] {
            assert!(input.parse::<BucketWidth>().is_err(), "{input:?}");
        }
    }

    #[test]
    fn parse_error_carries_input() {
        let err = "bogus".parse::<BucketWidth>().unwrap_err();
        assert_eq!(err.input, "bogus");
    }

    #[test]
    fn default_is_three_months() {
        assert_eq!(BucketWidth::DEFAULT, "3M".parse().unwrap());
    }

    #[test]
    fn display_round_trips() {
        let width: BucketWidth = "2W".parse().unwrap();
        assert_eq!(width.to_string(), "2W");
    }

    #[test]
    fn floors_months_to_first_of_month() {
        let width: BucketWidth = "1M".parse().unwrap();
        assert_eq!(
            width.floor(ts("2020-03-17 13:45:10")),
            ts("2020-03-01 00:00:00")
        );
    }

    #[test]
    fn floors_quarters_to_quarter_boundaries() {
        let width: BucketWidth = "3M".parse().unwrap();
        assert_eq!(
            width.floor(ts("2020-05-20 00:00:00")),
            ts("2020-04-01 00:00:00")
        );
        assert_eq!(
            width.floor(ts("2020-12-31 23:59:59")),
            ts("2020-10-01 00:00:00")
        );
    }

    #[test]
    fn floors_years_to_january_first() {
        let width: BucketWidth = "1Y".parse().unwrap();
        assert_eq!(
            width.floor(ts("2020-11-05 08:00:00")),
            ts("2020-01-01 00:00:00")
        );
    }

    #[test]
    fn floors_days_and_hours_to_epoch_multiples() {
        let day: BucketWidth = "1D".parse().unwrap();
        assert_eq!(
            day.floor(ts("2020-03-15 14:30:00")),
            ts("2020-03-15 00:00:00")
        );

        let three_hours: BucketWidth = "3H".parse().unwrap();
        assert_eq!(
            three_hours.floor(ts("2020-03-15 14:30:00")),
            ts("2020-03-15 12:00:00")
        );
    }

    #[test]
    fn floors_weeks_consistently() {
        let week: BucketWidth = "1W".parse().unwrap();
        let a = week.floor(ts("2020-03-16 00:00:00"));
        let b = week.floor(ts("2020-03-18 23:59:59"));
        // The epoch fell on a Thursday, so week buckets start Thursdays.
        assert_eq!(a, b);
        assert_eq!(a, ts("2020-03-12 00:00:00"));
    }

    #[test]
    fn oversized_magnitudes_floor_without_overflow() {
        // u32::MAX months and 2^30 years exceed i32 once scaled to
        // months; both must still floor cleanly.
        let months: BucketWidth = "4294967295M".parse().unwrap();
        let years: BucketWidth = "1073741824Y".parse().unwrap();
        let input = ts("2020-11-05 08:00:00");
        assert!(months.floor(input) <= input);
        assert!(years.floor(input) <= input);
    }

    #[test]
    fn floor_is_idempotent() {
        for spec in ["3H", "1D", "2W", "3M", "1Y"] {
            let width: BucketWidth = spec.parse().unwrap();
            let floored = width.floor(ts("2021-07-19 04:05:06"));
            assert_eq!(width.floor(floored), floored, "{spec}");
        }
    }
}
