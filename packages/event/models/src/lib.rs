#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Core incident record types shared across the incident-dash system.
//!
//! An [`Incident`] is a single timestamped, geolocated, categorized event.
//! The record set is loaded once at startup and never mutated, so these
//! types carry no mutation API beyond construction.

pub mod parsing;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single spatio-temporal event record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    /// When the event occurred.
    pub dtg: DateTime<Utc>,
    /// Latitude of the event location.
    pub lat: f64,
    /// Longitude of the event location.
    pub lon: f64,
    /// Category label (e.g. the cause of the incident). Every incident
    /// belongs to exactly one category; the category set is fixed after
    /// load.
    pub cause: String,
}

/// The full `[earliest, latest]` timestamp range observed in a loaded
/// record set. Computed once at load and used as the default time window
/// before any chart interaction has occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSpan {
    /// Earliest timestamp in the record set.
    pub start: DateTime<Utc>,
    /// Latest timestamp in the record set.
    pub end: DateTime<Utc>,
}

impl DatasetSpan {
    /// Computes the span of a sequence of timestamps. Returns `None` for
    /// an empty sequence, where the span is undefined.
    #[must_use]
    pub fn of(timestamps: impl IntoIterator<Item = DateTime<Utc>>) -> Option<Self> {
        let mut iter = timestamps.into_iter();
        let first = iter.next()?;
        let (start, end) = iter.fold((first, first), |(lo, hi), ts| (lo.min(ts), hi.max(ts)));
        Some(Self { start, end })
    }
}

impl From<DatasetSpan> for TimeWindow {
    fn from(span: DatasetSpan) -> Self {
        Self {
            start: span.start,
            end: span.end,
        }
    }
}

/// The currently selected `[start, end]` date-time interval.
///
/// Transient: recomputed on every chart interaction. `start <= end` is
/// deliberately not enforced — an inverted window is allowed and simply
/// contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeWindow {
    /// Window start (inclusive).
    pub start: DateTime<Utc>,
    /// Window end (inclusive).
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Returns `true` if `ts` lies within the window, inclusive on both
    /// ends.
    #[must_use]
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        self.start <= ts && ts <= self.end
    }
}
