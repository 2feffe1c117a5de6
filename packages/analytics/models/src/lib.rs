#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Chart-ready result types for the dashboard views.
//!
//! These are the shapes handed to the view renderer: one stacked-bar
//! series per cause for the time chart, and one point set per cause for
//! the map. They are serialized to JSON for the frontend and carry no
//! styling beyond the per-cause color tag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One time bucket of an aggregated series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesPoint {
    /// Start of the bucket.
    pub bucket_start: DateTime<Utc>,
    /// Number of incidents in the bucket. Always at least 1: empty
    /// buckets are not emitted.
    pub count: u64,
}

/// The aggregated time series for a single cause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySeries {
    /// Cause label.
    pub cause: String,
    /// Display color for this cause's bars.
    pub color: String,
    /// Non-empty buckets in chronological order.
    pub points: Vec<TimeSeriesPoint>,
}

/// The map point set for a single cause: parallel coordinate sequences,
/// one entry per incident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPoints {
    /// Cause label.
    pub cause: String,
    /// Display color for this cause's markers.
    pub color: String,
    /// Longitudes, parallel to `lats`.
    pub lons: Vec<f64>,
    /// Latitudes, parallel to `lons`.
    pub lats: Vec<f64>,
}

impl CategoryPoints {
    /// Number of points in this set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lons.len()
    }

    /// Returns `true` if no incidents matched for this cause.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lons.is_empty()
    }
}
