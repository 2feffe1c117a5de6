#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the dashboard server.
//!
//! These types are serialized to JSON for the frontend. They are
//! separate from the domain types to allow independent evolution of the
//! API contract.

use incident_dash_timeline::ChartRelayout;
use serde::{Deserialize, Serialize};

/// Query parameters for the bar chart endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarQueryParams {
    /// Category selector value (`"All"` or a concrete cause).
    pub cause: String,
    /// Bucket-width text, e.g. `"1M"`. Free-form; unparseable input
    /// falls back to the default width server-side.
    pub bucket: String,
}

/// Query parameters for the map and range-text endpoints: the category
/// selector plus the x-axis range fields of the chart's last relayout
/// payload, passed through under their original names by the frontend.
#[derive(Debug, Clone, Deserialize)]
pub struct MapQueryParams {
    /// Category selector value. Absent for the range-text endpoint,
    /// which does not filter by cause.
    pub cause: Option<String>,
    /// New lower x-axis bound from the last chart gesture, if any.
    #[serde(rename = "xaxis.range[0]")]
    pub x_range_start: Option<String>,
    /// New upper x-axis bound from the last chart gesture, if any.
    #[serde(rename = "xaxis.range[1]")]
    pub x_range_end: Option<String>,
}

impl From<&MapQueryParams> for ChartRelayout {
    fn from(params: &MapQueryParams) -> Self {
        Self {
            x_range_start: params.x_range_start.clone(),
            x_range_end: params.x_range_end.clone(),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// Formatted time-range caption response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRangeText {
    /// Human-readable selected range.
    pub text: String,
}
