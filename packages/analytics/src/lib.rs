#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Aggregation engine and spatial filter for the dashboard views.
//!
//! Both view functions are pure: they compute a fresh result from the
//! immutable record store, the category index, and the current user
//! inputs, retaining no state between calls. The delivery layer decides
//! when to invoke them and how the results are drawn.

pub mod views;

use incident_dash_categories::SelectionError;
use thiserror::Error;

/// Errors that can occur while computing a dashboard view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    /// The category selector value was not present in the index.
    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),
}
