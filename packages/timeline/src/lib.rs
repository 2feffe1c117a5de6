#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Temporal logic for the incident dashboard.
//!
//! Three concerns live here: parsing and applying bucket-width
//! specifiers ([`bucket`]), resolving the currently selected time window
//! from the bar chart's last zoom/pan payload ([`window`]), and
//! rendering that window as display text ([`summary`]).

pub mod bucket;
pub mod summary;
pub mod window;

pub use bucket::{BucketWidth, ParseBucketWidthError, TimeUnit};
pub use summary::format_range;
pub use window::{ChartRelayout, WindowError, resolve_window};
