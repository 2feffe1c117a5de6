//! The two linked dashboard view computations.
//!
//! [`aggregate`] produces the stacked-bar data (per-cause time-bucketed
//! counts); [`filter_points`] produces the map data (per-cause point
//! sets inside the selected time window). Causes appear in
//! lexicographic order in both outputs — that order drives stacking and
//! draw order downstream, so it must be stable.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use incident_dash_analytics_models::{CategoryPoints, CategorySeries, TimeSeriesPoint};
use incident_dash_categories::CategoryIndex;
use incident_dash_event_models::TimeWindow;
use incident_dash_store::RecordStore;
use incident_dash_timeline::BucketWidth;

use crate::AnalyticsError;

/// Color tag used if a cause somehow has no palette entry. Unreachable
/// for causes obtained from the index itself.
const FALLBACK_COLOR: &str = "black";

/// Computes the per-cause time-bucketed counts for the bar chart.
///
/// The selection label is expanded through the index; each selected
/// cause's incidents are bucketed independently by the requested width
/// and only non-empty buckets are emitted, in chronological order.
///
/// An unparseable `bucket_text` does not fail the request: the fixed
/// default width ([`BucketWidth::DEFAULT`], three months) is substituted
/// and the degrade is logged.
///
/// # Errors
///
/// Returns [`AnalyticsError::Selection`] if `selection` is not a known
/// selector label.
pub fn aggregate(
    store: &RecordStore,
    index: &CategoryIndex,
    selection: &str,
    bucket_text: &str,
) -> Result<Vec<CategorySeries>, AnalyticsError> {
    let causes = index.expand(selection)?;

    let width = match bucket_text.parse::<BucketWidth>() {
        Ok(width) => width,
        Err(e) => {
            log::debug!("{e}; substituting default width {}", BucketWidth::DEFAULT);
            BucketWidth::DEFAULT
        }
    };

    let series = causes
        .iter()
        .map(|cause| {
            let mut buckets: BTreeMap<DateTime<Utc>, u64> = BTreeMap::new();
            for incident in store.incidents().iter().filter(|i| &i.cause == cause) {
                *buckets.entry(width.floor(incident.dtg)).or_insert(0) += 1;
            }

            CategorySeries {
                cause: cause.clone(),
                color: index.color_of(cause).unwrap_or(FALLBACK_COLOR).to_string(),
                points: buckets
                    .into_iter()
                    .map(|(bucket_start, count)| TimeSeriesPoint {
                        bucket_start,
                        count,
                    })
                    .collect(),
            }
        })
        .collect();

    Ok(series)
}

/// Selects the point set for the map view: every incident whose
/// timestamp lies within `window` (inclusive on both ends) and whose
/// cause is covered by the selection, grouped per cause as parallel
/// longitude/latitude sequences.
///
/// No bucketing, no deduplication, no result limit. An inverted window
/// selects nothing.
///
/// # Errors
///
/// Returns [`AnalyticsError::Selection`] if `selection` is not a known
/// selector label.
pub fn filter_points(
    store: &RecordStore,
    index: &CategoryIndex,
    window: TimeWindow,
    selection: &str,
) -> Result<Vec<CategoryPoints>, AnalyticsError> {
    let causes = index.expand(selection)?;

    let points = causes
        .iter()
        .map(|cause| {
            let mut set = CategoryPoints {
                cause: cause.clone(),
                color: index.color_of(cause).unwrap_or(FALLBACK_COLOR).to_string(),
                lons: Vec::new(),
                lats: Vec::new(),
            };
            for incident in store
                .incidents()
                .iter()
                .filter(|i| &i.cause == cause && window.contains(i.dtg))
            {
                set.lons.push(incident.lon);
                set.lats.push(incident.lat);
            }
            set
        })
        .collect();

    Ok(points)
}
