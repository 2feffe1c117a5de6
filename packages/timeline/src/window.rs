//! Time-window resolution from chart interaction payloads.
//!
//! The bar chart emits an opaque relayout payload on every zoom or pan
//! gesture. Only the x-axis range fields matter here; everything else in
//! the payload is ignored.

use incident_dash_event_models::{DatasetSpan, TimeWindow, parsing::parse_timestamp};
use serde::Deserialize;
use thiserror::Error;

/// The subset of a chart relayout payload consumed by the resolver.
///
/// A zoom or box-select carries both range fields; an autoscale or
/// double-click reset carries neither.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartRelayout {
    /// New lower x-axis bound, if the gesture set one.
    #[serde(rename = "xaxis.range[0]")]
    pub x_range_start: Option<String>,
    /// New upper x-axis bound, if the gesture set one.
    #[serde(rename = "xaxis.range[1]")]
    pub x_range_end: Option<String>,
}

/// Errors raised while resolving a time window.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    /// A relayout payload carried an axis bound that is not a
    /// date-time. Only the window-dependent views degrade; the bar
    /// chart is unaffected.
    #[error("unparseable axis bound {value:?}")]
    UnparseableBound {
        /// The rejected bound text.
        value: String,
    },
}

/// Resolves the currently selected time window.
///
/// With no interaction yet (`None`) or a payload without both range
/// bounds, the window is the full dataset span. A payload with both
/// bounds yields exactly those bounds: there is deliberately no
/// `start <= end` check and no check that the window overlaps the span.
///
/// Pure and idempotent: the same inputs always yield the same window.
///
/// # Errors
///
/// Returns [`WindowError::UnparseableBound`] if a bound is present but
/// not date-time-parseable.
pub fn resolve_window(
    span: DatasetSpan,
    relayout: Option<&ChartRelayout>,
) -> Result<TimeWindow, WindowError> {
    let Some(relayout) = relayout else {
        return Ok(span.into());
    };
    let (Some(lo), Some(hi)) = (&relayout.x_range_start, &relayout.x_range_end) else {
        return Ok(span.into());
    };

    let start = parse_timestamp(lo).ok_or_else(|| WindowError::UnparseableBound {
        value: lo.clone(),
    })?;
    let end = parse_timestamp(hi).ok_or_else(|| WindowError::UnparseableBound {
        value: hi.clone(),
    })?;

    Ok(TimeWindow { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDateTime, Utc};

    fn ts(s: &str) -> DateTime<Utc> {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
            .unwrap()
            .and_utc()
    }

    fn span() -> DatasetSpan {
        DatasetSpan {
            start: ts("2020-03-02 08:00:00"),
            end: ts("2020-04-05 09:15:00"),
        }
    }

    #[test]
    fn no_interaction_yields_dataset_span() {
        let window = resolve_window(span(), None).unwrap();
        assert_eq!(window.start, span().start);
        assert_eq!(window.end, span().end);
    }

    #[test]
    fn payload_without_range_yields_dataset_span() {
        let relayout = ChartRelayout::default();
        let window = resolve_window(span(), Some(&relayout)).unwrap();
        assert_eq!(window, span().into());
    }

    #[test]
    fn payload_with_only_one_bound_yields_dataset_span() {
        let relayout = ChartRelayout {
            x_range_start: Some("2020-03-15".to_string()),
            x_range_end: None,
        };
        let window = resolve_window(span(), Some(&relayout)).unwrap();
        assert_eq!(window, span().into());
    }

    #[test]
    fn payload_with_both_bounds_yields_them_verbatim() {
        let relayout = ChartRelayout {
            x_range_start: Some("2020-03-15 00:00:00".to_string()),
            x_range_end: Some("2020-04-30 00:00:00".to_string()),
        };
        let window = resolve_window(span(), Some(&relayout)).unwrap();
        assert_eq!(window.start, ts("2020-03-15 00:00:00"));
        assert_eq!(window.end, ts("2020-04-30 00:00:00"));
    }

    #[test]
    fn inverted_bounds_are_not_rejected() {
        let relayout = ChartRelayout {
            x_range_start: Some("2020-04-30".to_string()),
            x_range_end: Some("2020-03-15".to_string()),
        };
        let window = resolve_window(span(), Some(&relayout)).unwrap();
        assert!(window.start > window.end);
    }

    #[test]
    fn unparseable_bound_is_a_typed_error() {
        let relayout = ChartRelayout {
            x_range_start: Some("garbage".to_string()),
            x_range_end: Some("2020-03-15".to_string()),
        };
        let err = resolve_window(span(), Some(&relayout)).unwrap_err();
        assert_eq!(
            err,
            WindowError::UnparseableBound {
                value: "garbage".to_string()
            }
        );
    }

    #[test]
    fn resolution_is_idempotent() {
        let relayout = ChartRelayout {
            x_range_start: Some("2020-03-15 06:00:00".to_string()),
            x_range_end: Some("2020-03-20 18:00:00".to_string()),
        };
        let a = resolve_window(span(), Some(&relayout)).unwrap();
        let b = resolve_window(span(), Some(&relayout)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn deserializes_relayout_field_names() {
        let payload = r#"{"xaxis.range[0]":"2020-03-15","xaxis.range[1]":"2020-04-30"}"#;
        let relayout: ChartRelayout = serde_json::from_str(payload).unwrap();
        assert_eq!(relayout.x_range_start.as_deref(), Some("2020-03-15"));
        assert_eq!(relayout.x_range_end.as_deref(), Some("2020-04-30"));
    }
}
