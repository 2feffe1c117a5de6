//! Display text for the resolved time window.

use incident_dash_event_models::TimeWindow;

const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders the selected time window as the dashboard's range caption,
/// e.g. `"Selected range: 2020-03-01 00:00:00 - 2020-04-30 00:00:00"`.
#[must_use]
pub fn format_range(window: &TimeWindow) -> String {
    format!(
        "Selected range: {} - {}",
        window.start.format(FORMAT),
        window.end.format(FORMAT)
    )
}
