//! HTTP handler functions for the dashboard API.
//!
//! Each handler backs one reactive view. The views are independent: a
//! failure in one (bad selector, unparseable axis bound) returns an
//! error for that endpoint only and never affects the others.

use actix_web::{HttpResponse, web};
use incident_dash_analytics::views;
use incident_dash_categories::ALL_CAUSES;
use incident_dash_server_models::{ApiHealth, ApiRangeText, BarQueryParams, MapQueryParams};
use incident_dash_timeline::{ChartRelayout, format_range, resolve_window};

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/categories`
///
/// Returns the selector option list: "All" plus every cause with its
/// display color.
pub async fn categories(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.index.options())
}

/// `GET /api/bars?cause=&bucket=`
///
/// Returns the per-cause time-bucketed counts for the stacked bar
/// chart.
pub async fn bars(state: web::Data<AppState>, params: web::Query<BarQueryParams>) -> HttpResponse {
    match views::aggregate(&state.store, &state.index, &params.cause, &params.bucket) {
        Ok(series) => HttpResponse::Ok().json(series),
        Err(e) => {
            log::error!("Failed to aggregate bar data: {e}");
            HttpResponse::BadRequest().json(serde_json::json!({
                "error": e.to_string()
            }))
        }
    }
}

/// `GET /api/points?cause=&xaxis.range[0]=&xaxis.range[1]=`
///
/// Returns the per-cause point sets for the map, filtered to the time
/// window selected on the bar chart.
pub async fn points(
    state: web::Data<AppState>,
    params: web::Query<MapQueryParams>,
) -> HttpResponse {
    let relayout = ChartRelayout::from(&*params);
    let window = match resolve_window(state.store.span(), Some(&relayout)) {
        Ok(window) => window,
        Err(e) => {
            log::error!("Failed to resolve time window: {e}");
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": e.to_string()
            }));
        }
    };

    let cause = params.cause.as_deref().unwrap_or(ALL_CAUSES);
    match views::filter_points(&state.store, &state.index, window, cause) {
        Ok(points) => HttpResponse::Ok().json(points),
        Err(e) => {
            log::error!("Failed to filter map points: {e}");
            HttpResponse::BadRequest().json(serde_json::json!({
                "error": e.to_string()
            }))
        }
    }
}

/// `GET /api/range?xaxis.range[0]=&xaxis.range[1]=`
///
/// Returns the formatted caption for the selected time range.
pub async fn range(state: web::Data<AppState>, params: web::Query<MapQueryParams>) -> HttpResponse {
    let relayout = ChartRelayout::from(&*params);
    match resolve_window(state.store.span(), Some(&relayout)) {
        Ok(window) => HttpResponse::Ok().json(ApiRangeText {
            text: format_range(&window),
        }),
        Err(e) => {
            log::error!("Failed to resolve time window: {e}");
            HttpResponse::BadRequest().json(serde_json::json!({
                "error": e.to_string()
            }))
        }
    }
}
