//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for the computation.

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};

use super::dto::{
    DashboardQuery, DashboardView, FilterPanel, FilteredCharts, HealthResponse, HighlightsPanel,
    KpiPanel,
};
use super::error::AppError;
use super::state::AppState;
use crate::data::DashboardData;
use crate::services::{self, filters::FilterState};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Run a render on the blocking pool with its own handle to the data.
async fn run_render<T, F>(state: &AppState, render: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce(&DashboardData) -> Result<T, AppError> + Send + 'static,
{
    let data = state.data.clone();
    tokio::task::spawn_blocking(move || render(data.as_ref()))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?
}

// =============================================================================
// Page + Health Check
// =============================================================================

/// GET /
///
/// The interactive dashboard page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /health
///
/// Health check endpoint reporting the size of the loaded inputs.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        trips: state.data.trips.len(),
        metrics: state.data.metrics.len(),
    }))
}

// =============================================================================
// Dashboard Endpoints
// =============================================================================

/// GET /v1/dashboard
///
/// Full dashboard view for the filter query.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> HandlerResult<DashboardView> {
    let view = run_render(&state, move |data| {
        let filter = query.into_filter_state(&data.trips)?;
        Ok(services::render(data, &filter)?)
    })
    .await?;

    Ok(Json(view))
}

/// GET /v1/kpis
///
/// Whole-dataset KPI panel. Filters do not apply.
pub async fn get_kpis(State(state): State<AppState>) -> HandlerResult<KpiPanel> {
    let panel = run_render(&state, |data| {
        Ok(services::build_kpi_panel(&data.trips, &data.metrics))
    })
    .await?;

    Ok(Json(panel))
}

/// GET /v1/highlights
///
/// The three precomputed ratio highlights.
pub async fn get_highlights(State(state): State<AppState>) -> HandlerResult<HighlightsPanel> {
    let panel = services::build_highlights(&state.data.metrics)?;
    Ok(Json(panel))
}

/// GET /v1/filters
///
/// Selectable filter values and the default selection.
pub async fn get_filters(State(state): State<AppState>) -> HandlerResult<FilterPanel> {
    let trips = &state.data.trips;
    Ok(Json(FilterPanel {
        options: services::filter_options(trips),
        selected: FilterState::defaults_for(trips),
    }))
}

/// GET /v1/charts
///
/// Filtered summary and the four charts for the filter query.
pub async fn get_charts(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> HandlerResult<FilteredCharts> {
    let charts = run_render(&state, move |data| {
        let filter = query.into_filter_state(&data.trips)?;
        Ok(services::render_charts(data, &filter))
    })
    .await?;

    Ok(Json(charts))
}
