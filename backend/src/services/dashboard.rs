use crate::data::{DashboardData, DataResult};
use crate::routes::charts::FilteredCharts;
use crate::routes::dashboard::{DashboardView, CAPTION, FOOTNOTE, TITLE};
use crate::routes::filters::FilterPanel;

use super::charts::build_chart_panel;
use super::filters::{apply_filters, filter_options, summarize, FilterState};
use super::highlights::build_highlights;
use super::kpis::build_kpi_panel;

/// Filtered summary and charts for `state`, without the static panels.
pub fn render_charts(data: &DashboardData, state: &FilterState) -> FilteredCharts {
    let view = apply_filters(&data.trips, state);
    log::debug!(
        "Filtered {} of {} trips (seasons={:?}, zones={:?}, hours={:?})",
        view.len(),
        data.trips.len(),
        state.seasons,
        state.zones,
        state.hours
    );

    FilteredCharts {
        summary: summarize(&view),
        charts: build_chart_panel(&view, &state.hours),
    }
}

/// Compute the complete dashboard for one filter state.
///
/// Pure and synchronous: the same inputs always give the same view. Fails only
/// when a required highlight metric is missing.
pub fn render(data: &DashboardData, state: &FilterState) -> DataResult<DashboardView> {
    let highlights = build_highlights(&data.metrics)?;
    let kpis = build_kpi_panel(&data.trips, &data.metrics);
    let FilteredCharts { summary, charts } = render_charts(data, state);

    Ok(DashboardView {
        title: TITLE.to_string(),
        caption: CAPTION.to_string(),
        kpis,
        highlights,
        filters: FilterPanel {
            options: filter_options(&data.trips),
            selected: state.clone(),
        },
        summary,
        charts,
        footnote: FOOTNOTE.to_string(),
    })
}

#[cfg(test)]
#[path = "dashboard_tests.rs"]
mod dashboard_tests;
