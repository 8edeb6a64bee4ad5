use serde::{Deserialize, Serialize};

use super::filters::FilteredSummary;

// =========================================================
// Chart panel types + route
// =========================================================

/// Trips starting in one hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourCount {
    pub hour: u8,
    pub trips: usize,
}

/// Trips picked up in one zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneCount {
    pub zone: String,
    pub trips: usize,
}

/// One season's counts, aligned with [`SeasonHourHeatmap::hours`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapRow {
    pub season: String,
    pub counts: Vec<usize>,
}

/// Dense season x hour count matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonHourHeatmap {
    /// Column labels
    pub hours: Vec<u8>,
    pub rows: Vec<HeatmapRow>,
}

/// Cumulative share of revenue held by the `trip_rank + 1` highest fares.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueSharePoint {
    pub trip_rank: usize,
    pub cum_revenue_share: f64,
}

/// The four aggregate views over the filtered trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPanel {
    /// Sparse: hours without trips are omitted
    pub demand_by_hour: Vec<HourCount>,
    pub top_zones: Vec<ZoneCount>,
    pub season_hour_heatmap: SeasonHourHeatmap,
    pub revenue_concentration: Vec<RevenueSharePoint>,
}

/// Charts response: filtered totals plus charts, without the static panels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilteredCharts {
    pub summary: FilteredSummary,
    pub charts: ChartPanel,
}

/// Route path for the filtered charts
pub const GET_CHARTS: &str = "/v1/charts";
