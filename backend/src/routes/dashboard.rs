use serde::{Deserialize, Serialize};

use super::charts::ChartPanel;
use super::filters::{FilterPanel, FilteredSummary};
use super::highlights::HighlightsPanel;
use super::kpis::KpiPanel;

// =========================================================
// Full dashboard view model + route
// =========================================================

pub const TITLE: &str = "Ride Mini Analytics: Synthetic (50k+)";
pub const CAPTION: &str = "Synthetic dataset with NYC-style zones for portfolio demonstration";
pub const FOOTNOTE: &str = "Idle time reduction (-12%) and peak coverage (+25%) are simulated \
scenario KPIs based on modeled reallocation strategies.";

/// Everything the page needs for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub title: String,
    pub caption: String,
    pub kpis: KpiPanel,
    pub highlights: HighlightsPanel,
    pub filters: FilterPanel,
    pub summary: FilteredSummary,
    pub charts: ChartPanel,
    pub footnote: String,
}

/// Route path for the full dashboard
pub const GET_DASHBOARD: &str = "/v1/dashboard";
