//! Public API surface for the dashboard backend.
//!
//! This file consolidates the view types served by the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::charts::ChartPanel;
pub use crate::routes::charts::FilteredCharts;
pub use crate::routes::charts::HeatmapRow;
pub use crate::routes::charts::HourCount;
pub use crate::routes::charts::RevenueSharePoint;
pub use crate::routes::charts::SeasonHourHeatmap;
pub use crate::routes::charts::ZoneCount;
pub use crate::routes::dashboard::DashboardView;
pub use crate::routes::filters::FilterOptions;
pub use crate::routes::filters::FilterPanel;
pub use crate::routes::filters::FilteredSummary;
pub use crate::routes::highlights::HighlightLine;
pub use crate::routes::highlights::HighlightsPanel;
pub use crate::routes::kpis::IdleTimeScenario;
pub use crate::routes::kpis::KpiCard;
pub use crate::routes::kpis::KpiPanel;

pub use crate::models::MetricKey;
pub use crate::services::filters::{FilterState, HourRange};
