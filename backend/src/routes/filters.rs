use serde::{Deserialize, Serialize};

use crate::services::filters::FilterState;

// =========================================================
// Filter panel types + route
// =========================================================

/// Selectable values for the three filter controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Sorted distinct seasons in the base dataset
    pub seasons: Vec<String>,
    /// Sorted distinct pickup zones in the base dataset
    pub zones: Vec<String>,
    pub hour_min: u8,
    pub hour_max: u8,
}

/// Options together with the filter state that was applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterPanel {
    pub options: FilterOptions,
    pub selected: FilterState,
}

/// Totals over the filtered view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilteredSummary {
    pub trip_count: usize,
    pub revenue: f64,
    /// `None` when the filtered view is empty
    pub average_fare: Option<f64>,
    pub trip_count_display: String,
    pub revenue_display: String,
    pub average_fare_display: String,
    /// One-line summary, e.g. `Filtered trips: 1,204; Revenue: $28,113; Avg Fare: $23.35`
    pub text: String,
}

/// Route path for the filter options
pub const GET_FILTERS: &str = "/v1/filters";
