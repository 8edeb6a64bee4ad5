//! Data Transfer Objects for the HTTP API.
//!
//! Response bodies are the view types re-exported from [`crate::api`]; this
//! module only adds the query and health shapes that exist solely at the HTTP
//! boundary.

use serde::{Deserialize, Serialize};

use crate::models::TripTable;
use crate::services::filters::{FilterError, FilterState, HourRange, MAX_HOUR, MIN_HOUR};

pub use crate::api::{DashboardView, FilterPanel, FilteredCharts, HighlightsPanel, KpiPanel};

/// Filter query parameters for the dashboard and charts endpoints.
///
/// List parameters are comma-separated. An absent `seasons` selects every
/// season in the dataset, while `seasons=` (empty) disables the season filter.
/// An absent or empty `zones` disables the zone filter.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DashboardQuery {
    #[serde(default)]
    pub seasons: Option<String>,
    #[serde(default)]
    pub zones: Option<String>,
    #[serde(default)]
    pub hour_min: Option<u8>,
    #[serde(default)]
    pub hour_max: Option<u8>,
}

/// Split a comma-separated parameter, dropping blank items.
fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

impl DashboardQuery {
    /// Resolve the query against the base dataset.
    pub fn into_filter_state(self, table: &TripTable) -> Result<FilterState, FilterError> {
        let hours = HourRange::new(
            self.hour_min.unwrap_or(MIN_HOUR),
            self.hour_max.unwrap_or(MAX_HOUR),
        )?;

        let mut state = FilterState::defaults_for(table).with_hours(hours);
        if let Some(seasons) = &self.seasons {
            state = state.with_seasons(split_list(seasons));
        }
        if let Some(zones) = &self.zones {
            state = state.with_zones(split_list(zones));
        }
        Ok(state)
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Rows in the loaded trip table
    pub trips: usize,
    /// Numeric entries in the metrics document
    pub metrics: usize,
}
