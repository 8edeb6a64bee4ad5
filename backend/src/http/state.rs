//! Application state for the HTTP server.

use std::sync::Arc;

use crate::data::DashboardData;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Trip table and metrics, loaded once and never mutated
    pub data: Arc<DashboardData>,
}

impl AppState {
    /// Create a new application state around the loaded inputs.
    pub fn new(data: Arc<DashboardData>) -> Self {
        Self { data }
    }
}

impl From<DashboardData> for AppState {
    fn from(data: DashboardData) -> Self {
        Self::new(Arc::new(data))
    }
}
