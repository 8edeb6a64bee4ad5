//! Input loading for the dashboard.
//!
//! The trip dataset and the metrics document are read once at startup into a
//! [`DashboardData`], which is then shared read-only (behind an `Arc`) by every
//! render. Nothing here is a global: callers own the handle and pass it in.
//!
//! ```text
//! dashboard.toml / env ──► DashboardConfig
//!                               │
//!            ┌──────────────────┴──────────────────┐
//!            ▼                                     ▼
//!   load_dataset(trips.csv)              load_metrics(metrics.json)
//!            │                                     │
//!            └──────────────► DashboardData ◄──────┘
//! ```

pub mod config;
pub mod error;
pub mod loaders;

pub use config::{DashboardConfig, DataSettings, ServerSettings};
pub use error::{DataError, DataResult};
pub use loaders::{load_dataset, load_metrics};

use crate::models::{MetricsDocument, TripTable};

/// Process-lifetime, immutable dashboard inputs.
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    pub trips: TripTable,
    pub metrics: MetricsDocument,
}

impl DashboardData {
    pub fn new(trips: TripTable, metrics: MetricsDocument) -> Self {
        Self { trips, metrics }
    }

    /// Read both inputs from the configured paths.
    pub fn load(settings: &DataSettings) -> DataResult<Self> {
        let trips = load_dataset(&settings.trips_path)?;
        let metrics = load_metrics(&settings.metrics_path)?;
        Ok(Self::new(trips, metrics))
    }
}
