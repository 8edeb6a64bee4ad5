//! Ride Analytics HTTP Server Binary
//!
//! This is the main entry point for the dashboard server. It loads the trip
//! dataset and metrics document once, checks that a default render succeeds,
//! and then serves the dashboard page and JSON API.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin ride-analytics-server
//!
//! TRIPS_PATH=/data/trips.csv METRICS_PATH=/data/metrics.json PORT=3000 \
//!   cargo run --bin ride-analytics-server
//! ```
//!
//! # Environment Variables
//!
//! - `TRIPS_PATH`: trip dataset CSV (default: data/uber_trips_50k.csv)
//! - `METRICS_PATH`: metrics JSON document (default: metrics.json)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log filter (default: info)

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use ride_analytics::data::{DashboardConfig, DashboardData};
use ride_analytics::http::{bind_listener, create_router, AppState};
use ride_analytics::services::{self, FilterState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging; `log` records from the library are forwarded too
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Ride Analytics HTTP Server");

    let config = DashboardConfig::load()?;
    info!(
        trips = %config.data.trips_path.display(),
        metrics = %config.data.metrics_path.display(),
        "Loading dashboard inputs"
    );

    let data = DashboardData::load(&config.data)?;

    // Fail before binding if the default dashboard cannot be rendered
    let defaults = FilterState::defaults_for(&data.trips);
    let warm = services::render(&data, &defaults)?;
    info!(
        trips = warm.kpis.total_trips,
        seasons = warm.filters.options.seasons.len(),
        zones = warm.filters.options.zones.len(),
        "Default dashboard rendered"
    );

    // Create application state
    let state = AppState::new(Arc::new(data));

    // Create router with all endpoints
    let app = create_router(state);

    let listener = bind_listener(&config.server).await?;
    let addr = listener.local_addr()?;

    info!("Server listening on http://{}", addr);
    info!("Dashboard: http://{}/", addr);

    // Start the server
    axum::serve(listener, app).await?;

    Ok(())
}
