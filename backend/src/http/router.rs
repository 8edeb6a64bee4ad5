//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::data::ServerSettings;
use crate::routes::{charts, dashboard, filters, highlights, kpis};

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Read-only GET API, so any origin may call it
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route(dashboard::GET_DASHBOARD, get(handlers::get_dashboard))
        .route(kpis::GET_KPIS, get(handlers::get_kpis))
        .route(highlights::GET_HIGHLIGHTS, get(handlers::get_highlights))
        .route(filters::GET_FILTERS, get(handlers::get_filters))
        .route(charts::GET_CHARTS, get(handlers::get_charts))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Bind the listener for `server`. Host names such as `localhost` are resolved.
pub async fn bind_listener(server: &ServerSettings) -> std::io::Result<TcpListener> {
    TcpListener::bind((server.host.as_str(), server.port)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DashboardData;

    #[test]
    fn test_router_creation() {
        let state = AppState::from(DashboardData::default());
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
