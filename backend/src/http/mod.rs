//! HTTP server module for the dashboard backend.
//!
//! This module provides an axum-based HTTP server that exposes the dashboard
//! as a REST API plus one static page. It reuses the service layer and the
//! view types from the core library.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Query parsing into a FilterState                       │
//! │  - JSON serialization                                     │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │ spawn_blocking
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - render(data, filter_state) -> DashboardView            │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │ &DashboardData
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Loaded inputs (data/)                                    │
//! │  - Arc<DashboardData>, read once at startup               │
//! └──────────────────────────────────────────────────────────┘
//! ```

#[cfg(feature = "http-server")]
pub mod handlers;

#[cfg(feature = "http-server")]
pub mod router;

#[cfg(feature = "http-server")]
pub mod state;

#[cfg(feature = "http-server")]
pub mod error;

#[cfg(feature = "http-server")]
pub mod dto;

#[cfg(feature = "http-server")]
pub use router::{bind_listener, create_router};

#[cfg(feature = "http-server")]
pub use state::AppState;
