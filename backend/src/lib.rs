//! # Ride Analytics Backend
//!
//! Read-only analytics dashboard over a synthetic ride-hailing trip dataset.
//!
//! The trip table (CSV) and a precomputed metrics document (JSON) are loaded once
//! at startup. Every filter change re-runs the filter and aggregation pipeline
//! over the cached table and produces a fresh [`api::DashboardView`], served as
//! JSON by an Axum REST API and drawn by a single static page.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: re-exports of the view types returned by the API
//! - [`data`]: configuration, input loading and the data error taxonomy
//! - [`models`]: trip records, the trip table and the metrics document
//! - [`services`]: KPI, highlight, filter and chart computations
//! - [`routes`]: per-panel view types and route paths
//! - [`http`]: Axum-based HTTP server and request handlers
//!

pub mod api;

pub mod data;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

#[cfg(test)]
mod test_support;
