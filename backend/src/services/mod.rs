//! Service layer: the computations behind each dashboard panel.
//!
//! Services are plain synchronous functions over borrowed data. They sit
//! between the loaded inputs in [`crate::data`] and the view types in
//! [`crate::routes`], and never touch the HTTP layer.

pub mod charts;
pub mod dashboard;
pub mod filters;
pub mod format;
pub mod highlights;
pub mod kpis;

pub use charts::build_chart_panel;
pub use dashboard::{render, render_charts};
pub use filters::{apply_filters, filter_options, summarize, FilterError, FilterState, HourRange};
pub use highlights::build_highlights;
pub use kpis::build_kpi_panel;
