pub mod charts;
pub mod dashboard;
pub mod filters;
pub mod highlights;
pub mod kpis;
