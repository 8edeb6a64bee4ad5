use serde::{Deserialize, Serialize};

// =========================================================
// KPI panel types + route
// =========================================================

/// A single prominently displayed metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiCard {
    pub label: String,
    pub value: String,
    /// Change indicator shown under the value, e.g. `-12.0%`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<String>,
}

/// Simulated idle-time scenario sourced from the metrics document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdleTimeScenario {
    pub baseline_min: f64,
    pub after_min: f64,
    /// `(baseline - after) / baseline * 100`, rounded to one decimal
    pub reduction_pct: f64,
}

/// Whole-dataset KPIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiPanel {
    pub total_trips: usize,
    pub total_revenue: f64,
    pub average_fare: Option<f64>,
    pub idle_time: Option<IdleTimeScenario>,
    pub cards: Vec<KpiCard>,
}

/// Route path for the KPI panel
pub const GET_KPIS: &str = "/v1/kpis";
