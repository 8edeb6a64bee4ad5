use serde::{Deserialize, Serialize};

use crate::models::MetricKey;

// =========================================================
// Highlights panel types + route
// =========================================================

/// One precomputed ratio read verbatim from the metrics document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightLine {
    pub key: MetricKey,
    pub label: String,
    /// Raw ratio in `[0, 1]`
    pub share: f64,
    /// `share * 100` with one decimal and a percent sign
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightsPanel {
    pub lines: Vec<HighlightLine>,
}

/// Route path for the highlights panel
pub const GET_HIGHLIGHTS: &str = "/v1/highlights";
