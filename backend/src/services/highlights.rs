use crate::data::DataResult;
use crate::models::{MetricKey, MetricsDocument};
use crate::routes::highlights::{HighlightLine, HighlightsPanel};

use super::format::format_share;

/// Highlight keys in display order, with their labels.
pub const HIGHLIGHTS: [(MetricKey, &str); 3] = [
    (
        MetricKey::Top15CustomersShareRides,
        "Top 15% customers share of rides",
    ),
    (MetricKey::Top5ZonesShareRides, "Top 5 zones share of rides"),
    (
        MetricKey::TripsShareMaking45pctRevenue,
        "Trips share to reach 45% revenue",
    ),
];

/// Build the highlights panel. Every key is required; the first missing one
/// fails the panel.
pub fn build_highlights(metrics: &MetricsDocument) -> DataResult<HighlightsPanel> {
    let lines = HIGHLIGHTS
        .iter()
        .map(|(key, label)| {
            let share = metrics.require(*key)?;
            Ok(HighlightLine {
                key: *key,
                label: label.to_string(),
                share,
                display: format_share(share),
            })
        })
        .collect::<DataResult<Vec<_>>>()?;

    Ok(HighlightsPanel { lines })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataError;

    #[test]
    fn test_build_highlights() {
        let metrics = MetricsDocument::from_json_str(
            r#"{"top15_customers_share_rides": 0.42, "top5_zones_share_rides": 0.3127,
                "trips_share_making_45pct_revenue": 0.2}"#,
        )
        .unwrap();

        let panel = build_highlights(&metrics).unwrap();
        let displays: Vec<&str> = panel.lines.iter().map(|l| l.display.as_str()).collect();
        assert_eq!(displays, vec!["42.0%", "31.3%", "20.0%"]);
        assert_eq!(panel.lines[0].label, "Top 15% customers share of rides");
        assert_eq!(panel.lines[2].key, MetricKey::TripsShareMaking45pctRevenue);
    }

    #[test]
    fn test_build_highlights_missing_key_fails() {
        let metrics = MetricsDocument::from_json_str(
            r#"{"top15_customers_share_rides": 0.42, "trips_share_making_45pct_revenue": 0.2}"#,
        )
        .unwrap();

        let err = build_highlights(&metrics).unwrap_err();
        assert!(matches!(
            err,
            DataError::MissingMetric(MetricKey::Top5ZonesShareRides)
        ));
    }
}
