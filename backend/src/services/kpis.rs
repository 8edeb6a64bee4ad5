use crate::models::{MetricKey, MetricsDocument, TripRecord, TripTable};
use crate::routes::kpis::{IdleTimeScenario, KpiCard, KpiPanel};

use super::format::{
    format_average_fare, format_count, format_currency, format_delta_pct, format_minutes, round1,
};

pub const TOTAL_TRIPS_LABEL: &str = "Total Trips";
pub const TOTAL_REVENUE_LABEL: &str = "Total Revenue";
pub const AVG_FARE_LABEL: &str = "Avg Fare";
pub const IDLE_TIME_LABEL: &str = "Avg Idle Time (simulated)";

/// Count, revenue and mean fare over a set of trips.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripTotals {
    pub trip_count: usize,
    pub revenue: f64,
    /// `None` for an empty set; never NaN
    pub average_fare: Option<f64>,
}

/// Compute totals in one pass over the trips.
pub fn compute_totals<'a, I>(trips: I) -> TripTotals
where
    I: IntoIterator<Item = &'a TripRecord>,
{
    let (trip_count, revenue) = trips
        .into_iter()
        .fold((0usize, 0.0f64), |(n, sum), t| (n + 1, sum + t.fare_amount));

    let average_fare = if trip_count > 0 {
        Some(revenue / trip_count as f64)
    } else {
        None
    };

    TripTotals {
        trip_count,
        revenue,
        average_fare,
    }
}

/// Idle-time scenario, present only when both minutes are known and the
/// baseline is non-zero.
pub fn idle_time_scenario(metrics: &MetricsDocument) -> Option<IdleTimeScenario> {
    let baseline_min = metrics.get(MetricKey::AvgIdleBaselineMin)?;
    let after_min = metrics.get(MetricKey::AvgIdleAfterMin)?;
    if baseline_min == 0.0 || !baseline_min.is_finite() {
        return None;
    }

    Some(IdleTimeScenario {
        baseline_min,
        after_min,
        reduction_pct: round1((baseline_min - after_min) / baseline_min * 100.0),
    })
}

/// Build the whole-dataset KPI panel.
pub fn build_kpi_panel(trips: &TripTable, metrics: &MetricsDocument) -> KpiPanel {
    let totals = compute_totals(trips);
    let idle_time = idle_time_scenario(metrics);

    let mut cards = vec![
        KpiCard {
            label: TOTAL_TRIPS_LABEL.to_string(),
            value: format_count(totals.trip_count),
            delta: None,
        },
        KpiCard {
            label: TOTAL_REVENUE_LABEL.to_string(),
            value: format_currency(totals.revenue),
            delta: None,
        },
        KpiCard {
            label: AVG_FARE_LABEL.to_string(),
            value: format_average_fare(totals.average_fare),
            delta: None,
        },
    ];

    if let Some(idle) = &idle_time {
        // A reduction is displayed as a negative change
        cards.push(KpiCard {
            label: IDLE_TIME_LABEL.to_string(),
            value: format_minutes(
                idle.after_min,
                metrics.is_integral(MetricKey::AvgIdleAfterMin),
            ),
            delta: Some(format_delta_pct(-idle.reduction_pct)),
        });
    }

    KpiPanel {
        total_trips: totals.trip_count,
        total_revenue: totals.revenue,
        average_fare: totals.average_fare,
        idle_time,
        cards,
    }
}
