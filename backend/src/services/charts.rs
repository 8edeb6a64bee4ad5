//! Aggregate views over the filtered trips.
//!
//! Each chart is recomputed from scratch on every render. Density policy:
//! demand-by-hour is sparse (hours without trips are omitted), the
//! season x hour heatmap is dense over the active hour range (absent pairs are
//! `0` cells).

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::routes::charts::{
    ChartPanel, HeatmapRow, HourCount, RevenueSharePoint, SeasonHourHeatmap, ZoneCount,
};

use super::filters::{FilteredView, HourRange};

/// Number of zones shown in the top-zones chart.
pub const TOP_ZONES_LIMIT: usize = 10;

/// Trips per pickup hour, ascending by hour, zero hours omitted.
pub fn demand_by_hour(view: &FilteredView<'_>) -> Vec<HourCount> {
    let mut counts: BTreeMap<u8, usize> = BTreeMap::new();
    for trip in view.iter() {
        *counts.entry(trip.pickup_hour()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(hour, trips)| HourCount { hour, trips })
        .collect()
}

/// The `limit` busiest pickup zones, by descending count.
///
/// Ties keep the order in which zones first appear in the view.
pub fn top_pickup_zones(view: &FilteredView<'_>, limit: usize) -> Vec<ZoneCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<ZoneCount> = Vec::new();

    for trip in view.iter() {
        match index.get(trip.pickup_zone.as_str()) {
            Some(&i) => counts[i].trips += 1,
            None => {
                index.insert(trip.pickup_zone.as_str(), counts.len());
                counts.push(ZoneCount {
                    zone: trip.pickup_zone.clone(),
                    trips: 1,
                });
            }
        }
    }

    // sort_by is stable: equal counts stay in first-seen order
    counts.sort_by(|a, b| b.trips.cmp(&a.trips));
    counts.truncate(limit);
    counts
}

/// Season x hour trip counts.
///
/// Rows are the seasons present in the view (ascending); columns are every
/// hour of `hours`.
pub fn season_hour_heatmap(view: &FilteredView<'_>, hours: &HourRange) -> SeasonHourHeatmap {
    let columns: Vec<u8> = hours.hours().collect();
    let seasons: BTreeSet<&str> = view.iter().map(|t| t.season.as_str()).collect();

    let mut rows: BTreeMap<&str, Vec<usize>> = seasons
        .into_iter()
        .map(|s| (s, vec![0; columns.len()]))
        .collect();

    for trip in view.iter() {
        let hour = trip.pickup_hour();
        if !hours.contains(hour) {
            continue;
        }
        if let Some(row) = rows.get_mut(trip.season.as_str()) {
            row[usize::from(hour - hours.lo())] += 1;
        }
    }

    SeasonHourHeatmap {
        hours: columns,
        rows: rows
            .into_iter()
            .map(|(season, counts)| HeatmapRow {
                season: season.to_string(),
                counts,
            })
            .collect(),
    }
}

/// Cumulative revenue share by fare rank (rank 0 = highest fare).
///
/// Empty views produce an empty series. When every fare is zero the shares are
/// uniform, `(rank + 1) / n`, so the series still ends at 1.0.
pub fn revenue_concentration(view: &FilteredView<'_>) -> Vec<RevenueSharePoint> {
    let mut fares: Vec<f64> = view.iter().map(|t| t.fare_amount).collect();
    if fares.is_empty() {
        return Vec::new();
    }

    fares.sort_by(|a, b| b.total_cmp(a));
    let total: f64 = fares.iter().sum();
    let n = fares.len() as f64;

    let mut running = 0.0;
    fares
        .iter()
        .enumerate()
        .map(|(trip_rank, fare)| {
            running += fare;
            let cum_revenue_share = if total > 0.0 {
                running / total
            } else {
                (trip_rank + 1) as f64 / n
            };
            RevenueSharePoint {
                trip_rank,
                cum_revenue_share,
            }
        })
        .collect()
}

/// Compute all four charts for a filtered view.
pub fn build_chart_panel(view: &FilteredView<'_>, hours: &HourRange) -> ChartPanel {
    ChartPanel {
        demand_by_hour: demand_by_hour(view),
        top_zones: top_pickup_zones(view, TOP_ZONES_LIMIT),
        season_hour_heatmap: season_hour_heatmap(view, hours),
        revenue_concentration: revenue_concentration(view),
    }
}

#[cfg(test)]
#[path = "charts_tests.rs"]
mod charts_tests;
