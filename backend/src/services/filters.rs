//! Filter state, option derivation and the filtered view.
//!
//! The three predicates (season, zone, hour range) are independent row
//! membership tests ANDed together, so applying them in any order yields the
//! same view. An empty season or zone selection disables that predicate.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{TripRecord, TripTable};
use crate::routes::filters::{FilterOptions, FilteredSummary};

use super::format::{format_average_fare, format_count, format_currency};
use super::kpis::compute_totals;

pub const MIN_HOUR: u8 = 0;
pub const MAX_HOUR: u8 = 23;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("invalid hour range [{lo}, {hi}]: bounds must satisfy 0 <= lo <= hi <= 23")]
    InvalidHourRange { lo: u8, hi: u8 },
}

/// Inclusive hour-of-day range within `[0, 23]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct HourRange {
    lo: u8,
    hi: u8,
}

impl HourRange {
    pub fn new(lo: u8, hi: u8) -> Result<Self, FilterError> {
        if lo > hi || hi > MAX_HOUR {
            return Err(FilterError::InvalidHourRange { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    /// The whole day, `[0, 23]`.
    pub const fn full() -> Self {
        Self {
            lo: MIN_HOUR,
            hi: MAX_HOUR,
        }
    }

    pub fn lo(&self) -> u8 {
        self.lo
    }

    pub fn hi(&self) -> u8 {
        self.hi
    }

    pub fn contains(&self, hour: u8) -> bool {
        (self.lo..=self.hi).contains(&hour)
    }

    /// Every hour in the range, ascending.
    pub fn hours(&self) -> impl Iterator<Item = u8> {
        self.lo..=self.hi
    }
}

impl Default for HourRange {
    fn default() -> Self {
        Self::full()
    }
}

impl TryFrom<(u8, u8)> for HourRange {
    type Error = FilterError;

    fn try_from((lo, hi): (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(lo, hi)
    }
}

impl From<HourRange> for (u8, u8) {
    fn from(range: HourRange) -> Self {
        (range.lo, range.hi)
    }
}

/// Current selection of the three filter controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Empty means no season filter
    pub seasons: BTreeSet<String>,
    /// Empty means no zone filter (not "exclude all")
    pub zones: BTreeSet<String>,
    pub hours: HourRange,
}

impl FilterState {
    /// Initial state: every season selected, no zone filter, whole day.
    pub fn defaults_for(table: &TripTable) -> Self {
        Self {
            seasons: table.seasons().into_iter().collect(),
            zones: BTreeSet::new(),
            hours: HourRange::full(),
        }
    }

    pub fn with_seasons<I, S>(mut self, seasons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.seasons = seasons.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_zones<I, S>(mut self, zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.zones = zones.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_hours(mut self, hours: HourRange) -> Self {
        self.hours = hours;
        self
    }

    pub fn season_matches(&self, trip: &TripRecord) -> bool {
        self.seasons.is_empty() || self.seasons.contains(&trip.season)
    }

    pub fn zone_matches(&self, trip: &TripRecord) -> bool {
        self.zones.is_empty() || self.zones.contains(&trip.pickup_zone)
    }

    pub fn hour_matches(&self, trip: &TripRecord) -> bool {
        self.hours.contains(trip.pickup_hour())
    }

    pub fn matches(&self, trip: &TripRecord) -> bool {
        self.season_matches(trip) && self.zone_matches(trip) && self.hour_matches(trip)
    }
}

/// Subset of the base dataset matching a [`FilterState`], in file order.
#[derive(Debug, Clone, Default)]
pub struct FilteredView<'a> {
    trips: Vec<&'a TripRecord>,
}

impl<'a> FilteredView<'a> {
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a TripRecord> + '_ {
        self.trips.iter().copied()
    }

    /// Narrow this view further by a predicate.
    pub fn retain<F>(mut self, mut keep: F) -> Self
    where
        F: FnMut(&TripRecord) -> bool,
    {
        self.trips.retain(|t| keep(t));
        self
    }
}

impl<'a> FromIterator<&'a TripRecord> for FilteredView<'a> {
    fn from_iter<I: IntoIterator<Item = &'a TripRecord>>(iter: I) -> Self {
        Self {
            trips: iter.into_iter().collect(),
        }
    }
}

/// Selectable values derived from the base dataset.
pub fn filter_options(table: &TripTable) -> FilterOptions {
    FilterOptions {
        seasons: table.seasons(),
        zones: table.zones(),
        hour_min: MIN_HOUR,
        hour_max: MAX_HOUR,
    }
}

/// Build the filtered view for `state`.
pub fn apply_filters<'a>(table: &'a TripTable, state: &FilterState) -> FilteredView<'a> {
    table.iter().filter(|t| state.matches(t)).collect()
}

/// Totals over a filtered view, formatted the same way as the KPI panel.
pub fn summarize(view: &FilteredView<'_>) -> FilteredSummary {
    let totals = compute_totals(view.iter());
    let trip_count_display = format_count(totals.trip_count);
    let revenue_display = format_currency(totals.revenue);
    let average_fare_display = format_average_fare(totals.average_fare);
    let text = format!(
        "Filtered trips: {}; Revenue: {}; Avg Fare: {}",
        trip_count_display, revenue_display, average_fare_display
    );

    FilteredSummary {
        trip_count: totals.trip_count,
        revenue: totals.revenue,
        average_fare: totals.average_fare,
        trip_count_display,
        revenue_display,
        average_fare_display,
        text,
    }
}

#[cfg(test)]
#[path = "filters_tests.rs"]
mod filters_tests;
