use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::time::hour_of_day;

/// Column names the trip dataset must provide.
pub const PICKUP_DATETIME: &str = "pickup_datetime";
pub const DROPOFF_DATETIME: &str = "dropoff_datetime";
pub const FARE_AMOUNT: &str = "fare_amount";
pub const PICKUP_ZONE: &str = "pickup_zone";
pub const SEASON: &str = "season";

/// One row of the trip dataset.
///
/// Records are immutable once loaded. `pickup_datetime <= dropoff_datetime` is
/// expected from the source data but not checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    pub pickup_datetime: NaiveDateTime,
    pub dropoff_datetime: NaiveDateTime,
    pub fare_amount: f64,
    pub pickup_zone: String,
    pub season: String,
}

impl TripRecord {
    /// Hour of day (0-23) the trip started.
    pub fn pickup_hour(&self) -> u8 {
        hour_of_day(&self.pickup_datetime)
    }
}

/// The base dataset: every trip in file order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripTable {
    trips: Vec<TripRecord>,
}

impl TripTable {
    pub fn new(trips: Vec<TripRecord>) -> Self {
        Self { trips }
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TripRecord> {
        self.trips.iter()
    }

    pub fn trips(&self) -> &[TripRecord] {
        &self.trips
    }

    /// Sorted distinct season labels.
    pub fn seasons(&self) -> Vec<String> {
        self.distinct(|t| &t.season)
    }

    /// Sorted distinct pickup zones.
    pub fn zones(&self) -> Vec<String> {
        self.distinct(|t| &t.pickup_zone)
    }

    fn distinct<F>(&self, field: F) -> Vec<String>
    where
        F: Fn(&TripRecord) -> &String,
    {
        self.trips
            .iter()
            .map(|t| field(t).as_str())
            .collect::<BTreeSet<&str>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

impl<'a> IntoIterator for &'a TripTable {
    type Item = &'a TripRecord;
    type IntoIter = std::slice::Iter<'a, TripRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.trips.iter()
    }
}

impl FromIterator<TripRecord> for TripTable {
    fn from_iter<I: IntoIterator<Item = TripRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::create_test_trip;

    fn trip(pickup: &str, zone: &str, season: &str) -> TripRecord {
        create_test_trip(pickup, 10.0, zone, season)
    }

    #[test]
    fn test_pickup_hour() {
        let t = trip("2023-01-01 13:59:00", "Midtown", "winter");
        assert_eq!(t.pickup_hour(), 13);
    }

    #[test]
    fn test_distinct_values_are_sorted_and_unique() {
        let table: TripTable = vec![
            trip("2023-01-01 01:00:00", "SoHo", "winter"),
            trip("2023-06-01 02:00:00", "Harlem", "summer"),
            trip("2023-01-02 03:00:00", "SoHo", "winter"),
            trip("2023-04-01 04:00:00", "Astoria", "spring"),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.len(), 4);
        assert_eq!(table.seasons(), vec!["spring", "summer", "winter"]);
        assert_eq!(table.zones(), vec!["Astoria", "Harlem", "SoHo"]);
    }

    #[test]
    fn test_empty_table() {
        let table = TripTable::default();
        assert!(table.is_empty());
        assert!(table.seasons().is_empty());
        assert!(table.zones().is_empty());
        assert_eq!(table.iter().count(), 0);
    }
}
