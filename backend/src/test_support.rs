//! Fixture builders shared by the unit tests.

use chrono::Duration;

use crate::models::{parse_timestamp, TripRecord};

/// Trip picked up at `pickup`, dropped off fifteen minutes later.
pub fn create_test_trip(pickup: &str, fare: f64, zone: &str, season: &str) -> TripRecord {
    let pickup = parse_timestamp(pickup).expect("valid test timestamp");
    TripRecord {
        pickup_datetime: pickup,
        dropoff_datetime: pickup + Duration::minutes(15),
        fare_amount: fare,
        pickup_zone: zone.to_string(),
        season: season.to_string(),
    }
}
