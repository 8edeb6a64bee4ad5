#![allow(dead_code)]

use std::collections::HashSet;
use std::io::Write;
use std::sync::Mutex;

use ride_analytics::models::{parse_timestamp, TripRecord};
use tempfile::NamedTempFile;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

// =============================================================================
// Fixtures
// =============================================================================

pub const CSV_HEADER: &str = "pickup_datetime,dropoff_datetime,fare_amount,pickup_zone,season";

pub const SEASONS: [&str; 4] = ["fall", "spring", "summer", "winter"];
pub const ZONES: [&str; 7] = [
    "Astoria",
    "Brooklyn Heights",
    "Harlem",
    "JFK Airport",
    "Midtown",
    "SoHo",
    "Upper East Side",
];

/// Metrics document with every known key present.
pub const FULL_METRICS: &str = r#"{
    "avg_idle_baseline_min": 8.5,
    "avg_idle_after_min": 7.48,
    "top15_customers_share_rides": 0.42,
    "top5_zones_share_rides": 0.35,
    "trips_share_making_45pct_revenue": 0.22,
    "notes": "synthetic"
}"#;

pub fn create_test_trip(pickup: &str, fare: f64, zone: &str, season: &str) -> TripRecord {
    let pickup = parse_timestamp(pickup).expect("valid test timestamp");
    TripRecord {
        pickup_datetime: pickup,
        dropoff_datetime: pickup + chrono::Duration::minutes(15),
        fare_amount: fare,
        pickup_zone: zone.to_string(),
        season: season.to_string(),
    }
}

/// Deterministic synthetic row `i`: hour `i % 24`, season `i % 4`, zone `i % 7`.
pub fn synthetic_row(i: usize) -> (u8, f64, &'static str, &'static str) {
    let hour = (i % 24) as u8;
    let fare = 5.0 + (i % 50) as f64 * 0.5;
    (hour, fare, ZONES[i % ZONES.len()], SEASONS[i % SEASONS.len()])
}

/// CSV text for `n` synthetic rows.
pub fn synthetic_csv(n: usize) -> String {
    let mut csv = String::with_capacity(n * 80);
    csv.push_str(CSV_HEADER);
    csv.push('\n');
    for i in 0..n {
        let (hour, fare, zone, season) = synthetic_row(i);
        let day = 1 + (i / 24) % 28;
        csv.push_str(&format!(
            "2023-02-{day:02} {hour:02}:05:00,2023-02-{day:02} {hour:02}:35:00,{fare},{zone},{season}\n"
        ));
    }
    csv
}

pub fn write_temp(contents: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

pub fn write_trips_csv(contents: &str) -> NamedTempFile {
    write_temp(contents, ".csv")
}

pub fn write_metrics_json(contents: &str) -> NamedTempFile {
    write_temp(contents, ".json")
}
