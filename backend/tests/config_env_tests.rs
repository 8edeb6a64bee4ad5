//! Configuration resolution: file defaults plus environment overrides.

mod support;

use std::path::PathBuf;

use ride_analytics::data::{DashboardConfig, DataError};

use support::with_scoped_env;

const VARS: [&str; 4] = ["TRIPS_PATH", "METRICS_PATH", "HOST", "PORT"];

fn cleared() -> Vec<(&'static str, Option<&'static str>)> {
    VARS.iter().map(|k| (*k, None)).collect()
}

#[test]
fn test_env_overrides_apply() {
    let changes = [
        ("TRIPS_PATH", Some("/data/trips.csv")),
        ("METRICS_PATH", Some("/data/metrics.json")),
        ("HOST", Some("127.0.0.1")),
        ("PORT", Some("9090")),
    ];

    with_scoped_env(&changes, || {
        let mut config = DashboardConfig::default();
        config.apply_env_overrides().unwrap();
        assert_eq!(config.data.trips_path, PathBuf::from("/data/trips.csv"));
        assert_eq!(config.data.metrics_path, PathBuf::from("/data/metrics.json"));
        assert_eq!(config.bind_address(), "127.0.0.1:9090");
    });
}

#[test]
fn test_no_env_keeps_file_values() {
    with_scoped_env(&cleared(), || {
        let mut config: DashboardConfig =
            toml::from_str("[data]\ntrips_path = \"trips.csv\"\n").unwrap();
        config.apply_env_overrides().unwrap();
        assert_eq!(config.data.trips_path, PathBuf::from("trips.csv"));
        assert_eq!(config.data.metrics_path, PathBuf::from("metrics.json"));
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    });
}

#[test]
fn test_invalid_port_is_configuration_error() {
    with_scoped_env(&[("PORT", Some("eighty"))], || {
        let mut config = DashboardConfig::default();
        let err = config.apply_env_overrides().unwrap_err();
        assert!(matches!(err, DataError::Configuration(_)));
        assert!(err.to_string().contains("eighty"));
    });
}

#[test]
fn test_partial_env_override() {
    let mut changes = cleared();
    changes.push(("PORT", Some("3000")));

    with_scoped_env(&changes, || {
        let mut config = DashboardConfig::default();
        config.apply_env_overrides().unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
    });
}
