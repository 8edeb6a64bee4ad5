//! Dashboard configuration file support.
//!
//! Settings are read from a TOML file and then overridden by environment
//! variables, so a deployment can point at other input files without editing
//! the file.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{DataError, DataResult};

/// Dashboard configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

/// Input file locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_trips_path")]
    pub trips_path: PathBuf,
    #[serde(default = "default_metrics_path")]
    pub metrics_path: PathBuf,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_trips_path() -> PathBuf {
    PathBuf::from("data/uber_trips_50k.csv")
}

fn default_metrics_path() -> PathBuf {
    PathBuf::from("metrics.json")
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            trips_path: default_trips_path(),
            metrics_path: default_metrics_path(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> DataResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            DataError::Configuration(format!("Failed to read config file: {}", e))
        })?;

        toml::from_str(&content).map_err(|e| {
            DataError::Configuration(format!("Failed to parse config file: {}", e))
        })
    }

    /// Load configuration from the first `dashboard.toml` found in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Returns `Ok(None)` when no file exists.
    pub fn from_default_location() -> DataResult<Option<Self>> {
        let search_paths = [
            PathBuf::from("dashboard.toml"),
            PathBuf::from("backend/dashboard.toml"),
            PathBuf::from("../dashboard.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                log::info!("Using configuration file {}", path.display());
                return Self::from_file(&path).map(Some);
            }
        }

        Ok(None)
    }

    /// Resolve the effective configuration: file (or defaults) then env.
    ///
    /// # Environment Variables
    /// - `TRIPS_PATH`: trip dataset CSV
    /// - `METRICS_PATH`: metrics JSON document
    /// - `HOST`: listener host
    /// - `PORT`: listener port
    pub fn load() -> DataResult<Self> {
        let mut config = Self::from_default_location()?.unwrap_or_default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply environment variable overrides on top of the current values.
    pub fn apply_env_overrides(&mut self) -> DataResult<()> {
        if let Ok(path) = env::var("TRIPS_PATH") {
            self.data.trips_path = PathBuf::from(path);
        }
        if let Ok(path) = env::var("METRICS_PATH") {
            self.data.metrics_path = PathBuf::from(path);
        }
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port.parse().map_err(|_| {
                DataError::Configuration(format!("PORT must be a valid port number, got '{}'", port))
            })?;
        }
        Ok(())
    }

    /// `host:port` string for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
