//! Error types for loading the dashboard inputs and reading metrics.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::MetricKey;

/// Result type for data operations
pub type DataResult<T> = Result<T, DataError>;

/// Errors raised while loading the trip dataset or the metrics document.
///
/// Every variant is fatal: the server refuses to start, and a render that hits
/// one returns no partial dashboard.
#[derive(Debug, Error)]
pub enum DataError {
    /// Input file does not exist
    #[error("input file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Input file exists but could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV reader or column access failed
    #[error("failed to read trip table: {0}")]
    Frame(#[from] polars::error::PolarsError),

    /// Metrics document is not valid JSON
    #[error("failed to parse metrics document: {0}")]
    Json(#[from] serde_json::Error),

    /// Metrics document is valid JSON but has the wrong shape
    #[error("malformed metrics document: {0}")]
    Metrics(String),

    /// Trip dataset lacks a required column
    #[error("trip dataset is missing required column '{0}'")]
    MissingColumn(String),

    /// A cell could not be converted into a trip field
    #[error("row {row}, column '{column}': {message}")]
    InvalidRow {
        row: usize,
        column: String,
        message: String,
    },

    /// A required metrics key is absent
    #[error("required metric '{0}' is missing from the metrics document")]
    MissingMetric(MetricKey),

    /// Configuration file or environment override is invalid
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl DataError {
    /// Short machine-readable code, used by the HTTP layer.
    pub fn code(&self) -> &'static str {
        match self {
            DataError::NotFound(_) => "NOT_FOUND",
            DataError::Io { .. } => "IO_ERROR",
            DataError::Frame(_) | DataError::MissingColumn(_) | DataError::InvalidRow { .. } => {
                "INVALID_DATASET"
            }
            DataError::Json(_) | DataError::Metrics(_) => "INVALID_METRICS",
            DataError::MissingMetric(_) => "MISSING_METRIC",
            DataError::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }
}
