//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::data::DataError;
use crate::services::filters::FilterError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation error)
    BadRequest(String),
    /// Internal server error
    Internal(String),
    /// Loading or metrics lookup error
    Data(DataError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
            // Inputs are loaded before the listener binds, so any data error
            // seen here is a server-side fault
            AppError::Data(e) => {
                let mut error = ApiError::new(e.code(), e.to_string());
                if let DataError::MissingMetric(key) = &e {
                    error = error.with_details(format!("key: {}", key));
                }
                (StatusCode::INTERNAL_SERVER_ERROR, error)
            }
        };

        if status.is_server_error() {
            tracing::error!(code = %error.code, "{}", error.message);
        }

        (status, Json(error)).into_response()
    }
}

impl From<DataError> for AppError {
    fn from(err: DataError) -> Self {
        AppError::Data(err)
    }
}

impl From<FilterError> for AppError {
    fn from(err: FilterError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
