//! API error type with automatic HTTP status mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

use taxlens_core::AllocationError;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Bad request payloads and out-of-range amounts (400).
    #[error("{0}")]
    Validation(String),

    /// Missing or unverifiable token on a protected route (401).
    #[error("{0}")]
    Unauthorized(String),

    /// Zero-sum weight table: server misconfiguration, not user error (500).
    #[error("weight table is misconfigured")]
    DegenerateWeights,

    /// Persistence read or write failure (500). The computed breakdown is
    /// discarded, never silently kept.
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::DegenerateWeights | ApiError::Storage(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<AllocationError> for ApiError {
    fn from(err: AllocationError) -> Self {
        match err {
            AllocationError::InvalidAmount(_) => ApiError::Validation(err.to_string()),
            AllocationError::DegenerateWeights => ApiError::DegenerateWeights,
        }
    }
}
