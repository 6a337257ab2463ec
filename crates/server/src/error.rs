//! Unified error handling for the HTTP surface.
//!
//! Provides a unified `AppError` type mapping every failure to a structured
//! `{"success": false, "error": ...}` JSON payload. All route handlers
//! return `Result<T, AppError>`; no failure escapes as a generic error page
//! and none crashes the process.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Store operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Missing, invalid, or expired admin token.
    #[error("Unauthorized")]
    Unauthorized,

    /// Login credentials did not match the configured admin account.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unauthorized | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose I/O details to clients
        let message = match &self {
            Self::Store(StoreError::NotFound(_)) => "Product not found".to_string(),
            Self::Store(err) => {
                tracing::error!(error = %err, "store failure");
                "Internal storage error".to_string()
            }
            Self::Unauthorized => "Unauthorized".to_string(),
            Self::InvalidCredentials => "Invalid credentials".to_string(),
            Self::BadRequest(msg) => msg.clone(),
        };

        (status, Json(json!({ "success": false, "error": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
