//! Application error type and its HTTP rendering.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

/// Error body returned for a rejected submission.
pub const INVALID_URL_MESSAGE: &str = "invalid URL";

/// Plain-text body returned when a short id has no record.
pub const NOT_FOUND_MESSAGE: &str = "short url not found";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed input or unreachable host. Rendered as `{"error": "invalid URL"}`.
    #[error("{message}")]
    Validation { message: String, details: Value },
    /// No record for the requested short id. Rendered as plain text.
    #[error("{message}")]
    NotFound { message: String, details: Value },
    /// Uniqueness violation in the record store.
    #[error("{message}")]
    Conflict { message: String, details: Value },
    /// Storage or other infrastructure failure.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation { message, details } => {
                tracing::debug!(reason = %message, %details, "Rejected submission");
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": INVALID_URL_MESSAGE })),
                )
                    .into_response()
            }
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response(),
            AppError::Conflict { message, details } => {
                tracing::warn!(reason = %message, %details, "Unresolved store conflict");
                (StatusCode::CONFLICT, Json(json!({ "error": "conflict" }))).into_response()
            }
            AppError::Internal { message, details } => {
                tracing::error!(reason = %message, %details, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal error" })),
                )
                    .into_response()
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request("Validation failed", json!({ "reason": e.to_string() }))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return AppError::conflict(
            "Unique constraint violation",
            json!({ "constraint": db.constraint() }),
        );
    }

    AppError::internal("Database error", json!({ "reason": e.to_string() }))
}
