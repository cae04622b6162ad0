//! Handler for requests matching no route.

use axum::{http::StatusCode, response::IntoResponse};

/// Responds with a fixed plain-text `Not Found`.
pub async fn fallback_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}
