//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State};

use crate::api::dto::shorten::ShortenResponse;
use crate::api::extractors::UrlSubmission;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the short id for a URL, creating it on first submission.
///
/// # Endpoint
///
/// `POST /api/shorturl/new` (also `POST /api/shorturl`)
///
/// # Request Body
///
/// Form-encoded `url=https://example.com` or JSON:
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "original_url": "https://example.com", "short_url": 1 }
/// ```
///
/// Submitting an equivalent URL again returns the same `short_url`.
///
/// # Errors
///
/// Returns 400 Bad Request with `{"error": "invalid URL"}` if the URL is
/// malformed or its host does not resolve.
/// Returns 500 Internal Server Error if the store fails.
pub async fn shorten_handler(
    State(state): State<AppState>,
    UrlSubmission(payload): UrlSubmission,
) -> Result<Json<ShortenResponse>, AppError> {
    let record = state.shorten_service.shorten(&payload.url).await?;

    Ok(Json(record.into()))
}
