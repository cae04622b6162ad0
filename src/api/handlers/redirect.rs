//! Handler for short url redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short id to its canonical URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{short}`
///
/// # Request Flow
///
/// 1. Check cache for the URL (cache key: short id)
/// 2. On cache miss, query the record store and fill the cache
/// 3. Return 302 Found
///
/// # Errors
///
/// Returns 404 Not Found with a plain-text body if the id is malformed or
/// unknown. This is never a redirect.
pub async fn redirect_handler(
    Path(short): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let url = state.resolve_service.resolve_raw(&short).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, url)]))
}
