//! API route configuration.

use crate::api::handlers::{redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public short url routes.
///
/// # Endpoints
///
/// - `POST /shorturl/new`     - Shorten a URL
/// - `POST /shorturl`         - Alias of `/shorturl/new`
/// - `GET  /shorturl/{short}` - Redirect to the URL behind a short id
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorturl", post(shorten_handler))
        .route("/shorturl/new", post(shorten_handler))
        .route("/shorturl/{short}", get(redirect_handler))
}
