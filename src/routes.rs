//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                       - Landing page with a submission form
//! - `GET  /health`                 - Health check: store and cache (public)
//! - `POST /api/shorturl/new`       - Shorten a URL
//! - `GET  /api/shorturl/{short}`   - Redirect to the URL behind a short id
//! - `/static/*`                    - Static assets
//! - anything else                  - `404 Not Found` (plain text)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive cross-origin access
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{fallback_handler, health_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Directory holding the landing page and its assets, relative to the working directory.
const STATIC_DIR: &str = "static";

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route_service("/", ServeFile::new(format!("{STATIC_DIR}/index.html")))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .fallback(fallback_handler)
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
