//! Cross-origin resource sharing policy.

use tower_http::cors::CorsLayer;

/// Allows any origin, method and header.
///
/// The API carries no credentials, so browser clients on other origins may
/// call it freely.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
