//! URL normalization utilities.
//!
//! Produces the canonical string used as the deduplication key, together with
//! the bare hostname used for the reachability check.

use url::{Host, Url};

/// Inputs longer than this are rejected before parsing.
pub const MAX_URL_LENGTH: usize = 2048;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,

    #[error("URL exceeds {MAX_URL_LENGTH} bytes")]
    TooLong,
}

/// A successfully normalized URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUrl {
    /// Canonical string form, the deduplication key.
    pub canonical: String,
    /// Hostname without brackets or port, passed to the reachability check.
    pub host: String,
}

/// Normalizes a URL to its canonical form.
///
/// # Normalization Rules
///
/// 1. **Protocol**: Only HTTP and HTTPS are allowed, and a host is required
/// 2. **Reconstruction**: The URL is re-serialized from its parsed parts, which
///    lowercases scheme and host, drops default ports and punycodes IDN hosts
/// 3. **Root slash**: A bare `/` path with no query or fragment is stripped, so
///    `https://example.com/` and `https://example.com` share one key
///
/// Paths, queries and fragments are otherwise preserved as-is.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::InvalidFormat`] for unparsable input (including
/// the empty string and URLs missing a protocol).
/// Returns [`UrlNormalizationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
///
/// # Examples
///
/// ```
/// use shorturl::utils::url_normalizer::normalize_url;
///
/// let normalized = normalize_url("HTTPS://EXAMPLE.COM:443/").unwrap();
/// assert_eq!(normalized.canonical, "https://example.com");
/// assert_eq!(normalized.host, "example.com");
/// ```
pub fn normalize_url(input: &str) -> Result<NormalizedUrl, UrlNormalizationError> {
    if input.len() > MAX_URL_LENGTH {
        return Err(UrlNormalizationError::TooLong);
    }

    let url = Url::parse(input.trim())
        .map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    let host = match url.host() {
        Some(Host::Domain(domain)) if !domain.is_empty() => domain.to_string(),
        Some(Host::Ipv4(addr)) => addr.to_string(),
        Some(Host::Ipv6(addr)) => addr.to_string(),
        _ => return Err(UrlNormalizationError::MissingHost),
    };

    let bare_root = url.path() == "/" && url.query().is_none() && url.fragment().is_none();

    let mut canonical = String::from(url);
    if bare_root {
        canonical.pop();
    }

    Ok(NormalizedUrl { canonical, host })
}
