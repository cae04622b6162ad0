//! Short id resolution service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, error};

use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Resolves short ids back to canonical URLs.
///
/// Lookups go through the cache first. Records never change once written, so a
/// cached mapping stays valid for its whole TTL and misses are not cached.
/// A store hit fills the cache before returning; cache failures are logged and
/// never fail the lookup.
pub struct ResolveService<R: ?Sized, C: ?Sized> {
    url_repository: Arc<R>,
    cache: Arc<C>,
}

impl<R, C> ResolveService<R, C>
where
    R: UrlRepository + ?Sized,
    C: CacheService + ?Sized,
{
    /// Creates a new resolve service.
    pub fn new(url_repository: Arc<R>, cache: Arc<C>) -> Self {
        Self {
            url_repository,
            cache,
        }
    }

    /// Resolves a short id given as path text.
    ///
    /// Anything that is not a positive integer resolves to not found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for malformed or unknown ids.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve_raw(&self, raw_id: &str) -> Result<String, AppError> {
        match parse_short_id(raw_id) {
            Some(short_id) => self.resolve(short_id).await,
            None => Err(not_found(raw_id)),
        }
    }

    /// Resolves a short id to its canonical URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, short_id: i64) -> Result<String, AppError> {
        let cache_key = short_id.to_string();

        match self.cache.get_url(&cache_key).await {
            Ok(Some(cached_url)) => {
                debug!("Cache HIT for {}", cache_key);
                metrics::counter!("shorturl_resolve_total", "outcome" => "hit").increment(1);
                return Ok(cached_url);
            }
            Ok(None) => debug!("Cache MISS for {}", cache_key),
            Err(e) => error!("Cache error: {}", e),
        }

        let Some(record) = self.url_repository.find_by_short_id(short_id).await? else {
            metrics::counter!("shorturl_resolve_total", "outcome" => "miss").increment(1);
            return Err(not_found(&cache_key));
        };

        metrics::counter!("shorturl_resolve_total", "outcome" => "hit").increment(1);

        if let Err(e) = self
            .cache
            .set_url(&cache_key, &record.canonical_url, None)
            .await
        {
            error!("Failed to cache URL: {}", e);
        }

        Ok(record.canonical_url)
    }
}

fn parse_short_id(raw_id: &str) -> Option<i64> {
    raw_id.parse::<i64>().ok().filter(|id| *id > 0)
}

fn not_found(short_id: &str) -> AppError {
    AppError::not_found("Short url not found", json!({ "short_id": short_id }))
}
