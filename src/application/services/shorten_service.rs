//! Short id creation service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::reachability::HostResolver;
use crate::domain::repositories::UrlRepository;
use crate::domain::sequencer::IdSequencer;
use crate::error::AppError;
use crate::utils::url_normalizer::normalize_url;

/// Service for turning submitted URLs into short ids.
///
/// Guarantees at most one stored record per canonical URL. The record store
/// enforces uniqueness; when two requests for the same unseen URL race, the
/// loser's insert fails with [`AppError::Conflict`] and the service returns the
/// winner's record instead. No in-process locking is involved.
pub struct ShortenService<R: ?Sized, S: ?Sized, H: ?Sized> {
    url_repository: Arc<R>,
    sequencer: Arc<S>,
    resolver: Arc<H>,
}

impl<R, S, H> ShortenService<R, S, H>
where
    R: UrlRepository + ?Sized,
    S: IdSequencer + ?Sized,
    H: HostResolver + ?Sized,
{
    /// Creates a new shorten service.
    pub fn new(url_repository: Arc<R>, sequencer: Arc<S>, resolver: Arc<H>) -> Self {
        Self {
            url_repository,
            sequencer,
            resolver,
        }
    }

    /// Returns the record for `raw_url`, creating it on first submission.
    ///
    /// # Steps
    ///
    /// 1. Normalize the input into its canonical form
    /// 2. Check the host is reachable (before any store access)
    /// 3. Return the existing record if the canonical URL is already stored
    /// 4. Otherwise draw the next short id and insert
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is malformed or its host
    /// is unreachable. The two cases are not distinguished to the caller.
    ///
    /// Store and sequencer failures propagate unchanged.
    pub async fn shorten(&self, raw_url: &str) -> Result<UrlRecord, AppError> {
        let normalized = normalize_url(raw_url).map_err(|e| {
            metrics::counter!("shorturl_shorten_total", "outcome" => "invalid").increment(1);
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        if !self
            .resolver
            .resolve_host(&normalized.host)
            .await
            .is_reachable()
        {
            metrics::counter!("shorturl_shorten_total", "outcome" => "invalid").increment(1);
            return Err(AppError::bad_request(
                "Host is unreachable",
                json!({ "host": normalized.host }),
            ));
        }

        let canonical_url = normalized.canonical;

        if let Some(existing) = self
            .url_repository
            .find_by_canonical_url(&canonical_url)
            .await?
        {
            debug!(short_id = existing.short_id, %canonical_url, "URL already shortened");
            metrics::counter!("shorturl_shorten_total", "outcome" => "existing").increment(1);
            return Ok(existing);
        }

        let short_id = self.sequencer.next().await?;
        let new_record = NewUrlRecord {
            short_id,
            canonical_url: canonical_url.clone(),
        };

        match self.url_repository.create(new_record).await {
            Ok(record) => {
                info!(short_id = record.short_id, %canonical_url, "Created short url");
                metrics::counter!("shorturl_shorten_total", "outcome" => "created").increment(1);
                Ok(record)
            }
            Err(AppError::Conflict { .. }) => {
                warn!(short_id, %canonical_url, "Concurrent insert won, returning stored record");
                self.recover_from_conflict(&canonical_url, short_id).await
            }
            Err(e) => Err(e),
        }
    }

    /// Re-reads the record that won a uniqueness race.
    ///
    /// A conflict without a matching canonical URL means the short id itself
    /// collided, which indicates a sequencer fault.
    async fn recover_from_conflict(
        &self,
        canonical_url: &str,
        short_id: i64,
    ) -> Result<UrlRecord, AppError> {
        let record = self
            .url_repository
            .find_by_canonical_url(canonical_url)
            .await?
            .ok_or_else(|| {
                AppError::internal(
                    "Insert conflicted but no record holds the URL",
                    json!({ "canonical_url": canonical_url, "short_id": short_id }),
                )
            })?;

        metrics::counter!("shorturl_shorten_total", "outcome" => "existing").increment(1);
        Ok(record)
    }
}
