//! In-memory implementation of the url repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// In-memory record store backed by two DashMaps.
///
/// `by_url` is the primary index and `by_id` the secondary one. An insert
/// claims both entries before writing either, holding their shard locks, so
/// neither a canonical URL nor a short id can be stored twice.
#[derive(Debug, Default)]
pub struct MemoryUrlRepository {
    by_url: DashMap<String, UrlRecord>,
    by_id: DashMap<i64, String>,
}

impl MemoryUrlRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let NewUrlRecord {
            short_id,
            canonical_url,
        } = new_record;

        // Lock order is always by_url then by_id.
        let Entry::Vacant(url_slot) = self.by_url.entry(canonical_url.clone()) else {
            return Err(AppError::conflict(
                "Canonical URL already stored",
                json!({ "canonical_url": canonical_url }),
            ));
        };

        let Entry::Vacant(id_slot) = self.by_id.entry(short_id) else {
            return Err(AppError::conflict(
                "Short id already stored",
                json!({ "short_id": short_id }),
            ));
        };

        let record = UrlRecord::new(short_id, canonical_url.clone(), Utc::now());
        // by_id first: anything visible in by_url is reachable by id.
        id_slot.insert(canonical_url);
        url_slot.insert(record.clone());

        Ok(record)
    }

    async fn find_by_canonical_url(
        &self,
        canonical_url: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        Ok(self.by_url.get(canonical_url).map(|r| r.value().clone()))
    }

    async fn find_by_short_id(&self, short_id: i64) -> Result<Option<UrlRecord>, AppError> {
        let Some(canonical_url) = self.by_id.get(&short_id).map(|u| u.value().clone()) else {
            return Ok(None);
        };

        Ok(self.by_url.get(&canonical_url).map(|r| r.value().clone()))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.by_url.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_record(short_id: i64, url: &str) -> NewUrlRecord {
        NewUrlRecord {
            short_id,
            canonical_url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = MemoryUrlRepository::new();

        let created = repo
            .create(new_record(1, "https://example.com"))
            .await
            .unwrap();
        assert_eq!(created.short_id, 1);

        let by_url = repo
            .find_by_canonical_url("https://example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_url, created);

        let by_id = repo.find_by_short_id(1).await.unwrap().unwrap();
        assert_eq!(by_id, created);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_missing() {
        let repo = MemoryUrlRepository::new();

        assert!(repo.find_by_short_id(999_999).await.unwrap().is_none());
        assert!(
            repo.find_by_canonical_url("https://nope.example.com")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_duplicate_url_conflicts_and_keeps_original() {
        let repo = MemoryUrlRepository::new();
        repo.create(new_record(1, "https://example.com"))
            .await
            .unwrap();

        let err = repo
            .create(new_record(2, "https://example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict { .. }));

        assert!(repo.find_by_short_id(2).await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_id_conflicts() {
        let repo = MemoryUrlRepository::new();
        repo.create(new_record(1, "https://a.example.com"))
            .await
            .unwrap();

        let err = repo
            .create(new_record(1, "https://b.example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_duplicate_id_keeps_first_mapping() {
        let repo = MemoryUrlRepository::new();
        repo.create(new_record(1, "https://a.example.com"))
            .await
            .unwrap();
        let _ = repo.create(new_record(1, "https://b.example.com")).await;

        let stored = repo.find_by_short_id(1).await.unwrap().unwrap();
        assert_eq!(stored.canonical_url, "https://a.example.com");
        assert!(
            repo.find_by_canonical_url("https://b.example.com")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_inserts_of_same_id() {
        let repo = Arc::new(MemoryUrlRepository::new());
        let mut handles = vec![];

        for i in 0..20 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.create(new_record(7, &format!("https://example.com/{i}")))
                    .await
            }));
        }

        let mut winners = vec![];
        for handle in handles {
            if let Ok(record) = handle.await.unwrap() {
                winners.push(record);
            }
        }

        assert_eq!(winners.len(), 1);
        assert_eq!(repo.count().await.unwrap(), 1);
        let stored = repo.find_by_short_id(7).await.unwrap().unwrap();
        assert_eq!(stored, winners[0]);
    }

    #[tokio::test]
    async fn test_concurrent_inserts_of_same_url() {
        let repo = Arc::new(MemoryUrlRepository::new());
        let mut handles = vec![];

        for i in 1..=20i64 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.create(new_record(i, "https://same.example.com")).await
            }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
