mod common;

use shorturl::application::services::ShortenService;
use shorturl::domain::repositories::UrlRepository;
use shorturl::infrastructure::persistence::{MemoryUrlRepository, PgUrlRepository};
use shorturl::infrastructure::sequencer::{AtomicSequencer, PgSequencer};
use sqlx::PgPool;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::task::JoinSet;

const CALLERS: usize = 50;

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_same_url_yields_one_record() {
    let repo = Arc::new(MemoryUrlRepository::new());
    let service = Arc::new(ShortenService::new(
        repo.clone(),
        Arc::new(AtomicSequencer::new()),
        Arc::new(common::TestResolver),
    ));

    let mut tasks = JoinSet::new();
    for _ in 0..CALLERS {
        let service = service.clone();
        tasks.spawn(async move { service.shorten("https://race.example.com/page").await });
    }

    let mut ids = HashSet::new();
    while let Some(result) = tasks.join_next().await {
        ids.insert(result.unwrap().unwrap().short_id);
    }

    assert_eq!(ids.len(), 1);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_distinct_urls_yield_distinct_ids() {
    let service = Arc::new(ShortenService::new(
        Arc::new(MemoryUrlRepository::new()),
        Arc::new(AtomicSequencer::new()),
        Arc::new(common::TestResolver),
    ));

    let mut tasks = JoinSet::new();
    for i in 0..CALLERS {
        let service = service.clone();
        tasks.spawn(async move {
            service
                .shorten(&format!("https://example.com/item/{i}"))
                .await
        });
    }

    let mut ids = HashSet::new();
    while let Some(result) = tasks.join_next().await {
        ids.insert(result.unwrap().unwrap().short_id);
    }

    assert_eq!(ids.len(), CALLERS);
}

#[sqlx::test]
async fn test_concurrent_same_url_postgres(pool: PgPool) {
    let pool = Arc::new(pool);
    let repo = Arc::new(PgUrlRepository::new(pool.clone()));
    let service = Arc::new(ShortenService::new(
        repo.clone(),
        Arc::new(PgSequencer::new(pool)),
        Arc::new(common::TestResolver),
    ));

    let mut tasks = JoinSet::new();
    for _ in 0..20 {
        let service = service.clone();
        tasks.spawn(async move { service.shorten("https://race.example.com/pg").await });
    }

    let mut ids = HashSet::new();
    while let Some(result) = tasks.join_next().await {
        ids.insert(result.unwrap().unwrap().short_id);
    }

    assert_eq!(ids.len(), 1);
    assert_eq!(repo.count().await.unwrap(), 1);
}
