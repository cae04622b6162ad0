#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use shorturl::domain::reachability::{HostResolver, Reachability};
use shorturl::infrastructure::cache::NullCache;
use shorturl::infrastructure::persistence::{MemoryUrlRepository, PgUrlRepository};
use shorturl::infrastructure::sequencer::{AtomicSequencer, PgSequencer};
use shorturl::state::AppState;
use sqlx::PgPool;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

/// Resolver that treats every host under the reserved `.invalid` TLD as
/// unreachable and everything else as reachable, without touching DNS.
pub struct TestResolver;

#[async_trait]
impl HostResolver for TestResolver {
    async fn resolve_host(&self, hostname: &str) -> Reachability {
        if hostname == "invalid" || hostname.ends_with(".invalid") {
            Reachability::Unreachable
        } else {
            Reachability::Reachable(IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1)))
        }
    }
}

pub fn create_memory_state() -> AppState {
    AppState::new(
        Arc::new(MemoryUrlRepository::new()),
        Arc::new(AtomicSequencer::new()),
        Arc::new(TestResolver),
        Arc::new(NullCache::new()),
    )
}

pub fn create_pg_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);

    AppState::new(
        Arc::new(PgUrlRepository::new(pool.clone())),
        Arc::new(PgSequencer::new(pool)),
        Arc::new(TestResolver),
        Arc::new(NullCache::new()),
    )
}

/// API routes only, mounted the way the application mounts them.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", shorturl::api::routes::routes())
        .with_state(state)
}

pub async fn insert_url(pool: &PgPool, url: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO urls (canonical_url) VALUES ($1) RETURNING short_id")
        .bind(url)
        .fetch_one(pool)
        .await
        .unwrap()
}
