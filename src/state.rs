//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{ResolveService, ShortenService};
use crate::domain::reachability::HostResolver;
use crate::domain::repositories::UrlRepository;
use crate::domain::sequencer::IdSequencer;
use crate::infrastructure::cache::CacheService;

/// Shorten service over type-erased collaborators, so the storage backend can
/// be chosen at runtime.
pub type DynShortenService = ShortenService<dyn UrlRepository, dyn IdSequencer, dyn HostResolver>;

/// Resolve service over type-erased collaborators.
pub type DynResolveService = ResolveService<dyn UrlRepository, dyn CacheService>;

#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<DynShortenService>,
    pub resolve_service: Arc<DynResolveService>,
    pub url_repository: Arc<dyn UrlRepository>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    /// Wires the services around one shared record store.
    pub fn new(
        url_repository: Arc<dyn UrlRepository>,
        sequencer: Arc<dyn IdSequencer>,
        resolver: Arc<dyn HostResolver>,
        cache: Arc<dyn CacheService>,
    ) -> Self {
        let shorten_service = Arc::new(ShortenService::new(
            url_repository.clone(),
            sequencer,
            resolver,
        ));
        let resolve_service = Arc::new(ResolveService::new(url_repository.clone(), cache.clone()));

        Self {
            shorten_service,
            resolve_service,
            url_repository,
            cache,
        }
    }
}
