//! Application layer services implementing business logic.
//!
//! This layer orchestrates the normalizer, the reachability oracle, the id
//! sequencer and the record store. Services consume domain traits and provide
//! a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::shorten_service::ShortenService`] - Deduplicating short id creation
//! - [`services::resolve_service::ResolveService`] - Short id to URL resolution

pub mod services;
