//! Repository trait definitions for the domain layer.
//!
//! The record store is abstracted behind [`UrlRepository`] so the shortening
//! core can run against PostgreSQL in production and an in-memory map in
//! tests or single-node deployments.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Testing
//!
//! See integration tests in `tests/repository_url.rs` for usage examples.

pub mod url_repository;

pub use url_repository::UrlRepository;

#[cfg(test)]
pub use url_repository::MockUrlRepository;
