//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`cache`] - Resolve cache (Redis and no-op implementations)
//! - [`dns`] - Hostname reachability checks
//! - [`persistence`] - Record store implementations
//! - [`sequencer`] - Short id allocation

pub mod cache;
pub mod dns;
pub mod persistence;
pub mod sequencer;
