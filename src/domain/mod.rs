//! Domain layer containing business entities and collaborator contracts.
//!
//! This module defines the data model and the interfaces the shortening core
//! depends on, independent of any concrete database, cache or resolver.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Record store trait definitions
//! - [`sequencer`] - Short id allocation contract
//! - [`reachability`] - Hostname reachability contract
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Traits define contracts implemented by the infrastructure layer
//! - Business logic lives in services (see [`crate::application::services`])

pub mod entities;
pub mod reachability;
pub mod repositories;
pub mod sequencer;
