//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`UrlRecord`] - A stored mapping between a canonical URL and its short id
//!
//! Entities follow the "New Type" pattern with a separate struct for creation
//! ([`NewUrlRecord`]).

pub mod url_record;

pub use url_record::{NewUrlRecord, UrlRecord};
