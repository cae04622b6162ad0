//! Utility functions for URL processing.
//!
//! - [`url_normalizer`] - URL normalization into the canonical deduplication key

pub mod url_normalizer;
