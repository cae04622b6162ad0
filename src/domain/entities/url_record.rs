//! Url record entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A stored mapping between a canonical URL and its short id.
///
/// Records are created once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlRecord {
    pub short_id: i64,
    pub canonical_url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(short_id: i64, canonical_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            short_id,
            canonical_url,
            created_at,
        }
    }
}

/// Input data for creating a new record.
///
/// The short id is allocated by the sequencer before the insert is attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub short_id: i64,
    pub canonical_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_record_creation() {
        let now = Utc::now();
        let record = UrlRecord::new(1, "https://example.com".to_string(), now);

        assert_eq!(record.short_id, 1);
        assert_eq!(record.canonical_url, "https://example.com");
        assert_eq!(record.created_at, now);
    }
}
