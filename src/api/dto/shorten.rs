//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::UrlRecord;
use crate::utils::url_normalizer::MAX_URL_LENGTH;

/// `validator` length bounds are `u64`.
const MAX_URL_LENGTH_U64: u64 = MAX_URL_LENGTH as u64;

/// Request to shorten a URL.
///
/// Accepted as a form field or a JSON property. A missing field is treated as
/// an empty URL, which is rejected as invalid.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[serde(default)]
    #[validate(length(max = MAX_URL_LENGTH_U64))]
    pub url: String,
}

/// Successful shortening result.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: i64,
}

impl From<UrlRecord> for ShortenResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            original_url: record.canonical_url,
            short_url: record.short_id,
        }
    }
}
