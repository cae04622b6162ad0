//! Short id allocation contract.

use crate::error::AppError;
use async_trait::async_trait;

/// Allocates short ids for newly admitted URLs.
///
/// Every call returns a value strictly greater than any value previously
/// returned, starting at 1. Values are never handed out twice, even to
/// concurrent callers. Gaps are allowed: an id drawn for an insert that later
/// loses a uniqueness race is simply never used.
///
/// # Implementations
///
/// - [`crate::infrastructure::sequencer::PgSequencer`] - database sequence
/// - [`crate::infrastructure::sequencer::AtomicSequencer`] - in-process counter
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdSequencer: Send + Sync {
    /// Returns the next short id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing counter is unavailable.
    async fn next(&self) -> Result<i64, AppError>;
}
