//! PostgreSQL sequence backed id allocation.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::sequencer::IdSequencer;
use crate::error::AppError;

/// Draws short ids from a PostgreSQL sequence.
///
/// `nextval` is atomic and non-transactional, so concurrent callers across
/// any number of service instances never observe the same value, and a value
/// drawn by a rolled back or abandoned request is never reused.
pub struct PgSequencer {
    pool: Arc<PgPool>,
}

impl PgSequencer {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Returns the last value handed out, or `None` if the sequence is unused.
    pub async fn last_issued(&self) -> Result<Option<i64>, AppError> {
        let (last_value, is_called) = sqlx::query_as::<_, (i64, bool)>(
            "SELECT last_value, is_called FROM urls_short_id_seq",
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(is_called.then_some(last_value))
    }
}

#[async_trait]
impl IdSequencer for PgSequencer {
    async fn next(&self) -> Result<i64, AppError> {
        // Sequence created implicitly by the BIGSERIAL column of `urls`.
        let id = sqlx::query_scalar::<_, i64>("SELECT nextval('urls_short_id_seq')")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(id)
    }
}
