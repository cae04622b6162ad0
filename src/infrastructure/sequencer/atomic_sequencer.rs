//! In-process id allocation.

use async_trait::async_trait;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::sequencer::IdSequencer;
use crate::error::AppError;

/// A sequential id allocator using an atomic counter.
///
/// Ids start at 1 (or just above the given offset) and are unique within a
/// single instance. Not suitable when several processes share one store.
#[derive(Debug)]
pub struct AtomicSequencer {
    counter: AtomicI64,
}

impl AtomicSequencer {
    /// Creates a sequencer whose first id is 1.
    pub fn new() -> Self {
        Self::with_offset(0)
    }

    /// Creates a sequencer whose first id is `last_issued + 1`.
    ///
    /// Useful for resuming from a known state.
    pub fn with_offset(last_issued: i64) -> Self {
        Self {
            counter: AtomicI64::new(last_issued),
        }
    }

    /// Returns the last id handed out, or 0 if none.
    pub fn last_issued(&self) -> i64 {
        self.counter.load(Ordering::SeqCst)
    }
}

impl Default for AtomicSequencer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdSequencer for AtomicSequencer {
    async fn next(&self) -> Result<i64, AppError> {
        Ok(self.counter.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_sequencer_starts_at_one() {
        let sequencer = AtomicSequencer::new();

        assert_eq!(sequencer.next().await.unwrap(), 1);
        assert_eq!(sequencer.next().await.unwrap(), 2);
        assert_eq!(sequencer.next().await.unwrap(), 3);
        assert_eq!(sequencer.last_issued(), 3);
    }

    #[tokio::test]
    async fn test_sequencer_with_offset() {
        let sequencer = AtomicSequencer::with_offset(1000);

        assert_eq!(sequencer.next().await.unwrap(), 1001);
        assert_eq!(sequencer.next().await.unwrap(), 1002);
    }

    #[test]
    fn test_sequencer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AtomicSequencer>();
    }

    #[tokio::test]
    async fn test_concurrent_callers_get_distinct_ids() {
        let sequencer = Arc::new(AtomicSequencer::new());
        let mut handles = vec![];

        for _ in 0..100 {
            let sequencer = Arc::clone(&sequencer);
            handles.push(tokio::spawn(async move { sequencer.next().await.unwrap() }));
        }

        let mut ids = HashSet::new();
        for handle in handles {
            assert!(ids.insert(handle.await.unwrap()));
        }

        assert_eq!(ids.len(), 100);
        assert_eq!(ids.iter().copied().max(), Some(100));
        assert_eq!(ids.iter().copied().min(), Some(1));
    }
}
