//! Short id sequencer implementations.
//!
//! - [`PgSequencer`] - PostgreSQL sequence, shared by every process using the database
//! - [`AtomicSequencer`] - In-process atomic counter paired with the memory store

mod atomic_sequencer;
mod pg_sequencer;

pub use atomic_sequencer::AtomicSequencer;
pub use pg_sequencer::PgSequencer;
