//! Word and statistics persistence
//!
//! The engine talks to storage only through the [`WordStore`] trait: pick a
//! random word, add a word, load and save stats. [`FileStore`] is the real
//! TOML-file-backed implementation; [`MemoryStore`] serves tests and any
//! embedding that does not want a file on disk.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::core::{Stats, Word};
use std::fmt;
use std::io;

/// Result of inserting a word into the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// The word was already present; the set is unchanged
    DuplicateRejected,
}

/// Error type for store operations
#[derive(Debug)]
pub enum StoreError {
    /// No words available for selection; unreachable once seeded
    EmptyWordList,
    Io(io::Error),
    /// The persisted file exists but cannot be interpreted
    Corrupt(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "Word list is empty"),
            Self::Io(e) => write!(f, "Store I/O error: {e}"),
            Self::Corrupt(detail) => write!(f, "Store file is corrupt: {detail}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Persistence capabilities the game engine depends on
///
/// Operations are synchronous and atomic from the engine's point of view:
/// each call either fully completes or fails without a partial write.
pub trait WordStore {
    /// Uniform-random choice over the current word set
    ///
    /// # Errors
    /// `StoreError::EmptyWordList` if no words exist.
    fn select_random_word(&mut self) -> Result<Word, StoreError>;

    /// Insert a word; idempotent, duplicates are reported not stored
    ///
    /// # Errors
    /// Propagates persistence failures.
    fn add_word(&mut self, word: &Word) -> Result<AddOutcome, StoreError>;

    /// Load persisted stats, creating and persisting a zero record if
    /// none exists so subsequent loads are stable
    ///
    /// # Errors
    /// Propagates persistence failures.
    fn load_stats(&mut self) -> Result<Stats, StoreError>;

    /// Overwrite the single persisted stats record, durably
    ///
    /// # Errors
    /// Propagates persistence failures; the write is not retried.
    fn save_stats(&mut self, stats: &Stats) -> Result<(), StoreError>;
}
