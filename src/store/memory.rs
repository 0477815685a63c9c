//! In-memory word store
//!
//! Implements the full store contract over process memory. Used by tests as
//! the engine's store double; `saved_stats` exposes what a restart would
//! reload.

use super::{AddOutcome, StoreError, WordStore};
use crate::core::{Stats, Word};
use rand::prelude::IndexedRandom;

/// Volatile store: word set plus a single stats record
#[derive(Debug, Default)]
pub struct MemoryStore {
    words: Vec<Word>,
    saved: Option<Stats>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given words
    ///
    /// Invalid entries are skipped, mirroring how the file store treats
    /// seed data it cannot represent.
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| Word::new(w.as_ref()).ok())
            .collect();
        Self { words, saved: None }
    }

    /// Number of words currently held
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// The stats record as a restart would reload it
    #[must_use]
    pub fn saved_stats(&self) -> Option<Stats> {
        self.saved
    }
}

impl WordStore for MemoryStore {
    fn select_random_word(&mut self) -> Result<Word, StoreError> {
        self.words
            .choose(&mut rand::rng())
            .cloned()
            .ok_or(StoreError::EmptyWordList)
    }

    fn add_word(&mut self, word: &Word) -> Result<AddOutcome, StoreError> {
        if self.words.iter().any(|w| w == word) {
            Ok(AddOutcome::DuplicateRejected)
        } else {
            self.words.push(word.clone());
            Ok(AddOutcome::Added)
        }
    }

    fn load_stats(&mut self) -> Result<Stats, StoreError> {
        match self.saved {
            Some(stats) => Ok(stats),
            None => {
                let stats = Stats::default();
                self.saved = Some(stats);
                Ok(stats)
            }
        }
    }

    fn save_stats(&mut self, stats: &Stats) -> Result<(), StoreError> {
        self.saved = Some(*stats);
        Ok(())
    }
}
