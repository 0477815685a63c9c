//! TOML-file-backed word store
//!
//! The whole store is one file with a `words` array and a `[stats]` table.
//! The file is read once at open; every mutation rewrites it durably
//! (temp file + fsync + atomic rename), so a completed call is a committed
//! write.

use super::{AddOutcome, StoreError, WordStore};
use crate::core::{Stats, Word};
use crate::wordlists::SEED;
use rand::prelude::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// On-disk schema
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    words: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stats: Option<Stats>,
}

/// Durable store over a single TOML file
///
/// Opened once at startup; the value is the storage handle and drops at
/// process exit. A missing file is an empty store and is seeded with the
/// default vocabulary on open.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    words: Vec<Word>,
    stats: Option<Stats>,
}

impl FileStore {
    /// Open the store at `path`, creating and seeding it if absent
    ///
    /// # Errors
    /// `StoreError::Io` if the file cannot be read or written,
    /// `StoreError::Corrupt` if it exists but does not parse or holds an
    /// invalid word.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let parsed = if path.exists() {
            let content = fs::read_to_string(&path)?;
            toml::from_str::<StoreFile>(&content)
                .map_err(|e| StoreError::Corrupt(e.to_string()))?
        } else {
            StoreFile::default()
        };

        let mut words = Vec::with_capacity(parsed.words.len());
        for text in &parsed.words {
            let word = Word::new(text)
                .map_err(|e| StoreError::Corrupt(format!("word '{text}': {e}")))?;
            if !words.contains(&word) {
                words.push(word);
            }
        }

        let mut store = Self {
            path,
            words,
            stats: parsed.stats,
        };

        // First run: seed the vocabulary so selection can never come up empty
        if store.words.is_empty() {
            store.words = SEED
                .iter()
                .filter_map(|&text| Word::new(text).ok())
                .collect();
            store.persist()?;
        }

        Ok(store)
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of words currently held
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Rewrite the backing file: temp file, fsync, atomic rename
    fn persist(&self) -> Result<(), StoreError> {
        let snapshot = StoreFile {
            words: self.words.iter().map(|w| w.text().to_string()).collect(),
            stats: self.stats,
        };

        let content = toml::to_string_pretty(&snapshot)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;

        let tmp = self.path.with_extension("toml.tmp");
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(content.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;

        Ok(())
    }
}

impl WordStore for FileStore {
    fn select_random_word(&mut self) -> Result<Word, StoreError> {
        self.words
            .choose(&mut rand::rng())
            .cloned()
            .ok_or(StoreError::EmptyWordList)
    }

    fn add_word(&mut self, word: &Word) -> Result<AddOutcome, StoreError> {
        if self.words.contains(word) {
            return Ok(AddOutcome::DuplicateRejected);
        }

        self.words.push(word.clone());
        self.persist()?;
        Ok(AddOutcome::Added)
    }

    fn load_stats(&mut self) -> Result<Stats, StoreError> {
        match self.stats {
            Some(stats) => Ok(stats),
            None => {
                // Commit the zero record so later loads are stable
                let stats = Stats::default();
                self.stats = Some(stats);
                self.persist()?;
                Ok(stats)
            }
        }
    }

    fn save_stats(&mut self, stats: &Stats) -> Result<(), StoreError> {
        self.stats = Some(*stats);
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    static COUNTER: AtomicU32 = AtomicU32::new(0);

    /// Per-test unique path under the OS temp dir
    fn temp_store_path(tag: &str) -> PathBuf {
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!(
            "hangman-store-{tag}-{}-{n}.toml",
            std::process::id()
        ))
    }

    struct Cleanup(PathBuf);
    impl Drop for Cleanup {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }

    #[test]
    fn open_missing_file_seeds_vocabulary() {
        let path = temp_store_path("seed");
        let _cleanup = Cleanup(path.clone());

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.word_count(), SEED.len());
        assert!(path.exists(), "seeding should have committed the file");
    }

    #[test]
    fn words_survive_reopen() {
        let path = temp_store_path("words");
        let _cleanup = Cleanup(path.clone());

        {
            let mut store = FileStore::open(&path).unwrap();
            let word = Word::new("ferris").unwrap();
            assert_eq!(store.add_word(&word).unwrap(), AddOutcome::Added);
        }

        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(store.word_count(), SEED.len() + 1);
        let word = Word::new("ferris").unwrap();
        assert_eq!(
            store.add_word(&word).unwrap(),
            AddOutcome::DuplicateRejected
        );
    }

    #[test]
    fn stats_survive_reopen() {
        let path = temp_store_path("stats");
        let _cleanup = Cleanup(path.clone());

        {
            let mut store = FileStore::open(&path).unwrap();
            let mut stats = store.load_stats().unwrap();
            stats.record_win();
            stats.record_loss();
            store.save_stats(&stats).unwrap();
        }

        let mut store = FileStore::open(&path).unwrap();
        let stats = store.load_stats().unwrap();
        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.games_won, 1);
    }

    #[test]
    fn missing_stats_record_is_created_on_load() {
        let path = temp_store_path("zero");
        let _cleanup = Cleanup(path.clone());

        fs::write(&path, "words = [\"cat\"]\n").unwrap();

        {
            let mut store = FileStore::open(&path).unwrap();
            assert_eq!(store.load_stats().unwrap(), Stats::default());
        }

        // The zero record is now on disk
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("games_played = 0"));
        assert!(content.contains("games_won = 0"));
    }

    #[test]
    fn corrupt_file_is_rejected() {
        let path = temp_store_path("corrupt");
        let _cleanup = Cleanup(path.clone());

        fs::write(&path, "words = [\"not a word!\"").unwrap();
        assert!(matches!(
            FileStore::open(&path),
            Err(StoreError::Corrupt(_))
        ));
    }

    #[test]
    fn invalid_stored_word_is_rejected() {
        let path = temp_store_path("badword");
        let _cleanup = Cleanup(path.clone());

        fs::write(&path, "words = [\"cat\", \"n0pe\"]\n").unwrap();
        assert!(matches!(
            FileStore::open(&path),
            Err(StoreError::Corrupt(_))
        ));
    }

    #[test]
    fn won_round_survives_restart() {
        use crate::engine::GameEngine;

        let path = temp_store_path("restart");
        let _cleanup = Cleanup(path.clone());

        fs::write(&path, "words = [\"cat\"]\n").unwrap();

        {
            let store = FileStore::open(&path).unwrap();
            let mut engine = GameEngine::new(store).unwrap();
            for raw in ["c", "a", "t"] {
                engine.guess_letter(raw).unwrap();
            }
        }

        // Simulated restart: a fresh handle sees the incremented counters
        let mut store = FileStore::open(&path).unwrap();
        let stats = store.load_stats().unwrap();
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
    }

    #[test]
    fn selection_draws_from_stored_words() {
        let path = temp_store_path("select");
        let _cleanup = Cleanup(path.clone());

        fs::write(&path, "words = [\"cat\"]\n").unwrap();
        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(store.select_random_word().unwrap().text(), "cat");
    }
}
