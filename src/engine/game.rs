//! Game engine: round transitions and stats bookkeeping
//!
//! The engine owns the active round and the cumulative stats, and holds the
//! injected word store for selection, insertion, and stat persistence. It
//! knows nothing about how state is displayed: front ends send the two user
//! events (`guess_letter`, `submit_new_word`) and paint the returned
//! snapshots and outcomes.

use crate::core::{LetterOutcome, Round, Stats, Word};
use crate::store::{AddOutcome, StoreError, WordStore};

/// Structured result of a letter guess, for the display to translate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Input was not exactly one alphabetic character; nothing changed
    InvalidInput,
    /// Letter was guessed earlier this round; nothing changed
    AlreadyGuessed(char),
    /// Letter occurs in the secret word; round continues
    Hit(char),
    /// Letter does not occur; round continues
    Miss { attempts_remaining: u8 },
    /// Guess completed the word; stats persisted, next round already started
    RoundWon { word: Word },
    /// Guess used the last attempt; stats persisted, next round already
    /// started, `word` reveals the secret
    RoundLost { word: Word },
}

/// Structured result of a vocabulary submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddWordOutcome {
    /// Candidate was empty or not purely alphabetic; word set untouched
    InvalidInput,
    Added,
    DuplicateRejected,
}

/// Render-ready snapshot of the engine's state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderState {
    /// Secret word with unguessed letters hidden, space-separated
    pub masked_word: String,
    pub attempts_remaining: u8,
    /// Wrong guesses so far, sorted
    pub incorrect_letters: Vec<char>,
    pub stats: Stats,
}

/// Owns the active round and win/loss counters; stores nothing itself
///
/// The store is injected at construction, so tests run against
/// [`MemoryStore`](crate::store::MemoryStore) and the binary against
/// [`FileStore`](crate::store::FileStore).
pub struct GameEngine<S: WordStore> {
    store: S,
    round: Round,
    stats: Stats,
}

impl<S: WordStore> GameEngine<S> {
    /// Build an engine with a freshly selected word and loaded stats
    ///
    /// # Errors
    /// `StoreError::EmptyWordList` if the store has no words, or any
    /// persistence failure from loading stats.
    pub fn new(mut store: S) -> Result<Self, StoreError> {
        let stats = store.load_stats()?;
        let secret = store.select_random_word()?;
        Ok(Self {
            store,
            round: Round::new(secret),
            stats,
        })
    }

    /// Discard the current round and select a fresh word
    ///
    /// # Errors
    /// Propagates word selection failures.
    pub fn start_round(&mut self) -> Result<(), StoreError> {
        let secret = self.store.select_random_word()?;
        self.round = Round::new(secret);
        Ok(())
    }

    /// Snapshot for the display to paint
    #[must_use]
    pub fn render_state(&self) -> RenderState {
        RenderState {
            masked_word: self.round.masked(),
            attempts_remaining: self.round.attempts_remaining(),
            incorrect_letters: self.round.incorrect_letters(),
            stats: self.stats,
        }
    }

    /// Handle the display's guess event
    ///
    /// Raw input is trimmed and lowercased; anything but a single
    /// alphabetic character is rejected before it reaches the round.
    /// A won or lost round persists stats and auto-starts the next round
    /// before this returns.
    ///
    /// # Errors
    /// Persistence failures (saving stats, selecting the next word) are
    /// fatal and propagate; all playable results are `GuessOutcome`s.
    pub fn guess_letter(&mut self, raw: &str) -> Result<GuessOutcome, StoreError> {
        let normalized = raw.trim().to_lowercase();
        let mut bytes = normalized.bytes();
        let letter = match (bytes.next(), bytes.next()) {
            (Some(b), None) if b.is_ascii_lowercase() => b,
            _ => return Ok(GuessOutcome::InvalidInput),
        };

        match self.round.apply(letter) {
            LetterOutcome::Repeat => Ok(GuessOutcome::AlreadyGuessed(letter as char)),
            LetterOutcome::Hit { solved: false } => Ok(GuessOutcome::Hit(letter as char)),
            LetterOutcome::Hit { solved: true } => {
                let word = self.round.secret().clone();
                self.stats.record_win();
                self.store.save_stats(&self.stats)?;
                self.start_round()?;
                Ok(GuessOutcome::RoundWon { word })
            }
            LetterOutcome::Miss { exhausted: false } => Ok(GuessOutcome::Miss {
                attempts_remaining: self.round.attempts_remaining(),
            }),
            LetterOutcome::Miss { exhausted: true } => {
                let word = self.round.secret().clone();
                self.stats.record_loss();
                self.store.save_stats(&self.stats)?;
                self.start_round()?;
                Ok(GuessOutcome::RoundLost { word })
            }
        }
    }

    /// Handle the display's new-word event; the active round is untouched
    ///
    /// # Errors
    /// Propagates persistence failures from the store.
    pub fn submit_new_word(&mut self, raw: &str) -> Result<AddWordOutcome, StoreError> {
        let Ok(word) = Word::new(raw) else {
            return Ok(AddWordOutcome::InvalidInput);
        };

        match self.store.add_word(&word)? {
            AddOutcome::Added => Ok(AddWordOutcome::Added),
            AddOutcome::DuplicateRejected => Ok(AddWordOutcome::DuplicateRejected),
        }
    }

    /// Current cumulative stats
    #[must_use]
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Access to the injected store (read-only)
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_ATTEMPTS;
    use crate::store::MemoryStore;

    /// Engine over a single-word store, so every round's secret is known
    fn engine(secret: &str) -> GameEngine<MemoryStore> {
        GameEngine::new(MemoryStore::with_words([secret])).unwrap()
    }

    #[test]
    fn construction_starts_in_progress() {
        let engine = engine("cat");
        let state = engine.render_state();
        assert_eq!(state.masked_word, "_ _ _");
        assert_eq!(state.attempts_remaining, MAX_ATTEMPTS);
        assert_eq!(state.stats, Stats::default());
    }

    #[test]
    fn construction_fails_on_empty_store() {
        assert!(matches!(
            GameEngine::new(MemoryStore::new()),
            Err(StoreError::EmptyWordList)
        ));
    }

    #[test]
    fn invalid_guesses_change_nothing() {
        let mut engine = engine("cat");

        for raw in ["", "ab", "7", "!", "  ", "ca t"] {
            assert_eq!(engine.guess_letter(raw).unwrap(), GuessOutcome::InvalidInput);
        }

        let state = engine.render_state();
        assert_eq!(state.masked_word, "_ _ _");
        assert_eq!(state.attempts_remaining, MAX_ATTEMPTS);
    }

    #[test]
    fn guess_input_is_normalized() {
        let mut engine = engine("cat");
        // Uppercase and surrounding whitespace are accepted
        assert_eq!(engine.guess_letter(" C ").unwrap(), GuessOutcome::Hit('c'));
        assert_eq!(engine.render_state().masked_word, "c _ _");
    }

    #[test]
    fn repeated_guess_is_reported_without_state_change() {
        let mut engine = engine("cat");

        assert_eq!(
            engine.guess_letter("z").unwrap(),
            GuessOutcome::Miss {
                attempts_remaining: MAX_ATTEMPTS - 1
            }
        );
        assert_eq!(
            engine.guess_letter("z").unwrap(),
            GuessOutcome::AlreadyGuessed('z')
        );
        assert_eq!(engine.render_state().attempts_remaining, MAX_ATTEMPTS - 1);

        assert_eq!(engine.guess_letter("c").unwrap(), GuessOutcome::Hit('c'));
        assert_eq!(
            engine.guess_letter("c").unwrap(),
            GuessOutcome::AlreadyGuessed('c')
        );
        assert_eq!(engine.render_state().attempts_remaining, MAX_ATTEMPTS - 1);
    }

    #[test]
    fn winning_round_updates_stats_and_restarts() {
        let mut engine = engine("cat");

        assert_eq!(engine.guess_letter("c").unwrap(), GuessOutcome::Hit('c'));
        assert_eq!(engine.guess_letter("a").unwrap(), GuessOutcome::Hit('a'));

        let outcome = engine.guess_letter("t").unwrap();
        let GuessOutcome::RoundWon { word } = outcome else {
            panic!("expected RoundWon, got {outcome:?}");
        };
        assert_eq!(word.text(), "cat");

        let state = engine.render_state();
        assert_eq!(state.stats.games_played, 1);
        assert_eq!(state.stats.games_won, 1);
        // Auto-advanced to a fresh round
        assert_eq!(state.masked_word, "_ _ _");
        assert_eq!(state.attempts_remaining, MAX_ATTEMPTS);

        // Stats were persisted, not just held in memory
        assert_eq!(engine.store().saved_stats().unwrap().games_won, 1);
    }

    #[test]
    fn six_misses_lose_the_round() {
        let mut engine = engine("cat");

        for (i, raw) in ["x", "y", "z", "q", "w"].iter().enumerate() {
            assert_eq!(
                engine.guess_letter(raw).unwrap(),
                GuessOutcome::Miss {
                    attempts_remaining: MAX_ATTEMPTS - 1 - i as u8
                }
            );
        }

        let outcome = engine.guess_letter("v").unwrap();
        let GuessOutcome::RoundLost { word } = outcome else {
            panic!("expected RoundLost, got {outcome:?}");
        };
        assert_eq!(word.text(), "cat");

        let state = engine.render_state();
        assert_eq!(state.stats.games_played, 1);
        assert_eq!(state.stats.games_won, 0);
        assert_eq!(state.attempts_remaining, MAX_ATTEMPTS);
        assert_eq!(engine.store().saved_stats().unwrap().games_played, 1);
    }

    #[test]
    fn render_state_tracks_incorrect_letters() {
        let mut engine = engine("cat");
        engine.guess_letter("z").unwrap();
        engine.guess_letter("b").unwrap();
        engine.guess_letter("a").unwrap();

        let state = engine.render_state();
        assert_eq!(state.incorrect_letters, vec!['b', 'z']);
        assert_eq!(state.masked_word, "_ a _");
    }

    #[test]
    fn add_word_validates_before_store() {
        let mut engine = engine("cat");
        let before = engine.store().word_count();

        assert_eq!(
            engine.submit_new_word("123").unwrap(),
            AddWordOutcome::InvalidInput
        );
        assert_eq!(
            engine.submit_new_word("").unwrap(),
            AddWordOutcome::InvalidInput
        );
        assert_eq!(engine.store().word_count(), before);
    }

    #[test]
    fn add_word_reports_duplicates() {
        let mut engine = engine("hangman");
        let before = engine.store().word_count();

        assert_eq!(
            engine.submit_new_word("hangman").unwrap(),
            AddWordOutcome::DuplicateRejected
        );
        assert_eq!(engine.store().word_count(), before);

        assert_eq!(
            engine.submit_new_word("Gallows").unwrap(),
            AddWordOutcome::Added
        );
        assert_eq!(engine.store().word_count(), before + 1);
    }

    #[test]
    fn add_word_leaves_round_alone() {
        let mut engine = engine("cat");
        engine.guess_letter("c").unwrap();
        engine.guess_letter("z").unwrap();
        let before = engine.render_state();

        engine.submit_new_word("gallows").unwrap();
        assert_eq!(engine.render_state(), before);
    }

    #[test]
    fn stats_accumulate_across_rounds() {
        let mut engine = engine("cat");

        // Win one round, lose the next
        for raw in ["c", "a", "t"] {
            engine.guess_letter(raw).unwrap();
        }
        for raw in ["x", "y", "z", "q", "w", "v"] {
            engine.guess_letter(raw).unwrap();
        }

        let stats = engine.stats();
        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.games_won, 1);
        assert_eq!(engine.store().saved_stats(), Some(stats));
    }
}
