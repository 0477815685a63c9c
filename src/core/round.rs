//! A single hangman round
//!
//! Tracks the secret word, the letters guessed so far, and the remaining
//! attempts. A round ends when every secret letter has been guessed (won)
//! or the attempt budget is exhausted (lost).

use super::word::Word;
use rustc_hash::FxHashSet;

/// Wrong guesses allowed per round
pub const MAX_ATTEMPTS: u8 = 6;

/// Mutable state of one play-through, from word selection to win or loss
///
/// Invariants after every `apply` call:
/// - `incorrect` is a subset of `guessed`
/// - `attempts_remaining == MAX_ATTEMPTS - incorrect.len()`
#[derive(Debug, Clone)]
pub struct Round {
    secret: Word,
    guessed: FxHashSet<u8>,
    incorrect: FxHashSet<u8>,
    attempts_remaining: u8,
}

/// Result of applying one letter to a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterOutcome {
    /// Letter was already guessed; round unchanged
    Repeat,
    /// Letter occurs in the secret word; `solved` when it was the last one
    Hit { solved: bool },
    /// Letter does not occur; `exhausted` when attempts just hit zero
    Miss { exhausted: bool },
}

impl Round {
    /// Start a fresh round for the given secret word
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            guessed: FxHashSet::default(),
            incorrect: FxHashSet::default(),
            attempts_remaining: MAX_ATTEMPTS,
        }
    }

    /// Apply a normalized lowercase letter to the round
    ///
    /// The caller validates input; this expects an ASCII lowercase byte.
    pub fn apply(&mut self, letter: u8) -> LetterOutcome {
        debug_assert!(letter.is_ascii_lowercase());
        debug_assert!(self.attempts_remaining > 0, "round already over");

        if !self.guessed.insert(letter) {
            return LetterOutcome::Repeat;
        }

        if self.secret.has_letter(letter) {
            LetterOutcome::Hit {
                solved: self.is_solved(),
            }
        } else {
            self.incorrect.insert(letter);
            self.attempts_remaining -= 1;
            LetterOutcome::Miss {
                exhausted: self.attempts_remaining == 0,
            }
        }
    }

    /// True once every letter of the secret word has been guessed
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.secret
            .letters()
            .iter()
            .all(|letter| self.guessed.contains(letter))
    }

    /// Whether a given letter has been guessed this round
    #[must_use]
    pub fn is_guessed(&self, letter: u8) -> bool {
        self.guessed.contains(&letter)
    }

    /// Display form of the secret word: guessed letters shown, the rest
    /// replaced by `_`, space-separated in original order
    #[must_use]
    pub fn masked(&self) -> String {
        let cells: Vec<String> = self
            .secret
            .bytes()
            .map(|b| {
                if self.guessed.contains(&b) {
                    (b as char).to_string()
                } else {
                    "_".to_string()
                }
            })
            .collect();
        cells.join(" ")
    }

    /// Wrong guesses left before the round is lost
    #[inline]
    #[must_use]
    pub fn attempts_remaining(&self) -> u8 {
        self.attempts_remaining
    }

    /// Incorrect guesses so far, sorted for stable display
    #[must_use]
    pub fn incorrect_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.incorrect.iter().map(|&b| b as char).collect();
        letters.sort_unstable();
        letters
    }

    /// Number of incorrect guesses so far
    #[must_use]
    pub fn incorrect_count(&self) -> usize {
        self.incorrect.len()
    }

    /// The secret word (revealed on round end)
    #[inline]
    #[must_use]
    pub fn secret(&self) -> &Word {
        &self.secret
    }

    #[cfg(test)]
    pub(crate) fn invariants_hold(&self) -> bool {
        self.incorrect.is_subset(&self.guessed)
            && usize::from(MAX_ATTEMPTS - self.attempts_remaining) == self.incorrect.len()
    }
}
