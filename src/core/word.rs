//! Hangman word representation
//!
//! A Word stores a lowercase alphabetic word along with its letter set for
//! fast membership checks during guess evaluation.

use rustc_hash::FxHashSet;
use std::fmt;

/// A vocabulary word: non-empty, ASCII alphabetic, stored lowercase
///
/// Input is normalized to lowercase before validation, so `"Rust"` and
/// `"rust"` construct the same Word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: FxHashSet<u8>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word must contain only alphabetic characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if the input (after trimming and lowercasing) is
    /// empty, non-ASCII, or contains anything but alphabetic characters.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Word;
    ///
    /// let word = Word::new("Gallows").unwrap();
    /// assert_eq!(word.text(), "gallows");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("h4ngman").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letters: FxHashSet<u8> = text.bytes().collect();

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: validation rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }

    /// The set of distinct letters in the word
    #[inline]
    pub(crate) fn letters(&self) -> &FxHashSet<u8> {
        &self.letters
    }

    /// Iterate over the word's letters in original order
    #[inline]
    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.text.bytes()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
