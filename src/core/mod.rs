//! Core domain types for hangman
//!
//! Pure round state and counters with no knowledge of storage or display.

mod round;
mod stats;
mod word;

pub use round::{LetterOutcome, MAX_ATTEMPTS, Round};
pub use stats::Stats;
pub use word::{Word, WordError};
