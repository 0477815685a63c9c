//! Hangman
//!
//! A single-player word-guessing game with a terminal front end and a small
//! persistent store for the word list and cumulative win/loss statistics.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::engine::{GameEngine, GuessOutcome};
//! use hangman::store::MemoryStore;
//!
//! let store = MemoryStore::with_words(["cat"]);
//! let mut engine = GameEngine::new(store).unwrap();
//!
//! assert_eq!(engine.guess_letter("c").unwrap(), GuessOutcome::Hit('c'));
//! assert_eq!(engine.render_state().masked_word, "c _ _");
//! ```

// Core domain types
pub mod core;

// Game engine
pub mod engine;

// Persistence
pub mod store;

// Seed vocabulary
pub mod wordlists;

// Command implementations
pub mod commands;

// Interactive TUI interface
pub mod interactive;
