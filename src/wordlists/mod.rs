//! Seed word list
//!
//! Provides the embedded default vocabulary used to seed an empty store.

mod embedded;

pub use embedded::{SEED, SEED_COUNT};
