//! Interactive TUI interface
//!
//! The "Display": renders engine snapshots and forwards the two user
//! events (guess a letter, submit a new word).

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
