//! Game engine
//!
//! Round transitions, guess evaluation, and stats bookkeeping over an
//! injected word store.

mod game;

pub use game::{AddWordOutcome, GameEngine, GuessOutcome, RenderState};
