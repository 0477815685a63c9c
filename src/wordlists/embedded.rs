// Seed vocabulary
//
// Written into an empty store on first run so a random word is always
// available. User-submitted words grow the set from here.

/// Default vocabulary for a freshly created store
pub const SEED: &[&str] = &["rust", "hangman", "gallows", "terminal", "keyboard"];

/// Number of words in SEED
pub const SEED_COUNT: usize = 5;
