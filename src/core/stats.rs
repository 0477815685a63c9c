//! Cumulative win/loss statistics
//!
//! Counters survive across rounds and restarts; the store persists them
//! after every completed round.

use serde::{Deserialize, Serialize};

/// Games-played/games-won counters
///
/// `games_won <= games_played` holds because wins increment both counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub games_played: u32,
    pub games_won: u32,
}

impl Stats {
    /// Record a completed, won round
    pub fn record_win(&mut self) {
        self.games_played += 1;
        self.games_won += 1;
    }

    /// Record a completed, lost round
    pub fn record_loss(&mut self) {
        self.games_played += 1;
    }

    /// Win percentage for display, 0.0 when no games have been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.games_won) / f64::from(self.games_played) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zeroed() {
        let stats = Stats::default();
        assert_eq!(stats.games_played, 0);
        assert_eq!(stats.games_won, 0);
        assert!((stats.win_rate() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn win_increments_both_counters() {
        let mut stats = Stats::default();
        stats.record_win();
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
    }

    #[test]
    fn loss_increments_played_only() {
        let mut stats = Stats::default();
        stats.record_loss();
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 0);
    }

    #[test]
    fn won_never_exceeds_played() {
        let mut stats = Stats::default();
        stats.record_win();
        stats.record_loss();
        stats.record_win();
        assert!(stats.games_won <= stats.games_played);
        assert!((stats.win_rate() - 200.0 / 3.0).abs() < 1e-9);
    }
}
