//! Progress and accuracy figures for display.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Level};

/// Scoreboard derived from a `GameState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub level: Level,
    pub moves: u32,
    pub matched_pairs: usize,
    pub total_pairs: usize,
    pub game_complete: bool,
}

impl GameStats {
    /// Read the figures off a state.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        Self {
            level: state.level(),
            moves: state.moves(),
            matched_pairs: state.matched_pairs(),
            total_pairs: state.total_pairs(),
            game_complete: state.game_complete(),
        }
    }

    /// Share of pairs found, 0.0–100.0. An empty deck reports 0.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.total_pairs == 0 {
            return 0.0;
        }
        self.matched_pairs as f64 / self.total_pairs as f64 * 100.0
    }

    /// Matched pairs per move as a rounded percentage. 0 before the first move.
    ///
    /// A move needs two flips and a pair can only match once, so this never
    /// exceeds 100.
    #[must_use]
    pub fn accuracy_percent(&self) -> u32 {
        if self.moves == 0 {
            return 0;
        }
        (self.matched_pairs as f64 / f64::from(self.moves) * 100.0).round() as u32
    }

    /// Completion message, e.g. "You completed Level 2 in 9 moves with 67% accuracy!".
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "You completed {} in {} moves with {}% accuracy!",
            self.level,
            self.moves,
            self.accuracy_percent()
        )
    }
}

impl std::fmt::Display for GameStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | found {}/{} | moves {} | accuracy {}%",
            self.level,
            self.matched_pairs,
            self.total_pairs,
            self.moves,
            self.accuracy_percent()
        )
    }
}
