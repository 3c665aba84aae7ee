//! Difficulty level.

use serde::{Deserialize, Serialize};

use super::error::{MemoryError, Result};

/// Difficulty tier controlling how many pairs a deck holds.
///
/// Always ≥ 1. There is no upper bound: the deck generator's pair cap
/// absorbs arbitrarily high levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Level(u32);

impl Level {
    /// The starting level.
    pub const FIRST: Level = Level(1);

    /// Create a level, rejecting 0.
    pub fn new(level: u32) -> Result<Self> {
        if level == 0 {
            return Err(MemoryError::InvalidLevel(level));
        }
        Ok(Self(level))
    }

    /// Get the raw level value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// The level after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<u32> for Level {
    type Error = MemoryError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Level> for u32 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Level {}", self.0)
    }
}
