//! Player actions and the action history.
//!
//! Every accepted input is recorded with the scheduler clock reading at
//! which it happened. Replaying the records against a controller built
//! from the same seed reproduces the session exactly.

use serde::{Deserialize, Serialize};

use super::level::Level;
use crate::cards::CardId;

/// An input driving the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Reveal a card.
    Flip(CardId),
    /// Redeal at the current level.
    NewGame,
    /// Redeal at a different level.
    ChangeLevel(Level),
}

/// An accepted action with its timing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: Action,

    /// Scheduler clock in milliseconds when the action was applied.
    pub at_ms: u64,

    /// Position in the session's history.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: Action, at_ms: u64, sequence: u32) -> Self {
        Self {
            action,
            at_ms,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_equality() {
        assert_eq!(Action::Flip(CardId::new(1)), Action::Flip(CardId::new(1)));
        assert_ne!(Action::Flip(CardId::new(1)), Action::Flip(CardId::new(2)));
        assert_ne!(Action::NewGame, Action::ChangeLevel(Level::FIRST));
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(Action::ChangeLevel(Level::new(3).unwrap()), 1500, 4);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
