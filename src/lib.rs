//! # emotion-memory
//!
//! Game-state engine for a memory matching game that teaches children to
//! recognize emotions. Players flip face-down cards two at a time looking
//! for pairs that show the same emotion.
//!
//! ## Design Principles
//!
//! 1. **Single Writer**: `GameController` is the only code that mutates
//!    `GameState`. Renderers read O(1) snapshots.
//!
//! 2. **Deterministic**: All randomness flows from a seeded `GameRng`, and
//!    all timing runs on a virtual clock. Same seed, same inputs, same
//!    clock advances: same game.
//!
//! 3. **No Fatal Gameplay Errors**: Bad flips are silent no-ops. Only
//!    configuration and level parsing can fail.
//!
//! ## Modules
//!
//! - `core`: Levels, state, actions, RNG, configuration, errors
//! - `cards`: Emotions, catalog, cards, deck generation
//! - `rules`: Match evaluation
//! - `schedule`: Deferred tasks with cancellation
//! - `notify`: Notification sinks (audio cues and friends)
//! - `game`: The controller and scoreboard
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use emotion_memory::{GameControllerBuilder, FlipOutcome, RecordingSink};
//!
//! let mut game = GameControllerBuilder::new().seed(42).build(RecordingSink::new()).unwrap();
//!
//! let first = game.state().cards()[0].clone();
//! let partner = game
//!     .state()
//!     .cards()
//!     .iter()
//!     .find(|c| c.id != first.id && c.label() == first.label())
//!     .map(|c| c.id)
//!     .unwrap();
//!
//! game.flip(first.id);
//! assert_eq!(game.flip(partner), FlipOutcome::PairPending { matched: true });
//!
//! game.advance(Duration::from_millis(1500));
//! assert_eq!(game.state().matched_pairs(), 1);
//! ```

pub mod cards;
pub mod core;
pub mod game;
pub mod notify;
pub mod rules;
pub mod schedule;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, GameRng, GameState, Level, MemoryConfig, MemoryError, Result,
};

pub use crate::cards::{Card, CardId, DeckGenerator, Emotion, EmotionCatalog, LevelSummary};

pub use crate::rules::is_match;

pub use crate::schedule::{CancelToken, Scheduler, TaskHandle, TaskId};

pub use crate::notify::{Notification, NotificationSink, NullSink, RecordingSink};

pub use crate::game::{
    FlipOutcome, GameController, GameControllerBuilder, GameStats, IgnoreReason, Phase,
};
