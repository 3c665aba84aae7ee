//! Game controller and scoreboard.
//!
//! `GameController` owns the `GameState`, accepts player input, runs the
//! timed resolution of flipped pairs and reports cues to a
//! `NotificationSink`. `GameStats` turns a state into display figures.

mod controller;
mod stats;

pub use controller::{FlipOutcome, GameController, GameControllerBuilder, IgnoreReason, Phase};
pub use stats::GameStats;
