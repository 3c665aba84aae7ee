//! Core engine types: levels, state, actions, RNG, configuration, errors.

pub mod action;
pub mod config;
pub mod error;
pub mod level;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::MemoryConfig;
pub use error::{MemoryError, Result};
pub use level::Level;
pub use rng::GameRng;
pub use state::{FlippedCards, GameState};
