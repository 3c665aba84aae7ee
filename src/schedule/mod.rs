//! Deferred task scheduling.
//!
//! Timed transitions (the pause before a flipped pair resolves, the short
//! wait before the success cue) are queued here as tasks on a virtual
//! clock. The owner advances the clock explicitly, so tests drive time
//! by hand and front ends map it to wall time.
//!
//! Each task carries a [`CancelToken`]. Resetting a game cancels every
//! in-flight task, so a stale resolution can never land on a new deck.

mod scheduler;
mod token;

pub use scheduler::{Scheduler, TaskHandle, TaskId};
pub use token::CancelToken;
