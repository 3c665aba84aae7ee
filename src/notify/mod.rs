//! Notification sinks.
//!
//! The controller reports four cues: a card flipped, a pair matched, a
//! pair missed, the game finished. Sinks turn them into sound, text, or
//! nothing at all. They are fire-and-forget: a sink cannot influence the
//! game, and the controller shields itself from a sink that panics.

mod sink;

pub use sink::{Notification, NotificationSink, NullSink, RecordingSink};
