//! Notification types and the built-in sinks.

use serde::{Deserialize, Serialize};

/// A cue emitted by the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Notification {
    /// A card was turned face-up.
    Flip,
    /// A pending pair resolved as a match.
    Match,
    /// A pending pair resolved as a miss and flipped back.
    NoMatch,
    /// Every pair has been found.
    GameComplete,
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Notification::Flip => "flip",
            Notification::Match => "match",
            Notification::NoMatch => "no-match",
            Notification::GameComplete => "game-complete",
        };
        f.write_str(name)
    }
}

/// Receiver of game cues.
///
/// Every method defaults to doing nothing; implement the ones you care
/// about. [`notify`](Self::notify) dispatches to them and is what the
/// controller calls.
pub trait NotificationSink {
    /// A card was flipped.
    fn on_flip(&mut self) {}

    /// A pair matched.
    fn on_match(&mut self) {}

    /// A pair did not match.
    fn on_no_match(&mut self) {}

    /// The game was completed.
    fn on_game_complete(&mut self) {}

    /// Dispatch a notification to the matching handler.
    fn notify(&mut self, notification: Notification) {
        match notification {
            Notification::Flip => self.on_flip(),
            Notification::Match => self.on_match(),
            Notification::NoMatch => self.on_no_match(),
            Notification::GameComplete => self.on_game_complete(),
        }
    }
}

impl<S: NotificationSink + ?Sized> NotificationSink for Box<S> {
    fn notify(&mut self, notification: Notification) {
        (**self).notify(notification);
    }
}

/// Discards every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {}

/// Keeps every notification in order. Handy for tests and replays.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingSink {
    received: Vec<Notification>,
}

impl RecordingSink {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything received so far.
    #[must_use]
    pub fn received(&self) -> &[Notification] {
        &self.received
    }

    /// How many times `notification` was received.
    #[must_use]
    pub fn count(&self, notification: Notification) -> usize {
        self.received.iter().filter(|&&n| n == notification).count()
    }

    /// Forget everything received.
    pub fn clear(&mut self) {
        self.received.clear();
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&mut self, notification: Notification) {
        self.received.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        flips: u32,
        matches: u32,
        misses: u32,
        wins: u32,
    }

    impl NotificationSink for Counter {
        fn on_flip(&mut self) {
            self.flips += 1;
        }
        fn on_match(&mut self) {
            self.matches += 1;
        }
        fn on_no_match(&mut self) {
            self.misses += 1;
        }
        fn on_game_complete(&mut self) {
            self.wins += 1;
        }
    }

    #[test]
    fn test_default_dispatch() {
        let mut counter = Counter::default();
        counter.notify(Notification::Flip);
        counter.notify(Notification::Flip);
        counter.notify(Notification::Match);
        counter.notify(Notification::NoMatch);
        counter.notify(Notification::GameComplete);

        assert_eq!(counter.flips, 2);
        assert_eq!(counter.matches, 1);
        assert_eq!(counter.misses, 1);
        assert_eq!(counter.wins, 1);
    }

    #[test]
    fn test_recording_sink() {
        let mut sink = RecordingSink::new();
        sink.notify(Notification::Flip);
        sink.notify(Notification::NoMatch);

        assert_eq!(sink.received(), &[Notification::Flip, Notification::NoMatch]);
        assert_eq!(sink.count(Notification::Flip), 1);
        assert_eq!(sink.count(Notification::Match), 0);

        sink.clear();
        assert!(sink.received().is_empty());
    }

    #[test]
    fn test_boxed_sink_forwards() {
        let mut boxed = Box::new(Counter::default());
        boxed.notify(Notification::Match);
        boxed.notify(Notification::GameComplete);
        assert_eq!(boxed.matches, 1);
        assert_eq!(boxed.wins, 1);

        NullSink.notify(Notification::Flip);
    }

    #[test]
    fn test_display() {
        assert_eq!(Notification::NoMatch.to_string(), "no-match");
        assert_eq!(Notification::GameComplete.to_string(), "game-complete");
    }
}
