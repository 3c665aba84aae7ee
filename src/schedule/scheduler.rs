//! Virtual-clock task queue.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::token::CancelToken;

/// Identifier of a scheduled task, unique per scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u64);

/// Returned by [`Scheduler::schedule`].
#[derive(Clone, Debug)]
pub struct TaskHandle {
    /// The task's id.
    pub id: TaskId,
    /// Clock reading at which the task fires.
    pub due: Duration,
    /// Cancels this task when triggered.
    pub token: CancelToken,
}

struct Entry<T> {
    due: Duration,
    id: TaskId,
    token: CancelToken,
    payload: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.id == other.id
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    // Reversed: BinaryHeap is a max-heap, we want the earliest task on top.
    fn cmp(&self, other: &Self) -> Ordering {
        (other.due, other.id).cmp(&(self.due, self.id))
    }
}

/// Deferred tasks ordered on a virtual clock.
///
/// The clock only moves when the owner says so, which keeps every timed
/// transition deterministic. Tasks fire in deadline order; tasks with the
/// same deadline fire in the order they were scheduled.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use emotion_memory::schedule::Scheduler;
///
/// let mut scheduler = Scheduler::new();
/// scheduler.schedule(Duration::from_millis(500), "late");
/// let early = scheduler.schedule(Duration::from_millis(100), "early");
/// early.token.cancel();
///
/// let until = scheduler.now() + Duration::from_millis(1000);
/// assert_eq!(scheduler.pop_due(until), Some("late"));
/// assert_eq!(scheduler.now(), Duration::from_millis(500));
/// assert_eq!(scheduler.pop_due(until), None);
/// ```
pub struct Scheduler<T> {
    now: Duration,
    next_id: u64,
    queue: BinaryHeap<Entry<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            queue: BinaryHeap::new(),
        }
    }
}

impl<T> Scheduler<T> {
    /// Create an empty scheduler with the clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock reading.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `payload` to fire `delay` from now.
    pub fn schedule(&mut self, delay: Duration, payload: T) -> TaskHandle {
        let id = TaskId(self.next_id);
        self.next_id += 1;

        let due = self.now.saturating_add(delay);
        let token = CancelToken::new();
        self.queue.push(Entry {
            due,
            id,
            token: token.clone(),
            payload,
        });

        debug!(task = id.0, due_ms = due.as_millis() as u64, "scheduled task");
        TaskHandle { id, due, token }
    }

    /// Cancel every pending task. Returns how many were still live.
    pub fn cancel_all(&mut self) -> usize {
        let live = self.pending();
        for entry in self.queue.drain() {
            entry.token.cancel();
        }
        if live > 0 {
            debug!(cancelled = live, "cancelled pending tasks");
        }
        live
    }

    /// Number of live (not cancelled) tasks.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue
            .iter()
            .filter(|entry| !entry.token.is_cancelled())
            .count()
    }

    /// Deadline of the earliest live task.
    pub fn next_deadline(&mut self) -> Option<Duration> {
        self.prune();
        self.queue.peek().map(|entry| entry.due)
    }

    /// Pop the earliest live task due at or before `until`.
    ///
    /// Moves the clock to the task's deadline, so work done while handling
    /// the payload (including scheduling follow-ups) happens at that time.
    pub fn pop_due(&mut self, until: Duration) -> Option<T> {
        self.prune();
        if self.queue.peek()?.due > until {
            return None;
        }
        let entry = self.queue.pop()?;
        self.now = self.now.max(entry.due);
        Some(entry.payload)
    }

    /// Move the clock forward to `until` without firing anything.
    ///
    /// The clock never runs backwards.
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    fn prune(&mut self) {
        while self
            .queue
            .peek()
            .is_some_and(|entry| entry.token.is_cancelled())
        {
            self.queue.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_fires_in_deadline_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(300), 'c');
        scheduler.schedule(ms(100), 'a');
        scheduler.schedule(ms(200), 'b');

        let fired: Vec<_> = std::iter::from_fn(|| scheduler.pop_due(ms(1000))).collect();
        assert_eq!(fired, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_ties_fire_in_schedule_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(100), 1);
        scheduler.schedule(ms(100), 2);
        scheduler.schedule(ms(100), 3);

        let fired: Vec<_> = std::iter::from_fn(|| scheduler.pop_due(ms(100))).collect();
        assert_eq!(fired, vec![1, 2, 3]);
    }

    #[test]
    fn test_not_due_yet() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(1500), ());

        assert_eq!(scheduler.pop_due(ms(1499)), None);
        assert_eq!(scheduler.now(), Duration::ZERO);
        assert_eq!(scheduler.pop_due(ms(1500)), Some(()));
        assert_eq!(scheduler.now(), ms(1500));
    }

    #[test]
    fn test_follow_up_scheduled_from_deadline() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(1500), "resolve");

        assert_eq!(scheduler.pop_due(ms(2500)), Some("resolve"));
        let handle = scheduler.schedule(ms(500), "success");

        assert_eq!(handle.due, ms(2000));
        assert_eq!(scheduler.pop_due(ms(2500)), Some("success"));
    }

    #[test]
    fn test_cancel_through_handle() {
        let mut scheduler = Scheduler::new();
        let handle = scheduler.schedule(ms(10), "stale");
        scheduler.schedule(ms(20), "fresh");

        handle.token.cancel();
        assert_eq!(scheduler.pending(), 1);

        assert_eq!(scheduler.pop_due(ms(100)), Some("fresh"));
        assert_eq!(scheduler.pop_due(ms(100)), None);
    }

    #[test]
    fn test_cancel_all() {
        let mut scheduler = Scheduler::new();
        let a = scheduler.schedule(ms(10), 'a');
        scheduler.schedule(ms(20), 'b');
        a.token.cancel();

        assert_eq!(scheduler.cancel_all(), 1);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.next_deadline(), None);
        assert_eq!(scheduler.pop_due(ms(100)), None);
    }

    #[test]
    fn test_next_deadline_skips_cancelled() {
        let mut scheduler = Scheduler::new();
        let first = scheduler.schedule(ms(10), ());
        scheduler.schedule(ms(30), ());
        first.token.cancel();

        assert_eq!(scheduler.next_deadline(), Some(ms(30)));
    }

    #[test]
    fn test_clock_is_monotonic() {
        let mut scheduler: Scheduler<()> = Scheduler::new();
        scheduler.advance_to(ms(50));
        scheduler.advance_to(ms(20));

        assert_eq!(scheduler.now(), ms(50));
    }
}
