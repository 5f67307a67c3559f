//! Deadline-based cancellable periodic task, polled from the run loop.

use std::time::{Duration, Instant};

/// Fixed re-evaluation cadence.
pub const TICK_INTERVAL: Duration = Duration::from_secs(60);

/// Shortest interval accepted; a zero interval would never move the deadline.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone)]
pub struct PeriodicTask {
    interval: Duration,
    next_due: Option<Instant>,
}

impl PeriodicTask {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(MIN_INTERVAL),
            next_due: None,
        }
    }

    /// (Re)arm the task; the first tick is due one interval after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Returns `true` once per elapsed deadline. Missed intervals collapse
    /// into a single tick; the schedule stays aligned to the original start.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }

        let mut next = due + self.interval;
        while next <= now {
            next += self.interval;
        }
        self.next_due = Some(next);
        true
    }

    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

impl Default for PeriodicTask {
    fn default() -> Self {
        Self::new(TICK_INTERVAL)
    }
}
