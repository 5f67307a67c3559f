//! Decides, once per tick, whether a checkpoint was hit and which message to send.

use crate::core::notify::messages::{COMPLETION_MESSAGE, overtime_message, remaining_message};
use crate::models::remaining::RemainingState;
use tracing::debug;

/// Remaining-time checkpoints: whole hours from 8 to 2, then 60..0 in the last hour.
pub const REMAINING_CHECKPOINTS: [i64; 16] = [
    480, 420, 360, 300, 240, 180, 120, 60, 50, 40, 30, 20, 15, 10, 5, 0,
];

/// Overtime checkpoints: every 5 minutes up to 30, then whole hours up to 5.
pub const OVERTIME_CHECKPOINTS: [i64; 11] = [5, 10, 15, 20, 25, 30, 60, 120, 180, 240, 300];

pub fn should_notify(remaining_minutes: i64) -> bool {
    REMAINING_CHECKPOINTS.contains(&remaining_minutes)
}

pub fn should_notify_overtime(overtime_minutes: i64) -> bool {
    OVERTIME_CHECKPOINTS.contains(&overtime_minutes)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    Remaining(i64),
    Overtime(i64),
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub alert: Alert,
    pub body: String,
}

/// Checkpoint state machine.
///
/// `rotation` lives for the whole process; `reset_session` only clears the
/// per-session edge state.
#[derive(Debug, Default)]
pub struct NotificationScheduler {
    rotation: usize,
    last_alert: Option<Alert>,
    completion_announced: bool,
}

impl NotificationScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of remaining-time messages shown so far.
    pub fn rotation(&self) -> usize {
        self.rotation
    }

    pub fn reset_session(&mut self) {
        self.last_alert = None;
        self.completion_announced = false;
    }

    /// Evaluate one tick. A checkpoint fires only on the tick that lands on
    /// it; repeating the same value on the next tick does not fire again.
    pub fn evaluate(&mut self, state: &RemainingState) -> Option<Notification> {
        let alert = self.classify(state);
        let previous = std::mem::replace(&mut self.last_alert, alert);

        let alert = alert?;
        if previous == Some(alert) {
            debug!(?alert, "checkpoint already notified on previous tick");
            return None;
        }

        let body = match alert {
            Alert::Overtime(mins) => overtime_message(mins),
            Alert::Remaining(mins) => {
                let body = remaining_message(self.rotation, mins);
                self.rotation += 1;
                body
            }
            Alert::Completed => {
                self.completion_announced = true;
                COMPLETION_MESSAGE.to_string()
            }
        };

        debug!(?alert, "checkpoint reached");
        Some(Notification { alert, body })
    }

    fn classify(&self, state: &RemainingState) -> Option<Alert> {
        if state.in_overtime() {
            should_notify_overtime(state.overtime_minutes)
                .then_some(Alert::Overtime(state.overtime_minutes))
        } else if !state.completed {
            should_notify(state.remaining_minutes).then_some(Alert::Remaining(state.remaining_minutes))
        } else if state.remaining_minutes == 0 && !self.completion_announced {
            Some(Alert::Completed)
        } else {
            None
        }
    }
}
