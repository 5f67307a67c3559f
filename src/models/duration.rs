use serde::Serialize;

/// Elapsed time split into whole hours and leftover minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WorkDuration {
    pub hours: i64,
    pub minutes: i64,
}

impl WorkDuration {
    pub const ZERO: WorkDuration = WorkDuration {
        hours: 0,
        minutes: 0,
    };

    pub fn from_minutes(total: i64) -> Self {
        let total = total.max(0);
        Self {
            hours: total / 60,
            minutes: total % 60,
        }
    }

    pub fn total_minutes(&self) -> i64 {
        self.hours * 60 + self.minutes
    }
}
