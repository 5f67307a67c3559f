use crate::core::calculator::WORKDAY_TARGET_MINUTES;
use serde::Serialize;

/// Position relative to the 8-hour target at one instant.
///
/// Both `remaining_minutes` and `overtime_minutes` are non-negative; at most
/// one of them is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RemainingState {
    pub remaining_minutes: i64,
    pub completed: bool,
    pub overtime_minutes: i64,
}

impl RemainingState {
    pub fn from_effective_work(effective_work_minutes: i64) -> Self {
        Self {
            remaining_minutes: (WORKDAY_TARGET_MINUTES - effective_work_minutes).max(0),
            completed: effective_work_minutes >= WORKDAY_TARGET_MINUTES,
            overtime_minutes: (effective_work_minutes - WORKDAY_TARGET_MINUTES).max(0),
        }
    }

    pub fn in_overtime(&self) -> bool {
        self.overtime_minutes > 0
    }
}
