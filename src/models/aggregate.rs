use crate::models::duration::WorkDuration;
use crate::utils::formatting::format_duration;
use serde::Serialize;

/// Idle gap preceding the session at `row` (0-based, never 0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakInterval {
    pub row: usize,
    pub minutes: i64,
}

impl BreakInterval {
    /// Badge text attached to the session row, e.g. `Break: 0h 30m`.
    pub fn badge(&self) -> String {
        let d = WorkDuration::from_minutes(self.minutes);
        format!("Break: {}h {}m", d.hours, d.minutes)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregateResult {
    pub total_worked_minutes: i64,
    pub total_break_minutes: i64,
    pub first_start_time: Option<String>,
    pub breaks: Vec<BreakInterval>,
}

impl AggregateResult {
    pub fn total_worked_hours(&self) -> f64 {
        self.total_worked_minutes as f64 / 60.0
    }

    /// `H Hr M Min`
    pub fn total_duration(&self) -> String {
        let d = WorkDuration::from_minutes(self.total_worked_minutes);
        format_duration(d.hours, d.minutes)
    }
}
