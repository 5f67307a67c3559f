use crate::core::calculator::parser::parse_optional;
use crate::core::calculator::{NOT_AVAILABLE, WORKDAY_TARGET_MINUTES};
use crate::models::duration::WorkDuration;
use crate::models::time_of_day::TimeOfDay;
use crate::utils::formatting::format_duration;
use serde::Serialize;

pub const COMPLETED_MARKER: &str = " (Completed ✓)";
pub const NO_OVERTIME: &str = "No overtime";

/// Rendered completion time and overtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Projection {
    pub completion_time: String,
    pub overtime: String,
}

impl Projection {
    fn not_available() -> Self {
        Self {
            completion_time: NOT_AVAILABLE.to_string(),
            overtime: NOT_AVAILABLE.to_string(),
        }
    }
}

/// Project when the 8-hour target is reached and how much overtime is on the books.
///
/// Breaks push completion later since they do not count toward the target.
pub fn project(
    first_start: Option<&str>,
    total_worked_minutes: i64,
    total_break_minutes: i64,
) -> Projection {
    let Some(start) = parse_optional(first_start) else {
        return Projection::not_available();
    };

    let mut completion_time = completion_time_of_day(start, total_break_minutes).format_12h();
    if total_worked_minutes >= WORKDAY_TARGET_MINUTES {
        completion_time.push_str(COMPLETED_MARKER);
    }

    let overtime = match overtime_minutes(total_worked_minutes) {
        0 => NO_OVERTIME.to_string(),
        mins => {
            let d = WorkDuration::from_minutes(mins);
            format_duration(d.hours, d.minutes)
        }
    };

    Projection {
        completion_time,
        overtime,
    }
}

pub fn completion_time_of_day(start: TimeOfDay, total_break_minutes: i64) -> TimeOfDay {
    TimeOfDay::from_minutes_since_midnight(
        start.minutes_since_midnight() + WORKDAY_TARGET_MINUTES + total_break_minutes,
    )
}

pub fn overtime_minutes(total_worked_minutes: i64) -> i64 {
    (total_worked_minutes - WORKDAY_TARGET_MINUTES).max(0)
}
