use crate::core::calculator::parser::parse_optional;
use crate::models::remaining::RemainingState;
use crate::models::time_of_day::{MINUTES_PER_DAY, TimeOfDay};

/// Time left until the 8-hour target, measured from the first clock-in to `now`.
///
/// A first clock-in that reads later than `now` is taken to be from the
/// previous day.
pub fn remaining(
    first_start: Option<&str>,
    total_break_minutes: i64,
    now: TimeOfDay,
) -> Option<RemainingState> {
    let start = parse_optional(first_start)?;

    let mut elapsed = now.minutes_since_midnight() - start.minutes_since_midnight();
    if elapsed < 0 {
        elapsed += MINUTES_PER_DAY;
    }

    Some(RemainingState::from_effective_work(
        elapsed - total_break_minutes,
    ))
}
