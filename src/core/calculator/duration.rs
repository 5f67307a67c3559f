use crate::core::calculator::parser::parse_optional;
use crate::models::duration::WorkDuration;
use crate::models::session::OPEN_SENTINEL;
use crate::models::time_of_day::{MINUTES_PER_DAY, TimeOfDay};
use tracing::debug;

/// No single session is allowed to last longer than this.
pub const MAX_SESSION_MINUTES: i64 = 12 * 60;

/// Elapsed time between two raw punches.
///
/// An open `end` is replaced by `now`. Any bound that fails to parse yields a
/// zero duration.
pub fn duration(start: Option<&str>, end: Option<&str>, now: TimeOfDay) -> WorkDuration {
    let Some(start) = parse_optional(start) else {
        return WorkDuration::ZERO;
    };

    let end = match end {
        Some(OPEN_SENTINEL) => Some(now),
        other => parse_optional(other),
    };
    let Some(end) = end else {
        return WorkDuration::ZERO;
    };

    WorkDuration::from_minutes(minutes_between(start, end))
}

/// Minutes from `start` to `end`, wrapping past midnight and capped at 12 hours.
///
/// Anything longer than [`MAX_SESSION_MINUTES`] is treated as a misread
/// sheet and counts as zero.
pub fn minutes_between(start: TimeOfDay, end: TimeOfDay) -> i64 {
    let mut delta = end.minutes_since_midnight() - start.minutes_since_midnight();
    if delta < 0 {
        delta += MINUTES_PER_DAY;
    }
    if delta > MAX_SESSION_MINUTES {
        debug!(%start, %end, delta, "session longer than 12h, counted as zero");
        return 0;
    }
    delta
}
