use crate::core::calculator::duration::duration;
use crate::models::aggregate::{AggregateResult, BreakInterval};
use crate::models::session::Session;
use crate::models::time_of_day::TimeOfDay;
use tracing::warn;

/// Fold a day's ordered sessions into worked time, break time and first clock-in.
///
/// Returns `None` when there is nothing to aggregate (container absent or
/// empty). The result depends only on `sessions` and `now`.
pub fn aggregate(sessions: Option<&[Session]>, now: TimeOfDay) -> Option<AggregateResult> {
    let sessions = sessions.filter(|s| !s.is_empty())?;
    let last = sessions.len() - 1;

    let mut result = AggregateResult::default();
    let mut prev_end: Option<&str> = None;

    for (index, session) in sessions.iter().enumerate() {
        let start = session.start.as_deref();

        if index == 0 {
            result.first_start_time = session.start.clone();
        } else if let Some(prev) = prev_end {
            // An open previous end does not parse, so its gap is zero.
            let gap = duration(Some(prev), start, now).total_minutes();
            result.total_break_minutes += gap;
            result.breaks.push(BreakInterval {
                row: index,
                minutes: gap,
            });
        }

        let end = session.end.as_deref();
        let worked = if index != last && session.is_open() {
            warn!(row = index, "open session before the last one, counted as zero");
            0
        } else {
            duration(start, end, now).total_minutes()
        };
        result.total_worked_minutes += worked;

        prev_end = end;
    }

    Some(result)
}
