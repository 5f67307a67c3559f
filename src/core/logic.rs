use crate::core::calculator::{aggregate, completion, remaining};
use crate::models::display::DisplayBundle;
use crate::models::session::Session;
use crate::models::time_of_day::TimeOfDay;
use crate::utils::formatting::format_remaining;

pub struct Core;

impl Core {
    /// Run the whole engine on one snapshot of the sheet.
    ///
    /// `None` means "nothing to show yet".
    pub fn build_display(sessions: Option<&[Session]>, now: TimeOfDay) -> Option<DisplayBundle> {
        let agg = aggregate::aggregate(sessions, now)?;
        let first_start = agg.first_start_time.as_deref();

        let projection = completion::project(
            first_start,
            agg.total_worked_minutes,
            agg.total_break_minutes,
        );
        let state = remaining::remaining(first_start, agg.total_break_minutes, now);

        Some(DisplayBundle {
            total_duration: agg.total_duration(),
            completion_time: projection.completion_time,
            overtime: projection.overtime,
            remaining_time_str: state
                .map(|s| format_remaining(s.remaining_minutes))
                .unwrap_or_else(|| crate::core::calculator::NOT_AVAILABLE.to_string()),
            completed: state.is_some_and(|s| s.completed),
            first_start_time: agg.first_start_time.clone(),
            total_break_minutes: agg.total_break_minutes,
            breaks: agg.breaks,
            sessions: sessions.map(<[Session]>::to_vec).unwrap_or_default(),
        })
    }
}
