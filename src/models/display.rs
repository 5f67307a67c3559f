use crate::models::aggregate::BreakInterval;
use crate::models::session::Session;
use serde::Serialize;

/// Everything a renderer needs to draw the four metric cards and the punch table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayBundle {
    pub total_duration: String,
    pub completion_time: String,
    pub overtime: String,
    pub remaining_time_str: String,
    pub completed: bool,
    pub first_start_time: Option<String>,
    pub total_break_minutes: i64,
    pub breaks: Vec<BreakInterval>,
    pub sessions: Vec<Session>,
}
