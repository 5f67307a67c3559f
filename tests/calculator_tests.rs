use rworkday::core::calculator::aggregate::aggregate;
use rworkday::core::calculator::completion::{overtime_minutes, project};
use rworkday::core::calculator::duration::{duration, minutes_between};
use rworkday::core::calculator::parser::parse_time;
use rworkday::core::calculator::remaining::remaining;
use rworkday::models::aggregate::BreakInterval;
use rworkday::models::duration::WorkDuration;
use rworkday::models::session::Session;
use rworkday::models::time_of_day::TimeOfDay;

fn t(h: u32, m: u32) -> TimeOfDay {
    TimeOfDay::new(h, m).unwrap()
}

fn hm(hours: i64, minutes: i64) -> WorkDuration {
    WorkDuration { hours, minutes }
}

// ---------------------------------------------------------------------------
// parse_time
// ---------------------------------------------------------------------------

#[test]
fn test_parse_pm_adds_twelve() {
    let parsed = parse_time("2:30 pm").expect("time");
    assert_eq!((parsed.hours(), parsed.minutes()), (14, 30));
    assert_eq!(parsed.to_string(), "14:30");
}

#[test]
fn test_time_of_day_wraps_minute_offsets() {
    assert_eq!(TimeOfDay::from_minutes_since_midnight(1440 + 75), t(1, 15));
    assert_eq!(TimeOfDay::from_minutes_since_midnight(-30), t(23, 30));
    assert_eq!(t(17, 5).format_12h(), "05:05 pm");
    assert_eq!(t(0, 0).format_12h(), "12:00 am");
}

#[test]
fn test_parse_midnight_and_noon() {
    assert_eq!(parse_time("12:00 am"), Some(t(0, 0)));
    assert_eq!(parse_time("12:15 pm"), Some(t(12, 15)));
}

#[test]
fn test_parse_is_case_insensitive_and_tolerates_no_space() {
    assert_eq!(parse_time("9:05 AM"), Some(t(9, 5)));
    assert_eq!(parse_time("9:05PM"), Some(t(21, 5)));
}

#[test]
fn test_parse_without_period_reads_24h() {
    assert_eq!(parse_time("14:30"), Some(t(14, 30)));
}

#[test]
fn test_parse_absent_values() {
    assert_eq!(parse_time("MISSING"), None);
    assert_eq!(parse_time(""), None);
    assert_eq!(parse_time("   "), None);
}

#[test]
fn test_parse_rejects_out_of_range_and_garbage() {
    assert_eq!(parse_time("25:99 pm"), None);
    assert_eq!(parse_time("13:00 pm"), None);
    assert_eq!(parse_time("0:30 am"), None);
    assert_eq!(parse_time("9:75 am"), None);
    assert_eq!(parse_time("24:00"), None);
    assert_eq!(parse_time("9:00 xm"), None);
    assert_eq!(parse_time("nine o'clock"), None);
}

// ---------------------------------------------------------------------------
// duration
// ---------------------------------------------------------------------------

#[test]
fn test_duration_regular_day() {
    assert_eq!(duration(Some("9:00 am"), Some("5:00 pm"), t(12, 0)), hm(8, 0));
}

#[test]
fn test_duration_wraps_midnight() {
    assert_eq!(duration(Some("11:00 pm"), Some("1:00 am"), t(12, 0)), hm(2, 0));
}

#[test]
fn test_duration_over_twelve_hours_is_zero() {
    assert_eq!(duration(Some("9:00 am"), Some("10:30 pm"), t(12, 0)), hm(0, 0));
}

#[test]
fn test_duration_exactly_twelve_hours_is_kept() {
    assert_eq!(duration(Some("8:00 am"), Some("8:00 pm"), t(12, 0)), hm(12, 0));
}

#[test]
fn test_duration_open_end_uses_now() {
    assert_eq!(duration(Some("9:00 am"), Some("MISSING"), t(11, 15)), hm(2, 15));
}

#[test]
fn test_duration_unparsable_bound_is_zero() {
    assert_eq!(duration(None, Some("5:00 pm"), t(12, 0)), WorkDuration::ZERO);
    assert_eq!(duration(Some("9:00 am"), None, t(12, 0)), WorkDuration::ZERO);
    assert_eq!(duration(Some("MISSING"), Some("5:00 pm"), t(12, 0)), WorkDuration::ZERO);
    assert_eq!(duration(Some("9:00 am"), Some("later"), t(12, 0)), WorkDuration::ZERO);
}

#[test]
fn test_minutes_between_same_time_is_zero() {
    assert_eq!(minutes_between(t(9, 0), t(9, 0)), 0);
}

// ---------------------------------------------------------------------------
// aggregate
// ---------------------------------------------------------------------------

fn two_sessions() -> Vec<Session> {
    vec![
        Session::new("9:00 am", "1:00 pm"),
        Session::new("1:30 pm", "6:00 pm"),
    ]
}

#[test]
fn test_aggregate_two_sessions_with_lunch() {
    let sessions = two_sessions();
    let agg = aggregate(Some(sessions.as_slice()), t(18, 0)).expect("aggregate");

    assert_eq!(agg.total_worked_minutes, 510);
    assert_eq!(agg.total_break_minutes, 30);
    assert_eq!(agg.first_start_time.as_deref(), Some("9:00 am"));
    assert_eq!(agg.breaks, vec![BreakInterval { row: 1, minutes: 30 }]);
    assert_eq!(agg.total_duration(), "8 Hr 30 Min");
    assert!((agg.total_worked_hours() - 8.5).abs() < f64::EPSILON);
}

#[test]
fn test_aggregate_is_repeatable() {
    let sessions = two_sessions();
    let first = aggregate(Some(sessions.as_slice()), t(18, 0));
    let second = aggregate(Some(sessions.as_slice()), t(18, 0));
    assert_eq!(first, second);
}

#[test]
fn test_aggregate_absent_or_empty_is_none() {
    assert_eq!(aggregate(None, t(12, 0)), None);
    assert_eq!(aggregate(Some(&[][..]), t(12, 0)), None);
}

#[test]
fn test_aggregate_open_last_session_runs_until_now() {
    let sessions = vec![
        Session::new("9:00 am", "12:00 pm"),
        Session::open("12:45 pm"),
    ];
    let agg = aggregate(Some(sessions.as_slice()), t(15, 0)).expect("aggregate");

    assert_eq!(agg.total_worked_minutes, 180 + 135);
    assert_eq!(agg.total_break_minutes, 45);
}

#[test]
fn test_aggregate_open_session_before_last_counts_zero() {
    let sessions = vec![Session::open("9:00 am"), Session::new("1:00 pm", "2:00 pm")];
    let agg = aggregate(Some(sessions.as_slice()), t(15, 0)).expect("aggregate");

    assert_eq!(agg.total_worked_minutes, 60);
    assert_eq!(agg.total_break_minutes, 0);
    assert_eq!(agg.breaks, vec![BreakInterval { row: 1, minutes: 0 }]);
}

#[test]
fn test_aggregate_three_sessions_accumulates_breaks() {
    let sessions = vec![
        Session::new("9:00 am", "11:00 am"),
        Session::new("11:15 am", "1:00 pm"),
        Session::new("2:00 pm", "5:30 pm"),
    ];
    let agg = aggregate(Some(sessions.as_slice()), t(18, 0)).expect("aggregate");

    assert_eq!(agg.total_worked_minutes, 120 + 105 + 210);
    assert_eq!(agg.total_break_minutes, 15 + 60);
    assert_eq!(agg.breaks.len(), 2);
    assert_eq!(agg.breaks[1].badge(), "Break: 1h 0m");
}

#[test]
fn test_aggregate_first_row_without_start_has_no_first_clock_in() {
    let sessions = vec![
        Session {
            start: None,
            end: Some("1:00 pm".to_string()),
        },
        Session::new("2:00 pm", "5:00 pm"),
    ];
    let agg = aggregate(Some(sessions.as_slice()), t(18, 0)).expect("aggregate");

    assert_eq!(agg.first_start_time, None);
    assert_eq!(agg.total_worked_minutes, 180);
    assert_eq!(agg.total_break_minutes, 60);
    assert_eq!(agg.breaks, vec![BreakInterval { row: 1, minutes: 60 }]);
}

#[test]
fn test_break_badge_format() {
    assert_eq!(BreakInterval { row: 1, minutes: 30 }.badge(), "Break: 0h 30m");
    assert_eq!(BreakInterval { row: 2, minutes: 75 }.badge(), "Break: 1h 15m");
}

// ---------------------------------------------------------------------------
// project
// ---------------------------------------------------------------------------

#[test]
fn test_project_completed_day_with_overtime() {
    let p = project(Some("9:00 am"), 510, 30);
    assert_eq!(p.completion_time, "05:30 pm (Completed ✓)");
    assert_eq!(p.overtime, "0 Hr 30 Min");
}

#[test]
fn test_project_day_in_progress() {
    let p = project(Some("9:00 am"), 300, 0);
    assert_eq!(p.completion_time, "05:00 pm");
    assert_eq!(p.overtime, "No overtime");
}

#[test]
fn test_project_exactly_eight_hours_is_completed_without_overtime() {
    let p = project(Some("8:30 am"), 480, 45);
    assert_eq!(p.completion_time, "05:15 pm (Completed ✓)");
    assert_eq!(p.overtime, "No overtime");
}

#[test]
fn test_project_wraps_past_midnight() {
    let p = project(Some("8:00 pm"), 0, 0);
    assert_eq!(p.completion_time, "04:00 am");
}

#[test]
fn test_project_without_start_is_not_available() {
    for start in [None, Some("MISSING"), Some("garbage")] {
        let p = project(start, 600, 0);
        assert_eq!(p.completion_time, "N/A");
        assert_eq!(p.overtime, "N/A");
    }
}

#[test]
fn test_overtime_minutes_never_negative() {
    assert_eq!(overtime_minutes(100), 0);
    assert_eq!(overtime_minutes(480), 0);
    assert_eq!(overtime_minutes(545), 65);
}

// ---------------------------------------------------------------------------
// remaining
// ---------------------------------------------------------------------------

#[test]
fn test_remaining_subtracts_breaks() {
    let s = remaining(Some("9:00 am"), 30, t(17, 0)).expect("state");
    assert_eq!(s.remaining_minutes, 30);
    assert!(!s.completed);
    assert_eq!(s.overtime_minutes, 0);
}

#[test]
fn test_remaining_reaches_target() {
    let s = remaining(Some("9:00 am"), 30, t(17, 30)).expect("state");
    assert_eq!(s.remaining_minutes, 0);
    assert!(s.completed);
    assert_eq!(s.overtime_minutes, 0);
}

#[test]
fn test_remaining_reports_overtime_as_positive_magnitude() {
    let s = remaining(Some("9:00 am"), 30, t(18, 0)).expect("state");
    assert_eq!(s.remaining_minutes, 0);
    assert!(s.completed);
    assert_eq!(s.overtime_minutes, 30);
    assert!(s.in_overtime());
}

#[test]
fn test_remaining_start_after_now_counts_from_previous_day() {
    let s = remaining(Some("11:00 pm"), 0, t(1, 0)).expect("state");
    assert_eq!(s.remaining_minutes, 360);
}

#[test]
fn test_remaining_without_start_is_none() {
    assert_eq!(remaining(None, 0, t(12, 0)), None);
    assert_eq!(remaining(Some("MISSING"), 0, t(12, 0)), None);
}
