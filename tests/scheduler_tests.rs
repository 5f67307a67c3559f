use rworkday::core::notify::messages::{
    COMPLETION_MESSAGE, REMAINING_TEMPLATES, overtime_message, remaining_message,
};
use rworkday::core::notify::scheduler::{
    Alert, NotificationScheduler, OVERTIME_CHECKPOINTS, REMAINING_CHECKPOINTS, should_notify,
    should_notify_overtime,
};
use rworkday::models::remaining::RemainingState;
use rworkday::utils::formatting::format_remaining;

fn before_target(remaining: i64) -> RemainingState {
    RemainingState::from_effective_work(480 - remaining)
}

fn past_target(overtime: i64) -> RemainingState {
    RemainingState::from_effective_work(480 + overtime)
}

#[test]
fn test_every_remaining_checkpoint_is_eligible() {
    for c in REMAINING_CHECKPOINTS {
        assert!(should_notify(c), "{c} should be a checkpoint");
    }
}

#[test]
fn test_one_minute_off_a_checkpoint_is_not_eligible() {
    for c in REMAINING_CHECKPOINTS {
        assert!(!should_notify(c + 1), "{} should not fire", c + 1);
        assert!(!should_notify(c - 1), "{} should not fire", c - 1);
    }
}

#[test]
fn test_overtime_checkpoints() {
    for c in OVERTIME_CHECKPOINTS {
        assert!(should_notify_overtime(c));
    }
    for m in [0, 1, 35, 45, 90, 150, 360] {
        assert!(!should_notify_overtime(m), "{m} should not fire");
    }
}

#[test]
fn test_countdown_fires_each_checkpoint_exactly_once() {
    let mut s = NotificationScheduler::new();
    let mut fired = Vec::new();

    for remaining in (1..=480).rev() {
        if let Some(n) = s.evaluate(&before_target(remaining)) {
            fired.push(n.alert);
        }
    }

    let expected: Vec<Alert> = REMAINING_CHECKPOINTS
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| Alert::Remaining(c))
        .collect();
    assert_eq!(fired, expected);
    assert_eq!(s.rotation(), expected.len());
}

#[test]
fn test_repeated_tick_on_same_checkpoint_fires_once() {
    let mut s = NotificationScheduler::new();
    assert!(s.evaluate(&before_target(30)).is_some());
    assert!(s.evaluate(&before_target(30)).is_none());
    assert!(s.evaluate(&before_target(29)).is_none());
}

#[test]
fn test_completion_fires_once_while_held_at_zero() {
    let mut s = NotificationScheduler::new();
    let done = before_target(0);
    assert!(done.completed);

    let first = s.evaluate(&done).expect("completion");
    assert_eq!(first.alert, Alert::Completed);
    assert_eq!(first.body, COMPLETION_MESSAGE);

    for _ in 0..5 {
        assert!(s.evaluate(&done).is_none());
    }
}

#[test]
fn test_overtime_track_after_completion() {
    let mut s = NotificationScheduler::new();
    s.evaluate(&before_target(0));

    let fired: Vec<Alert> = (1..=330)
        .filter_map(|m| s.evaluate(&past_target(m)))
        .map(|n| n.alert)
        .collect();

    let expected: Vec<Alert> = OVERTIME_CHECKPOINTS.iter().map(|&m| Alert::Overtime(m)).collect();
    assert_eq!(fired, expected);
}

#[test]
fn test_overtime_does_not_advance_rotation() {
    let mut s = NotificationScheduler::new();
    s.evaluate(&past_target(5));
    assert_eq!(s.rotation(), 0);
}

#[test]
fn test_rotation_cycles_templates_and_survives_session_reset() {
    let mut s = NotificationScheduler::new();

    let first = s.evaluate(&before_target(480)).expect("first");
    assert_eq!(first.body, remaining_message(0, 480));

    let second = s.evaluate(&before_target(420)).expect("second");
    assert_eq!(second.body, remaining_message(1, 420));

    s.reset_session();
    assert_eq!(s.rotation(), 2);

    let third = s.evaluate(&before_target(360)).expect("third");
    assert_eq!(third.body, remaining_message(2, 360));
}

#[test]
fn test_completion_can_fire_again_after_session_reset() {
    let mut s = NotificationScheduler::new();
    assert!(s.evaluate(&before_target(0)).is_some());
    s.reset_session();
    assert!(s.evaluate(&before_target(0)).is_some());
}

#[test]
fn test_remaining_message_uses_template_and_wraps() {
    assert_eq!(
        remaining_message(0, 30),
        "Time check! 30 minutes left in your workday. Keep going! 💠"
    );
    assert_eq!(
        remaining_message(REMAINING_TEMPLATES.len(), 30),
        remaining_message(0, 30)
    );
}

#[test]
fn test_overtime_message_phrasing() {
    assert_eq!(overtime_message(5), "You're working overtime! 5 minutes extra! 🚀");
    assert_eq!(overtime_message(60), "You're working overtime! 1 hour extra! 🚀");
    assert_eq!(
        overtime_message(125),
        "You're working overtime! 2 hours 5 minutes extra! 🚀"
    );
    assert_eq!(overtime_message(61), "You're working overtime! 1 hour 1 minute extra! 🚀");
}

#[test]
fn test_format_remaining_phrasing() {
    assert_eq!(format_remaining(0), "8 hours completed! 🎉");
    assert_eq!(format_remaining(-5), "8 hours completed! 🎉");
    assert_eq!(format_remaining(30), "30 minutes");
    assert_eq!(format_remaining(1), "1 minutes");
    assert_eq!(format_remaining(60), "1 hour");
    assert_eq!(format_remaining(120), "2 hours");
    assert_eq!(format_remaining(61), "1 hour and 1 minute");
    assert_eq!(format_remaining(150), "2 hours and 30 minutes");
}
