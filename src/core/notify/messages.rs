//! Notification bodies.

use crate::utils::formatting::{format_remaining, plural};

/// Rotated in order, one step per remaining-time notification.
pub const REMAINING_TEMPLATES: [&str; 8] = [
    "Time check! {remaining} left in your workday. Keep going! 💠",
    "Quick update: {remaining} until you hit your 8-hour mark! 🎯",
    "Checking in - {remaining} to go. You've got this! 🌟",
    "Time flies! {remaining} remaining in your workday. Stay focused! 🚀",
    "Progress check: {remaining} left. Take a stretch if needed! 🧘",
    "Heads up! {remaining} to complete your day. Keep up the great work! 👍",
    "Time update: {remaining} remaining. Remember to stay hydrated! 💧",
    "Almost there! {remaining} left in your workday. You're doing great! ⭐",
];

pub const COMPLETION_MESSAGE: &str = "Congratulations! You've completed your 8-hour workday! 🎉";

pub fn remaining_message(rotation: usize, remaining_minutes: i64) -> String {
    REMAINING_TEMPLATES[rotation % REMAINING_TEMPLATES.len()]
        .replace("{remaining}", &format_remaining(remaining_minutes))
}

/// `You're working overtime! 1 hour 5 minutes extra! 🚀`
pub fn overtime_message(overtime_minutes: i64) -> String {
    let hours = overtime_minutes / 60;
    let minutes = overtime_minutes % 60;

    let mut message = String::from("You're working overtime! ");
    if hours > 0 {
        message.push_str(&format!("{} ", plural(hours, "hour")));
    }
    if minutes > 0 {
        message.push_str(&format!("{} ", plural(minutes, "minute")));
    }
    message.push_str("extra! 🚀");
    message
}
