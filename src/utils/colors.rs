/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Minutes left or overtime:
/// overtime → red
/// nothing left → green
/// otherwise → reset
pub fn color_for_balance(remaining_minutes: i64, overtime_minutes: i64) -> &'static str {
    if overtime_minutes > 0 {
        RED
    } else if remaining_minutes == 0 {
        GREEN
    } else {
        RESET
    }
}
