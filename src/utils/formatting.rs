//! Formatting utilities used for terminal output and notification bodies.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ansi regex"));

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn strip_ansi(s: &str) -> String {
    ANSI.replace_all(s, "").into_owned()
}

/// Pad to `width` terminal columns, ignoring ANSI escapes and counting wide glyphs.
pub fn pad_display(s: &str, width: usize) -> String {
    let visible = UnicodeWidthStr::width(strip_ansi(s).as_str());
    format!("{}{}", s, " ".repeat(width.saturating_sub(visible)))
}

/// `7 Hr 5 Min`
pub fn format_duration(hours: i64, minutes: i64) -> String {
    format!("{} Hr {} Min", hours, minutes)
}

/// `1 hour`, `2 hours`
pub fn plural(n: i64, unit: &str) -> String {
    if n > 1 {
        format!("{n} {unit}s")
    } else {
        format!("{n} {unit}")
    }
}

/// Human phrasing of the time left until the 8-hour target.
///
/// Under an hour only minutes are shown (always plural, `1 minutes`
/// included); otherwise hours with optional minutes.
pub fn format_remaining(minutes: i64) -> String {
    if minutes <= 0 {
        return "8 hours completed! 🎉".to_string();
    }

    let hours = minutes / 60;
    let mins = minutes % 60;

    if hours == 0 {
        format!("{mins} minutes")
    } else if mins == 0 {
        plural(hours, "hour")
    } else {
        format!("{} and {}", plural(hours, "hour"), plural(mins, "minute"))
    }
}
