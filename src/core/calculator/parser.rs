//! Parsing of raw 12-hour punch strings (`9:05 am`, `12:30 PM`).

use crate::models::session::OPEN_SENTINEL;
use crate::models::time_of_day::TimeOfDay;
use tracing::debug;

/// Parse a raw punch into a time of day.
///
/// Returns `None` for empty input, the open sentinel, or anything that is
/// not a valid clock value. Without an am/pm marker the clock part is read
/// as 24-hour time.
pub fn parse_time(raw: &str) -> Option<TimeOfDay> {
    let raw = raw.trim();
    if raw.is_empty() || raw == OPEN_SENTINEL {
        return None;
    }

    let lower = raw.to_lowercase();
    let (clock, period) = split_period(&lower);

    let (h, m) = clock.split_once(':')?;
    let Ok(mut hours) = h.trim().parse::<u32>() else {
        debug!(raw, "unparsable hour in punch");
        return None;
    };
    let Ok(minutes) = m.trim().parse::<u32>() else {
        debug!(raw, "unparsable minute in punch");
        return None;
    };

    match period {
        Some(p @ ("am" | "pm")) => {
            if !(1..=12).contains(&hours) {
                debug!(raw, hours, "hour out of range for 12-hour clock");
                return None;
            }
            if p == "pm" && hours != 12 {
                hours += 12;
            }
            if p == "am" && hours == 12 {
                hours = 0;
            }
        }
        Some(other) => {
            debug!(raw, period = other, "unknown period marker");
            return None;
        }
        None => {}
    }

    let parsed = TimeOfDay::new(hours, minutes);
    if parsed.is_none() {
        debug!(raw, "punch out of range");
    }
    parsed
}

/// Parse an optional cell; an absent cell behaves like an unparsable one.
pub fn parse_optional(raw: Option<&str>) -> Option<TimeOfDay> {
    raw.and_then(parse_time)
}

fn split_period(lower: &str) -> (&str, Option<&str>) {
    if let Some((clock, period)) = lower.split_once(' ') {
        return (clock, Some(period.trim()));
    }
    // tolerate "9:00am"
    for suffix in ["am", "pm"] {
        if let Some(clock) = lower.strip_suffix(suffix) {
            return (clock, Some(suffix));
        }
    }
    (lower, None)
}
