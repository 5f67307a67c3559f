//! Pure time-accounting engine: no I/O, no clock access; "now" is always passed in.

pub mod aggregate;
pub mod completion;
pub mod duration;
pub mod parser;
pub mod remaining;

/// Work required to complete a day.
pub const WORKDAY_TARGET_MINUTES: i64 = 8 * 60;

/// Placeholder shown when no first clock-in is available.
pub const NOT_AVAILABLE: &str = "N/A";
