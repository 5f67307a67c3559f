use chrono::{Local, NaiveTime, Timelike};
use serde::Serialize;
use std::fmt;

pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Wall-clock time of day with minute precision, always read against "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TimeOfDay {
    hours: u32,
    minutes: u32,
}

impl TimeOfDay {
    /// Returns `None` unless `hours` is 0-23 and `minutes` is 0-59.
    pub fn new(hours: u32, minutes: u32) -> Option<Self> {
        (hours < 24 && minutes < 60).then_some(Self { hours, minutes })
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn minutes_since_midnight(&self) -> i64 {
        self.hours as i64 * 60 + self.minutes as i64
    }

    /// Builds a time from a minute offset, wrapping around midnight in both directions.
    pub fn from_minutes_since_midnight(total: i64) -> Self {
        let m = total.rem_euclid(MINUTES_PER_DAY);
        Self {
            hours: (m / 60) as u32,
            minutes: (m % 60) as u32,
        }
    }

    pub fn from_naive(t: NaiveTime) -> Self {
        Self {
            hours: t.hour(),
            minutes: t.minute(),
        }
    }

    pub fn to_naive(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hours, self.minutes, 0).unwrap_or_default()
    }

    pub fn now_local() -> Self {
        Self::from_naive(Local::now().time())
    }

    /// 12-hour clock rendering, e.g. `05:30 pm`.
    pub fn format_12h(&self) -> String {
        self.to_naive().format("%I:%M %P").to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}
