use serde::Serialize;

/// Sentinel shown by the attendance sheet for a punch that is still open.
pub const OPEN_SENTINEL: &str = "MISSING";

/// One clock-in/clock-out row exactly as read from the sheet.
///
/// Bounds stay raw: parsing happens in the calculator so that an unreadable
/// cell degrades to zero instead of rejecting the whole day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl Session {
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: Some(start.to_string()),
            end: Some(end.to_string()),
        }
    }

    /// A session still running (clock-out not yet recorded).
    pub fn open(start: &str) -> Self {
        Self::new(start, OPEN_SENTINEL)
    }

    pub fn is_open(&self) -> bool {
        self.end.as_deref() == Some(OPEN_SENTINEL)
    }

    pub fn start_str(&self) -> &str {
        self.start.as_deref().unwrap_or("--:--")
    }

    pub fn end_str(&self) -> &str {
        self.end.as_deref().unwrap_or("--:--")
    }
}
