//! Punch sheets: a text file or lines passed on the command line.
//!
//! Grammar, one session per line:
//!
//! ```text
//! # comment
//! 9:00 am - 1:00 pm
//! 1:30 pm - MISSING
//! 6:10 pm
//! - 7:00 pm
//! ```
//!
//! A missing end (or `MISSING`) means the session is still open. A missing
//! start keeps the row with no clock-in so later rows do not shift up.

use crate::errors::{AppError, AppResult};
use crate::models::session::{OPEN_SENTINEL, Session};
use regex::Regex;
use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::warn;

static PUNCH_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<start>[^-]*?)\s*(?:-\s*(?P<end>.*?))?\s*$").expect("valid punch regex")
});

pub trait SessionSource {
    /// Ordered sessions, or `None` while the sheet is not available.
    fn sessions(&self) -> Option<Vec<Session>>;

    /// Content fingerprint, `None` while the sheet is not available.
    fn fingerprint(&self) -> Option<u64>;
}

/// Parse one sheet line; `None` for blank and comment lines.
pub fn parse_punch_line(line: &str) -> Option<Session> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let caps = PUNCH_LINE.captures(trimmed)?;
    let start = caps
        .name("start")
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    let end = match caps.name("end").map(|m| m.as_str()) {
        Some(e) if !e.is_empty() => e.to_string(),
        _ => OPEN_SENTINEL.to_string(),
    };

    Some(Session {
        start,
        end: Some(end),
    })
}

pub fn parse_punch_sheet(content: &str) -> Vec<Session> {
    content.lines().filter_map(parse_punch_line).collect()
}

fn fingerprint_of(content: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    hasher.finish()
}

/// Punch sheet stored in a text file. The file not existing means the
/// sheet is not open.
#[derive(Debug, Clone)]
pub struct PunchFile {
    path: PathBuf,
}

impl PunchFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Option<String> {
        if !self.path.exists() {
            return None;
        }
        match fs::read_to_string(&self.path) {
            Ok(content) => Some(content),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cannot read punch file");
                None
            }
        }
    }
}

impl SessionSource for PunchFile {
    fn sessions(&self) -> Option<Vec<Session>> {
        self.read().map(|c| parse_punch_sheet(&c))
    }

    fn fingerprint(&self) -> Option<u64> {
        self.read().map(|c| fingerprint_of(&c))
    }
}

/// Sessions given with repeated `--punch` options; always available.
#[derive(Debug, Clone)]
pub struct InlinePunches {
    sessions: Vec<Session>,
    fingerprint: u64,
}

impl InlinePunches {
    /// Every line must be a session; blank or comment entries are rejected.
    pub fn from_lines(lines: &[String]) -> AppResult<Self> {
        let sessions = lines
            .iter()
            .map(|l| parse_punch_line(l).ok_or_else(|| AppError::InvalidPunch(l.clone())))
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self {
            sessions,
            fingerprint: fingerprint_of(&lines.join("\n")),
        })
    }
}

impl SessionSource for InlinePunches {
    fn sessions(&self) -> Option<Vec<Session>> {
        Some(self.sessions.clone())
    }

    fn fingerprint(&self) -> Option<u64> {
        Some(self.fingerprint)
    }
}
