pub mod checkpoints;
pub mod config;
pub mod init;
pub mod parse;
pub mod remaining;
pub mod summary;
pub mod watch;

use crate::cli::parser::PunchArgs;
use crate::config::Config;
use crate::core::calculator::parser::parse_time;
use crate::errors::{AppError, AppResult};
use crate::host::clock::{Clock, FixedClock, SystemClock};
use crate::host::source::{InlinePunches, PunchFile, SessionSource};
use crate::utils::path::expand_tilde;

/// `--punch` values win; otherwise `--file`, otherwise the configured sheet.
pub fn resolve_source(args: &PunchArgs, cfg: &Config) -> AppResult<Box<dyn SessionSource>> {
    if !args.punches.is_empty() {
        return Ok(Box::new(InlinePunches::from_lines(&args.punches)?));
    }
    let path = match &args.file {
        Some(f) => expand_tilde(f),
        None => cfg.punch_path(),
    };
    Ok(Box::new(PunchFile::new(path)))
}

pub fn resolve_clock(at: Option<&String>) -> AppResult<Box<dyn Clock>> {
    match at {
        Some(raw) => {
            let t = parse_time(raw).ok_or_else(|| AppError::InvalidTime(raw.clone()))?;
            Ok(Box::new(FixedClock(t)))
        }
        None => Ok(Box::new(SystemClock)),
    }
}
