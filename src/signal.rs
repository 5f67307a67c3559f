//! Ctrl+C handling for the long-running `watch` loop.

use crate::errors::{AppError, AppResult};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Flag set by SIGINT, polled by the run loop without blocking.
#[derive(Clone)]
pub struct SignalHandler {
    shutdown_flag: Arc<AtomicBool>,
}

impl SignalHandler {
    /// Registers the handler. Only one handler can exist per process.
    pub fn new() -> AppResult<Self> {
        let shutdown_flag = Arc::new(AtomicBool::new(false));
        let flag_clone = Arc::clone(&shutdown_flag);

        ctrlc::set_handler(move || {
            flag_clone.store(true, Ordering::SeqCst);
        })
        .map_err(|e| AppError::SignalHandler(e.to_string()))?;

        Ok(Self { shutdown_flag })
    }

    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown_flag.load(Ordering::SeqCst)
    }
}
