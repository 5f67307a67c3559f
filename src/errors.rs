//! Unified application error type.
//! The engine itself never fails (it degrades to neutral values); AppError
//! covers the surfaces around it: files, config, command-line input.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format: {0} (expected e.g. \"9:05 am\")")]
    InvalidTime(String),

    #[error("Invalid punch: {0} (expected \"START - END\")")]
    InvalidPunch(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    #[error("Invalid configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Runtime
    // ---------------------------
    #[error("Signal handler error: {0}")]
    SignalHandler(String),
}

pub type AppResult<T> = Result<T, AppError>;
