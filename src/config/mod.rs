use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod check;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_punch_file")]
    pub punch_file: String,
    #[serde(default = "default_notification_title")]
    pub notification_title: String,
    #[serde(default = "default_desktop_notifications")]
    pub desktop_notifications: bool,
    #[serde(default = "default_watch_poll_ms")]
    pub watch_poll_ms: u64,
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_punch_file() -> String {
    Config::config_dir()
        .join("punches.txt")
        .to_string_lossy()
        .to_string()
}
fn default_notification_title() -> String {
    "Workday Time Alert".to_string()
}
fn default_desktop_notifications() -> bool {
    true
}
fn default_watch_poll_ms() -> u64 {
    250
}

impl Default for Config {
    fn default() -> Self {
        Self {
            punch_file: default_punch_file(),
            notification_title: default_notification_title(),
            desktop_notifications: default_desktop_notifications(),
            watch_poll_ms: default_watch_poll_ms(),
            output: OutputFormat::default(),
        }
    }
}

const PUNCH_SHEET_TEMPLATE: &str = "\
# One session per line: START - END (12-hour clock).
# Leave END empty or write MISSING while still clocked in.
# 9:00 am - 1:00 pm
# 1:30 pm - MISSING
";

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rworkday")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rworkday")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworkday.conf")
    }

    /// Config path to use: the `--config` override or the standard location.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        custom
            .map(expand_tilde)
            .unwrap_or_else(Self::config_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|_| AppError::ConfigSave)?;
        }
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    pub fn punch_path(&self) -> PathBuf {
        expand_tilde(&self.punch_file)
    }

    /// Create the config file (unless `is_test`) and an empty punch sheet.
    /// Returns the config that is now in effect.
    pub fn init_all(path: &Path, is_test: bool) -> AppResult<Self> {
        let config = if path.exists() {
            Self::load_from(path)?
        } else {
            Self::default()
        };

        if !is_test {
            config.save_to(path)?;
        }

        let sheet = config.punch_path();
        if !sheet.exists() {
            if let Some(dir) = sheet.parent() {
                fs::create_dir_all(dir)?;
            }
            fs::write(&sheet, PUNCH_SHEET_TEMPLATE)?;
        }

        Ok(config)
    }
}
