//! Detect missing or unknown keys in a config file.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ConfigReport {
    pub missing: Vec<String>,
    pub unknown: Vec<String>,
}

impl ConfigReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unknown.is_empty()
    }
}

fn mapping_keys(value: &Value) -> Vec<String> {
    value
        .as_mapping()
        .map(|m| {
            m.keys()
                .filter_map(|k| k.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Compare a YAML document against the keys the current config knows.
pub fn check_content(content: &str) -> AppResult<ConfigReport> {
    let expected = mapping_keys(&serde_yaml::to_value(Config::default())?);
    let doc: Value = serde_yaml::from_str(content)?;
    if !doc.is_mapping() && !doc.is_null() {
        return Err(AppError::Config("top level is not a mapping".into()));
    }
    let present = mapping_keys(&doc);

    Ok(ConfigReport {
        missing: expected
            .iter()
            .filter(|k| !present.contains(k))
            .cloned()
            .collect(),
        unknown: present
            .iter()
            .filter(|k| !expected.contains(k))
            .cloned()
            .collect(),
    })
}

pub fn check_file(path: &Path) -> AppResult<ConfigReport> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    check_content(&content)
}
