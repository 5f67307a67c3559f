#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rwd() -> Command {
    cargo_bin_cmd!("rworkday")
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworkday.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Config path that does not exist, so every run uses the defaults.
pub fn no_config(name: &str) -> String {
    temp_path(&format!("{name}_noconf"), "conf")
}

/// Write a punch sheet and return its path.
pub fn write_sheet(name: &str, content: &str) -> String {
    let p = temp_path(name, "txt");
    fs::write(&p, content).expect("write punch sheet");
    p
}
