use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$CHECKIN_HOME`, or `~/.checkin`.
pub fn checkin_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("CHECKIN_HOME") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".checkin"))
}

pub fn ensure_checkin_home() -> Result<PathBuf> {
    let dir = checkin_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn checkins_path() -> Result<PathBuf> {
    Ok(ensure_checkin_home()?.join("checkins.jsonl"))
}

pub fn facial_path() -> Result<PathBuf> {
    Ok(ensure_checkin_home()?.join("facial.jsonl"))
}
