use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::state::ensure_checkin_home;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub user: UserSection,
    #[serde(default)]
    pub analysis: AnalysisSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSection {
    /// Key for stored check-ins
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSection {
    /// Use the sentiment lexicon; false means polarity is always neutral
    pub sentiment: bool,
    /// Persist each analysis
    pub save: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSection {
    /// tracing filter used when RUST_LOG is unset
    pub level: String,
}

impl Default for UserSection {
    fn default() -> Self {
        Self { id: "local".to_string() }
    }
}

impl Default for AnalysisSection {
    fn default() -> Self {
        Self {
            sentiment: true,
            save: true,
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self { level: "warn".to_string() }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_checkin_home()?.join("config.toml"))
}

pub fn parse_config(s: &str) -> Result<Config> {
    toml::from_str(s).context("parse config.toml")
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let cfg = parse_config("[user]\nid = \"ana\"\n").unwrap();
        assert_eq!(cfg.user.id, "ana");
        assert!(cfg.analysis.sentiment);
        assert_eq!(cfg.logging.level, "warn");
    }

    #[test]
    fn test_default_round_trips() {
        let s = toml::to_string_pretty(&Config::default()).unwrap();
        assert_eq!(parse_config(&s).unwrap(), Config::default());
    }

    #[test]
    fn test_bad_config_is_an_error() {
        assert!(parse_config("[analysis]\nsentiment = \"maybe\"\n").is_err());
    }
}
