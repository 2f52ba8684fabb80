//! CLI configuration, read from `~/.config/timeblock/config.toml`.
//! Missing file means defaults: events under `~/.timeblock/events`,
//! user "local".

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Directory event documents are stored in
    #[serde(default = "default_events_dir")]
    pub events_dir: String,

    /// User whose schedule this machine manages
    #[serde(default = "default_user")]
    pub user: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            events_dir: default_events_dir(),
            user: default_user(),
        }
    }
}

fn default_events_dir() -> String {
    "~/.timeblock/events".to_string()
}

fn default_user() -> String {
    "local".to_string()
}

/// Get the config file path (~/.config/timeblock/config.toml)
pub fn config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("timeblock");
    Ok(config_dir.join("config.toml"))
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Invalid config at {}", path.display()))
    }

    /// Resolve the events directory, expanding a leading `~/`.
    pub fn events_dir(&self) -> Result<PathBuf> {
        if let Some(rest) = self.events_dir.strip_prefix("~/") {
            Ok(dirs::home_dir()
                .context("Could not determine home directory")?
                .join(rest))
        } else {
            Ok(PathBuf::from(&self.events_dir))
        }
    }
}
