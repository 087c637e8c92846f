//! TOML-based application configuration.
//!
//! Stores the planned length of each interval category in minutes.
//! Configuration is stored at `~/.config/pomo/config.toml`.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::{ConfigError, Result};
use crate::interval::IntervalConfig;
use crate::repository::Repository;

/// Interval lengths in minutes. Zero keeps the built-in default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default = "default_focus_duration")]
    pub focus_duration: u32,
    #[serde(default = "default_short_break")]
    pub short_break: u32,
    #[serde(default = "default_long_break")]
    pub long_break: u32,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/pomo/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

fn default_focus_duration() -> u32 {
    25
}
fn default_short_break() -> u32 {
    5
}
fn default_long_break() -> u32 {
    15
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            focus_duration: default_focus_duration(),
            short_break: default_short_break(),
            long_break: default_long_break(),
        }
    }
}

fn minutes(value: u32) -> Duration {
    Duration::from_secs(u64::from(value) * 60)
}

impl Config {
    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, falling back to defaults when the
    /// file does not exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value by dotted key (e.g. "schedule.focus_duration").
    pub fn get(&self, key: &str) -> Result<u32> {
        let value = match key {
            "schedule.focus_duration" => self.schedule.focus_duration,
            "schedule.short_break" => self.schedule.short_break,
            "schedule.long_break" => self.schedule.long_break,
            _ => return Err(ConfigError::UnknownKey(key.to_string()).into()),
        };
        Ok(value)
    }

    /// Set a config value by dotted key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let minutes: u32 = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected whole minutes, got '{value}'"),
        })?;
        let slot = match key {
            "schedule.focus_duration" => &mut self.schedule.focus_duration,
            "schedule.short_break" => &mut self.schedule.short_break,
            "schedule.long_break" => &mut self.schedule.long_break,
            _ => return Err(ConfigError::UnknownKey(key.to_string()).into()),
        };
        *slot = minutes;
        Ok(())
    }

    /// Build the runtime interval configuration on top of `repo`.
    pub fn interval_config(&self, repo: Arc<dyn Repository>) -> IntervalConfig {
        IntervalConfig::new(
            repo,
            minutes(self.schedule.focus_duration),
            minutes(self.schedule.short_break),
            minutes(self.schedule.long_break),
        )
    }
}
