//! User configuration.
//!
//! Lives at `<config dir>/liveterm/config.toml`. Every field has a default,
//! so an empty or partial file is fine and a missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::capability::AnsiMode;
use crate::theme::Theme;

/// Errors from loading or saving the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Force ANSI output on or off, or probe the terminal.
    pub ansi: AnsiMode,
    pub theme: Theme,
    pub spinner: SpinnerConfig,
    pub animation: AnimationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinnerConfig {
    /// Milliseconds between spinner frames
    pub interval_ms: u64,
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self { interval_ms: 80 }
    }
}

impl SpinnerConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub marquee_interval_ms: u64,
    pub marquee_width: usize,
    pub shimmer_interval_ms: u64,
    /// Width of the shimmer highlight in characters
    pub shimmer_window: usize,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            marquee_interval_ms: 100,
            marquee_width: 30,
            shimmer_interval_ms: 60,
            shimmer_window: 4,
        }
    }
}

impl Config {
    /// Default config file location.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("liveterm").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Write to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, content).map_err(write_err)
    }

    pub fn marquee_interval(&self) -> Duration {
        Duration::from_millis(self.animation.marquee_interval_ms)
    }

    pub fn shimmer_interval(&self) -> Duration {
        Duration::from_millis(self.animation.shimmer_interval_ms)
    }
}
