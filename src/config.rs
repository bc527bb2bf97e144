// File: ./src/config.rs
// Handles configuration loading and defaults for the todolist binary.
use anyhow::{Context, Error, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.toml";

fn default_title() -> String {
    "Today's Todos".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_prompt() -> String {
    "> ".to_string()
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: default_title(),
            log_level: default_log_level(),
            prompt: default_prompt(),
        }
    }
}

impl Config {
    /// `<config dir>/config.toml` as resolved by the platform conventions.
    pub fn default_path() -> Result<PathBuf> {
        let proj = ProjectDirs::from("com", "todolist", "todolist")
            .ok_or_else(|| anyhow::anyhow!("No home directory"))?;
        Ok(proj.config_dir().join(CONFIG_FILENAME))
    }

    /// Load the configuration from `path`.
    /// Returns a contextualized error if the file is missing, unreadable or invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))?;

        Ok(config)
    }

    /// Detects whether `err` came from a missing config file.
    pub fn is_missing_config_error(err: &Error) -> bool {
        if err.to_string().contains("Config file not found") {
            return true;
        }

        err.chain().any(|cause| {
            cause
                .downcast_ref::<std::io::Error>()
                .is_some_and(|io_err| io_err.kind() == std::io::ErrorKind::NotFound)
        })
    }

    /// Like `load_from`, but a missing file yields `None` instead of an error.
    pub fn load_optional(path: &Path) -> Result<Option<Self>> {
        match Self::load_from(path) {
            Ok(config) => Ok(Some(config)),
            Err(e) if Self::is_missing_config_error(&e) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Level for the terminal logger. Unknown names fall back to `Warn`.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Warn)
    }
}
