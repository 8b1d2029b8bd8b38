//! Settings and configuration utilities.
//!
//! This module reads settings from $HOME/.prompt-coach/settings.json and uses
//! them as a fallback for environment variables.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Overrides the progress file location.
pub const PROGRESS_ENV: &str = "PROMPT_COACH_PROGRESS";

/// Directory exported documents are written to.
pub const EXPORT_DIR_ENV: &str = "PROMPT_COACH_EXPORT_DIR";

const SETTINGS_DIR: &str = ".prompt-coach";

/// Settings loaded from $HOME/.prompt-coach/settings.json.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// Environment variable overrides.
    #[serde(default)]
    pub env: HashMap<String, String>,
}

impl Settings {
    /// Loads settings from the default location.
    pub fn load() -> Result<Self> {
        let settings_path = Self::get_settings_path()?;
        Self::load_from_path(&settings_path)
    }

    /// Loads settings from a specific path.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        serde_json::from_str::<Self>(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))
    }

    /// Returns the settings directory, which also holds the progress file.
    pub fn get_settings_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to determine home directory")?;

        Ok(home_dir.join(SETTINGS_DIR))
    }

    /// Returns the default settings path.
    pub fn get_settings_path() -> Result<PathBuf> {
        Ok(Self::get_settings_dir()?.join("settings.json"))
    }

    /// Returns an environment variable with fallback to settings.
    pub fn get_env_var(&self, key: &str) -> Option<String> {
        match env::var(key) {
            Ok(value) => Some(value),
            Err(_) => self.env.get(key).cloned(),
        }
    }

    /// Progress file override, if configured.
    pub fn progress_path(&self) -> Option<PathBuf> {
        self.get_env_var(PROGRESS_ENV).map(PathBuf::from)
    }

    /// Export directory override, if configured.
    pub fn export_dir(&self) -> Option<PathBuf> {
        self.get_env_var(EXPORT_DIR_ENV).map(PathBuf::from)
    }
}
