//! Application settings document
//!
//! A small TOML document of user preferences. Absent files and absent
//! fields degrade to defaults rather than failing.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application title used in derived strings
pub const APP_TITLE: &str = env!("CARGO_PKG_NAME");

/// Application version used in derived strings
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-tunable application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppSettings {
    /// Override for the outgoing user agent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl AppSettings {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let contents =
            fs::read_to_string(path).map_err(|e| SettingsError::IoError(e.to_string()))?;
        toml::from_str(&contents).map_err(|e| SettingsError::ParseError(e.to_string()))
    }

    /// Load settings, falling back to defaults when the file is absent
    pub fn load_or_default(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// The effective user agent: the override when present and
    /// non-empty, else `APP_TITLE/APP_VERSION`
    pub fn user_agent(&self) -> String {
        match self.user_agent.as_deref() {
            Some(ua) if !ua.is_empty() => ua.to_string(),
            _ => default_user_agent(),
        }
    }
}

/// The derived `TITLE/VERSION` user agent
pub fn default_user_agent() -> String {
    format!("{}/{}", APP_TITLE, APP_VERSION)
}

/// Settings loading errors
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}
