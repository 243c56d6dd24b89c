//! UI configuration for bento.
//!
//! The configuration is a small JSON document. Every field has a serde
//! default so partial or older files keep loading.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory name used under the user config dir.
pub const APP_DIR: &str = "bentotui";

/// Top-level UI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme preset name.
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Whether the shell draws the header bar.
    #[serde(default = "default_true")]
    pub show_header: bool,

    /// Whether the shell draws the footer bar.
    #[serde(default = "default_true")]
    pub show_footer: bool,

    /// Idle tick interval for the event loop.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_theme() -> String {
    "catppuccin-mocha".into()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            show_header: true,
            show_footer: true,
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl UiConfig {
    /// Load configuration from a file.
    ///
    /// A missing file is not an error: defaults are returned instead.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(ConfigError::Io(e)),
        };
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Default location: `<config dir>/bentotui/config.json`.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join(APP_DIR).join("config.json"))
    }
}

/// Resolve the user config directory.
///
/// Uses `$XDG_CONFIG_HOME` when set, otherwise `$HOME/.config`.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    if let Some(dir) = std::env::var_os("XDG_CONFIG_HOME").filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(|home| PathBuf::from(home).join(".config"))
        .ok_or(ConfigError::NoConfigDir)
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Neither `XDG_CONFIG_HOME` nor `HOME` is set.
    #[error("could not determine the user config directory")]
    NoConfigDir,
}
