//! bento-config: Headless configuration for the bento terminal UI toolkit
//!
//! This crate provides the parts of bento that never touch a terminal:
//! - UI configuration (theme, chrome bars, tick rate)
//! - Theme persistence behind the [`ThemeStore`] trait
//! - The shared [`ConfigError`] type

pub mod config;
pub mod theme_store;

// Re-export commonly used types
pub use config::{config_dir, ConfigError, UiConfig, APP_DIR};
pub use theme_store::{FileThemeStore, MemoryThemeStore, StoredTheme, ThemeStore};

/// Returns the config crate version.
pub fn config_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
