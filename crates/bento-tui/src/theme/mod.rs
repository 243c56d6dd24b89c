//! Theme components for the TUI.
//!
//! This module provides:
//! - [`Theme`] - Color palette (Catppuccin Mocha/Dracula/Osaka Jade)
//! - [`ThemeManager`] - Current theme with injected persistence

mod colors;
mod manager;

pub use colors::{Theme, CATPPUCCIN_MOCHA, DEFAULT_THEME, DRACULA, OSAKA_JADE};
pub use manager::{ThemeError, ThemeManager};
