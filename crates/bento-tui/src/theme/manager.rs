//! Theme context.
//!
//! [`ThemeManager`] tracks the selected preset and persists it through an
//! injected [`ThemeStore`]. It is passed explicitly to whoever needs it;
//! there is no process-wide theme.

use bento_config::ThemeStore;
use tracing::warn;

use super::colors::{Theme, DEFAULT_THEME};

/// Errors from theme selection.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("unknown theme {0:?}")]
    UnknownTheme(String),
}

/// Current theme plus its persistence.
pub struct ThemeManager {
    store: Box<dyn ThemeStore>,
    name: String,
    theme: Theme,
}

impl ThemeManager {
    /// Load the stored theme, falling back to the default preset.
    pub fn load(store: impl ThemeStore + 'static) -> Self {
        let stored = match store.load() {
            Ok(name) => name,
            Err(e) => {
                warn!(error = %e, "Could not load stored theme");
                None
            }
        };
        let (name, theme) = stored
            .and_then(|name| Theme::preset(&name).map(|theme| (name, theme)))
            .unwrap_or_else(|| (DEFAULT_THEME.to_string(), Theme::default()));
        Self {
            store: Box::new(store),
            name,
            theme,
        }
    }

    pub fn current(&self) -> &Theme {
        &self.theme
    }

    pub fn current_name(&self) -> &str {
        &self.name
    }

    /// Switch to a preset and persist it.
    ///
    /// A failed save is logged; the switch still happens.
    pub fn set(&mut self, name: &str) -> Result<Theme, ThemeError> {
        let theme = self.apply(name)?;
        if let Err(e) = self.store.save(name) {
            warn!(theme = name, error = %e, "Could not persist theme");
        }
        Ok(theme)
    }

    /// Switch to a preset without persisting it.
    pub fn preview(&mut self, name: &str) -> Result<Theme, ThemeError> {
        self.apply(name)
    }

    fn apply(&mut self, name: &str) -> Result<Theme, ThemeError> {
        let theme = Theme::preset(name).ok_or_else(|| ThemeError::UnknownTheme(name.into()))?;
        self.name = name.to_string();
        self.theme = theme.clone();
        Ok(theme)
    }
}
