//! Theme name persistence.
//!
//! The TUI never reads or writes theme files itself; it is handed a
//! [`ThemeStore`] and asks it to load or save the selected preset name.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::debug;

use crate::config::{config_dir, ConfigError, APP_DIR};

/// On-disk shape of the stored theme: `{"theme": "<name>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTheme {
    pub theme: String,
}

/// Load/save access to the persisted theme name.
pub trait ThemeStore {
    /// Load the stored theme name, `None` when nothing was stored yet.
    fn load(&self) -> Result<Option<String>, ConfigError>;

    /// Persist a theme name.
    fn save(&self, name: &str) -> Result<(), ConfigError>;
}

/// JSON file backed store.
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    /// Store at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<config dir>/bentotui/theme.json`.
    pub fn default_location() -> Result<Self, ConfigError> {
        Ok(Self::new(config_dir()?.join(APP_DIR).join("theme.json")))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Result<Option<String>, ConfigError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ConfigError::Io(e)),
        };
        let stored: StoredTheme = serde_json::from_str(&content).map_err(ConfigError::Parse)?;
        Ok(Some(stored.theme).filter(|name| !name.is_empty()))
    }

    fn save(&self, name: &str) -> Result<(), ConfigError> {
        let stored = StoredTheme {
            theme: name.to_string(),
        };
        let content = serde_json::to_string_pretty(&stored).map_err(ConfigError::Serialize)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), theme = name, "Saved theme");
        Ok(())
    }
}

/// In-memory store, shared between clones.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    name: Rc<RefCell<Option<String>>>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a name.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Rc::new(RefCell::new(Some(name.into()))),
        }
    }

    /// Last saved name.
    pub fn stored(&self) -> Option<String> {
        self.name.borrow().clone()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<String>, ConfigError> {
        Ok(self.stored())
    }

    fn save(&self, name: &str) -> Result<(), ConfigError> {
        *self.name.borrow_mut() = Some(name.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_missing_file_loads_none() {
        let dir = TempDir::new().unwrap();
        let store = FileThemeStore::new(dir.path().join("theme.json"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = FileThemeStore::new(dir.path().join(APP_DIR).join("theme.json"));

        store.save("dracula").unwrap();
        assert_eq!(store.load().unwrap(), Some("dracula".to_string()));

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"theme\": \"dracula\""));
    }

    #[test]
    fn test_file_store_corrupt_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(&path, "garbage").unwrap();

        let store = FileThemeStore::new(path);
        assert!(matches!(store.load(), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_memory_store_shares_state_between_clones() {
        let store = MemoryThemeStore::new();
        let observer = store.clone();
        assert_eq!(observer.load().unwrap(), None);

        store.save("osaka-jade").unwrap();
        assert_eq!(observer.stored(), Some("osaka-jade".to_string()));
    }
}
