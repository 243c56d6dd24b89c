//! Key bindings.
//!
//! A [`KeyBinding`] is a set of key chords plus the help text shown in
//! footers and headers.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key code with the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyChord {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Chord without modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Whether `key` is this chord.
    ///
    /// Shift is ignored for character keys since the terminal already
    /// reports the shifted character.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        if key.code != self.code {
            return false;
        }
        let mut wanted = self.modifiers;
        let mut got = key.modifiers;
        if matches!(self.code, KeyCode::Char(_)) {
            wanted.remove(KeyModifiers::SHIFT);
            got.remove(KeyModifiers::SHIFT);
        }
        wanted == got
    }
}

/// Keys mapped to one action, with help text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    keys: Vec<KeyChord>,
    help_key: String,
    help_desc: String,
    enabled: bool,
}

impl KeyBinding {
    /// Create an enabled binding.
    pub fn new(
        keys: impl IntoIterator<Item = KeyChord>,
        help_key: impl Into<String>,
        help_desc: impl Into<String>,
    ) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            help_key: help_key.into(),
            help_desc: help_desc.into(),
            enabled: true,
        }
    }

    /// Default "next panel" binding (Tab).
    pub fn next_panel() -> Self {
        Self::new([KeyChord::plain(KeyCode::Tab)], "tab", "next panel")
    }

    /// Default "prev panel" binding (Shift+Tab).
    pub fn prev_panel() -> Self {
        Self::new(
            [
                KeyChord::new(KeyCode::BackTab, KeyModifiers::SHIFT),
                KeyChord::plain(KeyCode::BackTab),
                KeyChord::new(KeyCode::Tab, KeyModifiers::SHIFT),
            ],
            "shift+tab",
            "prev panel",
        )
    }

    /// Set whether the binding is active.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether `key` triggers this binding.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.enabled && self.keys.iter().any(|chord| chord.matches(key))
    }

    pub fn help_key(&self) -> &str {
        &self.help_key
    }

    pub fn help_desc(&self) -> &str {
        &self.help_desc
    }
}

/// Render enabled bindings as `key: desc • key: desc`.
pub fn help_text(bindings: &[KeyBinding]) -> String {
    bindings
        .iter()
        .filter(|b| b.is_enabled() && !b.help_key.is_empty() && !b.help_desc.is_empty())
        .map(|b| format!("{}: {}", b.help_key, b.help_desc))
        .collect::<Vec<_>>()
        .join(" • ")
}
