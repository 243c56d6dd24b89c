//! Modal dialog manager.
//!
//! [`DialogManager`] holds at most one active [`Dialog`]. Opening a dialog
//! replaces the active one; nothing stacks. While a dialog is open:
//! - Esc closes it without running any callback
//! - Enter on a [`Confirm`] closes it and schedules its callback
//! - everything else, Enter on a [`Custom`] included, goes to the dialog
//!
//! [`DialogManager::is_open`] tells the owner whether input belongs to the
//! modal or to the page layer underneath.

mod confirm;
mod custom;
mod frame;
mod theme_picker;

pub use confirm::{Confirm, OnConfirm};
pub use custom::Custom;
pub use frame::render_frame;
pub use theme_picker::ThemePicker;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{buffer::Buffer, layout::Rect};
use tracing::debug;

use crate::component::{Component, Sizeable};
use crate::event::{Command, Msg};
use crate::theme::Theme;

/// The dialog kinds the manager knows how to drive.
#[derive(Debug)]
pub enum Dialog {
    Confirm(Confirm),
    Custom(Custom),
}

impl Dialog {
    pub fn title(&self) -> &str {
        match self {
            Self::Confirm(d) => d.title(),
            Self::Custom(d) => d.title(),
        }
    }

    /// Size last assigned to the dialog.
    pub fn size(&self) -> (u16, u16) {
        match self {
            Self::Confirm(d) => d.size(),
            Self::Custom(d) => d.size(),
        }
    }

    fn set_size(&mut self, width: u16, height: u16) {
        match self {
            Self::Confirm(d) => d.set_size(width, height),
            Self::Custom(d) => d.set_size(width, height),
        }
    }

    fn set_theme(&mut self, theme: &Theme) {
        match self {
            Self::Confirm(d) => d.theme = theme.clone(),
            Self::Custom(d) => d.theme = theme.clone(),
        }
    }

    fn init(&mut self) -> Option<Command> {
        match self {
            Self::Confirm(_) => None,
            Self::Custom(d) => d.init(),
        }
    }

    fn update(&mut self, msg: &Msg) -> Option<Command> {
        match self {
            Self::Confirm(_) => None,
            Self::Custom(d) => d.update(msg),
        }
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        match self {
            Self::Confirm(d) => d.render(area, buf),
            Self::Custom(d) => d.render(area, buf),
        }
    }
}

impl From<Confirm> for Dialog {
    fn from(dialog: Confirm) -> Self {
        Self::Confirm(dialog)
    }
}

impl From<Custom> for Dialog {
    fn from(dialog: Custom) -> Self {
        Self::Custom(dialog)
    }
}

/// Owner of the active dialog.
#[derive(Debug, Default)]
pub struct DialogManager {
    active: Option<Dialog>,
    theme: Theme,
    width: u16,
    height: u16,
}

impl DialogManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `dialog` active, discarding any current one.
    ///
    /// The dialog is themed and sized to the last viewport right away.
    /// Returns the dialog's init command.
    pub fn open(&mut self, dialog: impl Into<Dialog>) -> Option<Command> {
        let mut dialog = dialog.into();
        dialog.set_theme(&self.theme);
        dialog.set_size(self.width, self.height);
        if let Some(prev) = &self.active {
            debug!(replaced = prev.title(), "Replacing open dialog");
        }
        debug!(title = dialog.title(), "Opening dialog");
        let active = self.active.insert(dialog);
        active.init()
    }

    pub fn close(&mut self) {
        if let Some(dialog) = self.active.take() {
            debug!(title = dialog.title(), "Closing dialog");
        }
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&Dialog> {
        self.active.as_ref()
    }

    /// Theme applied to dialogs opened from now on, and to the open one.
    pub fn set_theme(&mut self, theme: Theme) {
        if let Some(active) = self.active.as_mut() {
            active.set_theme(&theme);
        }
        self.theme = theme;
    }

    /// Process an owned message.
    ///
    /// [`Msg::OpenDialog`] carries the dialog by value, so it can only be
    /// consumed here; every other message goes through `update`.
    pub fn dispatch(&mut self, msg: Msg) -> Option<Command> {
        match msg {
            Msg::OpenDialog(dialog) => self.open(*dialog),
            other => self.update(&other),
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Option<Option<Command>> {
        match key.code {
            KeyCode::Esc => {
                self.close();
                Some(None)
            }
            KeyCode::Enter => {
                let Some(Dialog::Confirm(confirm)) = self.active.as_mut() else {
                    return None;
                };
                let callback = confirm.take_callback();
                self.close();
                Some(callback.map(|cb| Command::new(move || Some(cb()))))
            }
            _ => None,
        }
    }
}

impl Component for DialogManager {
    fn update(&mut self, msg: &Msg) -> Option<Command> {
        match msg {
            Msg::CloseDialog => {
                self.close();
                return None;
            }
            Msg::Resize { width, height } => {
                self.set_size(*width, *height);
                return None;
            }
            Msg::ThemeChanged { theme, .. } => self.set_theme(theme.clone()),
            Msg::Key(key) if self.is_open() => {
                if let Some(cmd) = self.handle_key(key) {
                    return cmd;
                }
            }
            _ => {}
        }
        self.active.as_mut()?.update(msg)
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        if let Some(dialog) = &self.active {
            dialog.render(area, buf);
        }
    }

    fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        if let Some(active) = self.active.as_mut() {
            active.set_size(width, height);
        }
    }
}

impl Sizeable for DialogManager {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::shared;
    use crate::test_utils::{buffer_to_string, key_msg, SpyComponent};
    use std::rc::Rc;

    fn sized_manager() -> DialogManager {
        let mut manager = DialogManager::new();
        manager.set_size(80, 24);
        manager
    }

    #[test]
    fn test_open_sizes_dialog_to_viewport() {
        let mut manager = sized_manager();
        let _ = manager.dispatch(Msg::open_dialog(Confirm::new("t", "m")));

        assert!(manager.is_open());
        assert_eq!(manager.active().unwrap().size(), (80, 24));
    }

    #[test]
    fn test_esc_closes_without_callback() {
        let mut manager = sized_manager();
        let _ = manager.open(Confirm::new("t", "m").on_confirm(|| Msg::Quit));

        let cmd = manager.update(&key_msg(KeyCode::Esc));
        assert!(!manager.is_open());
        assert!(cmd.is_none());
    }

    #[test]
    fn test_esc_closes_custom_dialog() {
        let mut manager = sized_manager();
        let _ = manager.open(Custom::empty("c"));
        let _ = manager.update(&key_msg(KeyCode::Esc));
        assert!(!manager.is_open());
    }

    #[test]
    fn test_enter_on_confirm_schedules_callback() {
        let mut manager = sized_manager();
        let _ = manager.open(Confirm::new("Quit", "Leave?").on_confirm(|| Msg::navigate("bye")));

        let cmd = manager.update(&key_msg(KeyCode::Enter));
        assert!(!manager.is_open());

        let msgs = cmd.expect("callback command").run();
        assert_eq!(msgs.len(), 1);
        assert!(matches!(&msgs[0], Msg::Navigate(name) if name == "bye"));
    }

    #[test]
    fn test_enter_on_confirm_without_callback_just_closes() {
        let mut manager = sized_manager();
        let _ = manager.open(Confirm::new("t", "m"));
        assert!(manager.update(&key_msg(KeyCode::Enter)).is_none());
        assert!(!manager.is_open());
    }

    #[test]
    fn test_enter_on_custom_reaches_content() {
        let spy = shared(SpyComponent::new("body"));
        let mut manager = sized_manager();
        let _ = manager.open(Custom::new("c", Rc::clone(&spy)));

        let _ = manager.update(&key_msg(KeyCode::Enter));
        assert!(manager.is_open());
        assert_eq!(spy.borrow().updates, 1);
    }

    #[test]
    fn test_open_replaces_active_dialog() {
        let mut manager = sized_manager();
        let _ = manager.open(Confirm::new("A", "first"));
        let _ = manager.open(Confirm::new("B", "second"));

        assert_eq!(manager.active().unwrap().title(), "B");
        let _ = manager.update(&Msg::CloseDialog);
        assert!(!manager.is_open());
    }

    #[test]
    fn test_resize_reaches_open_dialog() {
        let mut manager = sized_manager();
        let _ = manager.open(Custom::empty("c"));
        let _ = manager.update(&Msg::Resize {
            width: 120,
            height: 40,
        });
        assert_eq!(manager.size(), (120, 40));
        assert_eq!(manager.active().unwrap().size(), (60, 20));
    }

    #[test]
    fn test_dispatch_forwards_other_messages() {
        let mut manager = sized_manager();
        let _ = manager.open(Custom::empty("c"));
        let _ = manager.dispatch(Msg::CloseDialog);
        assert!(!manager.is_open());
    }

    #[test]
    fn test_messages_are_dropped_when_closed() {
        let mut manager = sized_manager();
        assert!(manager.update(&key_msg(KeyCode::Enter)).is_none());
        assert!(!manager.is_open());
    }

    #[test]
    fn test_render_only_when_open() {
        let area = Rect::new(0, 0, 80, 24);
        let mut manager = sized_manager();

        let mut buf = Buffer::empty(area);
        manager.render(area, &mut buf);
        assert_eq!(buffer_to_string(&buf).trim(), "");

        let _ = manager.open(Confirm::new("Delete", "Remove item?"));
        let mut buf = Buffer::empty(area);
        manager.render(area, &mut buf);
        assert!(buffer_to_string(&buf).contains("Remove item?"));
    }
}
