//! Status bar widget.
//!
//! Format: `left  help ............ right`

use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::component::{Bindable, Component, Sizeable};
use crate::event::{Command, Msg};
use crate::keys::{help_text, KeyBinding};
use crate::text::{fit_width, visual_width};
use crate::theme::Theme;

/// Single-row status line.
#[derive(Debug, Clone, Default)]
pub struct StatusBar {
    left: String,
    right: String,
    help: Vec<KeyBinding>,
    theme: Theme,
    width: u16,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn left(mut self, text: impl Into<String>) -> Self {
        self.left = text.into();
        self
    }

    #[must_use]
    pub fn right(mut self, text: impl Into<String>) -> Self {
        self.right = text.into();
        self
    }

    #[must_use]
    pub fn help_from(mut self, source: &impl Bindable) -> Self {
        self.help = source.bindings();
        self
    }

    pub fn set_left(&mut self, text: impl Into<String>) {
        self.left = text.into();
    }

    pub fn set_right(&mut self, text: impl Into<String>) {
        self.right = text.into();
    }

    /// Row text for `width` cells; the right side wins when space is short.
    pub fn line(&self, width: u16) -> String {
        let width = usize::from(width);
        let help = help_text(&self.help);
        let left = [self.left.as_str(), help.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("  ");

        let right = fit_width(&self.right, width.min(visual_width(&self.right)));
        let right_width = visual_width(&right);
        if right_width >= width {
            return right;
        }
        let left_width = width - right_width - 1;
        format!("{} {right}", fit_width(&left, left_width))
    }
}

impl Component for StatusBar {
    fn update(&mut self, msg: &Msg) -> Option<Command> {
        match msg {
            Msg::Resize { width, .. } => self.width = *width,
            Msg::ThemeChanged { theme, .. } => self.theme = theme.clone(),
            _ => {}
        }
        None
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let style = Style::default()
            .fg(self.theme.status_text)
            .bg(self.theme.status_bg);
        let row = Rect::new(area.x, area.y, area.width, 1);
        buf.set_style(row, style);
        buf.set_stringn(
            row.x,
            row.y,
            self.line(row.width),
            usize::from(row.width),
            style,
        );
    }

    fn set_size(&mut self, width: u16, _height: u16) {
        self.width = width;
    }
}

impl Sizeable for StatusBar {
    fn size(&self) -> (u16, u16) {
        (self.width, 1)
    }
}
