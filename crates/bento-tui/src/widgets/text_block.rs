//! Plain text leaf component.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Text,
    widgets::{Paragraph, Widget},
};

use crate::component::{Component, Sizeable};
use crate::event::{Command, Msg};
use crate::text::wrap_text;
use crate::theme::Theme;

/// Word-wrapped text that fills whatever area it is given.
#[derive(Debug, Clone, Default)]
pub struct TextBlock {
    text: String,
    muted: bool,
    theme: Theme,
    width: u16,
    height: u16,
}

impl TextBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Render in the theme's muted color.
    #[must_use]
    pub fn muted(mut self) -> Self {
        self.muted = true;
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Wrapped lines for the last assigned width.
    pub fn lines(&self) -> Vec<String> {
        wrap_text(&self.text, usize::from(self.width))
    }
}

impl Component for TextBlock {
    fn update(&mut self, msg: &Msg) -> Option<Command> {
        if let Msg::ThemeChanged { theme, .. } = msg {
            self.theme = theme.clone();
        }
        None
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        let fg = if self.muted {
            self.theme.muted
        } else {
            self.theme.text
        };
        let lines = wrap_text(&self.text, usize::from(area.width));
        Paragraph::new(Text::from(lines.join("\n")))
            .style(Style::default().fg(fg))
            .render(area, buf);
    }

    fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }
}

impl Sizeable for TextBlock {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }
}
