//! Single-line text input.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::component::{Component, Focusable, Sizeable};
use crate::event::{Command, Msg};
use crate::theme::Theme;

/// One-line input with a prompt, placeholder and prefix completion.
///
/// The cursor is a character index. Enter is left to the owner, which
/// decides what submitting means; Tab accepts the pending completion.
#[derive(Debug, Clone)]
pub struct InputRow {
    content: String,
    cursor: usize,
    prompt: String,
    placeholder: String,
    suggestions: Vec<String>,
    focused: bool,
    theme: Theme,
    width: u16,
    height: u16,
}

impl Default for InputRow {
    fn default() -> Self {
        Self::new()
    }
}

impl InputRow {
    pub fn new() -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            prompt: "> ".to_string(),
            placeholder: String::new(),
            suggestions: Vec::new(),
            focused: false,
            theme: Theme::default(),
            width: 0,
            height: 0,
        }
    }

    #[must_use]
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Values offered as completions for a matching prefix.
    #[must_use]
    pub fn suggestions<I, S>(mut self, suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suggestions = suggestions.into_iter().map(Into::into).collect();
        self
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.content = value.into();
        self.cursor = self.content.chars().count();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Take the content, leaving the input empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.content)
    }

    /// First suggestion extending the current content, if any.
    pub fn completion(&self) -> Option<&str> {
        if self.content.is_empty() {
            return None;
        }
        self.suggestions
            .iter()
            .find(|s| s.len() > self.content.len() && s.starts_with(&self.content))
            .map(String::as_str)
    }

    pub fn insert(&mut self, ch: char) {
        let at = self.byte_offset(self.cursor);
        self.content.insert(at, ch);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.content.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.content.chars().count() {
            let at = self.byte_offset(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.content.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.content.chars().count();
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.content
            .char_indices()
            .nth(chars)
            .map_or(self.content.len(), |(i, _)| i)
    }

    /// Apply an editing key. Returns whether the key was used.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }
        match key.code {
            KeyCode::Char(c) => self.insert(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            KeyCode::Tab => match self.completion() {
                Some(completion) => {
                    let completion = completion.to_string();
                    self.set_value(completion);
                }
                None => return false,
            },
            _ => return false,
        }
        true
    }
}

impl Component for InputRow {
    fn update(&mut self, msg: &Msg) -> Option<Command> {
        match msg {
            Msg::Key(key) if self.focused => {
                self.handle_key(key);
            }
            Msg::ThemeChanged { theme, .. } => self.theme = theme.clone(),
            _ => {}
        }
        None
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let t = &self.theme;
        let text = Style::default().fg(t.text).bg(t.input_bg);
        let dim = Style::default().fg(t.muted).bg(t.input_bg);
        let active = Style::default().fg(t.accent).bg(t.input_bg);

        let mut spans = vec![Span::styled(self.prompt.as_str(), active)];
        if self.content.is_empty() {
            if self.focused {
                spans.push(Span::styled("_", active));
            }
            spans.push(Span::styled(self.placeholder.as_str(), dim));
        } else {
            let at = self.byte_offset(self.cursor);
            let (before, after) = self.content.split_at(at);
            spans.push(Span::styled(before, text));
            if self.focused {
                spans.push(Span::styled(if after.is_empty() { "_" } else { "|" }, active));
            }
            spans.push(Span::styled(after, text));
            if let Some(rest) = self.completion().and_then(|c| c.get(self.content.len()..)) {
                spans.push(Span::styled(rest, dim));
            }
        }

        let row = Rect::new(area.x, area.y, area.width, 1);
        Paragraph::new(Line::from(spans)).style(text).render(row, buf);
    }

    fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }
}

impl Sizeable for InputRow {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }
}

impl Focusable for InputRow {
    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }
}
