//! Test utilities for bento-tui.
//!
//! Helpers for rendering into test buffers plus a few small components
//! that record what the managers do to them.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};

use crate::component::{Component, Focusable, Page, Sizeable};
use crate::event::{Command, Msg};

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 80;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 24;

/// Create a test terminal with the default dimensions (80x24).
pub fn create_test_terminal() -> Terminal<TestBackend> {
    create_test_terminal_sized(TEST_WIDTH, TEST_HEIGHT)
}

/// Create a test terminal with custom dimensions.
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Convert a buffer to a string, one line per row.
///
/// Trailing spaces are trimmed from each row.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            let cell = buffer.cell((x, y)).unwrap();
            result.push_str(cell.symbol());
        }
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    if result.ends_with('\n') {
        result.pop();
    }

    result
}

/// Render a component into a fresh `width` x `height` buffer.
pub fn render_to_string(component: &dyn Component, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    component.render(area, &mut buffer);
    buffer_to_string(&buffer)
}

/// Key press message without modifiers.
pub fn key_msg(code: KeyCode) -> Msg {
    Msg::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Key press message with modifiers.
pub fn key_msg_with(code: KeyCode, modifiers: KeyModifiers) -> Msg {
    Msg::Key(KeyEvent::new(code, modifiers))
}

/// Shift+Tab as crossterm reports it.
pub fn shift_tab() -> Msg {
    key_msg_with(KeyCode::BackTab, KeyModifiers::SHIFT)
}

/// Records calls made to it.
#[derive(Debug, Default)]
pub struct SpyComponent {
    pub name: String,
    pub updates: usize,
    pub focus_calls: usize,
    pub blur_calls: usize,
    pub focused: bool,
    pub width: u16,
    pub height: u16,
}

impl SpyComponent {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

impl Component for SpyComponent {
    fn update(&mut self, _msg: &Msg) -> Option<Command> {
        self.updates += 1;
        None
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        buf.set_stringn(
            area.x,
            area.y,
            &self.name,
            usize::from(area.width),
            ratatui::style::Style::default(),
        );
    }

    fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }
}

impl Sizeable for SpyComponent {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }
}

impl Focusable for SpyComponent {
    fn focus(&mut self) {
        self.focus_calls += 1;
        self.focused = true;
    }

    fn blur(&mut self) {
        self.blur_calls += 1;
        self.focused = false;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }
}

/// Page whose title is `name:count`; `+` bumps the count.
pub struct CounterPage {
    name: String,
    count: u32,
    title: String,
    width: u16,
    height: u16,
}

impl CounterPage {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            count: 0,
            title: format!("{name}:0"),
            width: 0,
            height: 0,
        }
    }
}

impl Component for CounterPage {
    fn update(&mut self, msg: &Msg) -> Option<Command> {
        if let Msg::Key(key) = msg {
            if key.code == KeyCode::Char('+') {
                self.count += 1;
                self.title = format!("{}:{}", self.name, self.count);
            }
        }
        None
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        buf.set_stringn(
            area.x,
            area.y,
            &self.title,
            usize::from(area.width),
            ratatui::style::Style::default(),
        );
    }

    fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }
}

impl Sizeable for CounterPage {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }
}

impl Page for CounterPage {
    fn title(&self) -> &str {
        &self.title
    }
}

/// Leaf that draws fixed text at the top-left of its area.
pub struct TextLeaf {
    text: String,
}

impl TextLeaf {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl Component for TextLeaf {
    fn update(&mut self, _msg: &Msg) -> Option<Command> {
        None
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_stringn(
            area.x,
            area.y,
            &self.text,
            usize::from(area.width),
            ratatui::style::Style::default(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_terminal() {
        let terminal = create_test_terminal();
        let size = terminal.size().unwrap();
        assert_eq!(size.width, TEST_WIDTH);
        assert_eq!(size.height, TEST_HEIGHT);
    }

    #[test]
    fn test_buffer_to_string_trims_rows() {
        let leaf = TextLeaf::new("hi");
        assert_eq!(render_to_string(&leaf, 5, 2), "hi\n");
    }
}
