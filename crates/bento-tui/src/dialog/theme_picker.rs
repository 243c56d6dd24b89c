//! Theme picker content for a [`Custom`](super::Custom) dialog.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use super::frame::render_lines;
use crate::component::{Component, Sizeable};
use crate::event::{Command, Msg};
use crate::text::fit_width;
use crate::theme::Theme;

const FOOTER_HINT: &str = "enter apply  esc close";
const NO_MATCHES: &str = "No matching themes";
// search label, input, blank, blank, hint
const CHROME_ROWS: u16 = 5;

/// Filterable list of theme presets.
///
/// Typing narrows the list, Up/Down (or k/j) move the selection, Enter
/// announces the choice with [`Msg::ThemeChanged`] and closes the dialog.
/// Esc belongs to the hosting dialog manager, which closes the dialog.
/// Persisting the choice is left to whoever owns the theme context.
pub struct ThemePicker {
    all: Vec<String>,
    filtered: Vec<String>,
    selected: usize,
    query: String,
    current: String,
    theme: Theme,
    width: u16,
    height: u16,
}

impl ThemePicker {
    pub fn new(current: impl Into<String>, theme: Theme) -> Self {
        let all: Vec<String> = Theme::available().iter().map(|s| (*s).to_string()).collect();
        let mut picker = Self {
            filtered: all.clone(),
            all,
            selected: 0,
            query: String::new(),
            current: current.into(),
            theme,
            width: 0,
            height: 0,
        };
        picker.align_to_current();
        picker
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Visible preset names for the current query.
    pub fn filtered(&self) -> &[String] {
        &self.filtered
    }

    /// Highlighted preset, if any matches.
    pub fn selected(&self) -> Option<&str> {
        self.filtered.get(self.selected).map(String::as_str)
    }

    fn align_to_current(&mut self) {
        self.selected = self
            .filtered
            .iter()
            .position(|name| *name == self.current)
            .unwrap_or(0);
    }

    fn refilter(&mut self) {
        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            self.filtered.clone_from(&self.all);
            self.align_to_current();
            return;
        }
        let previous = self.selected().map(str::to_string);
        self.filtered = self
            .all
            .iter()
            .filter(|name| name.to_lowercase().contains(&query))
            .cloned()
            .collect();
        self.selected = previous
            .and_then(|prev| self.filtered.iter().position(|name| *name == prev))
            .unwrap_or(0);
    }

    fn apply(&self) -> Option<Command> {
        let name = self.selected()?.to_string();
        let theme = Theme::preset(&name)?;
        Command::batch([
            Some(Command::msg(Msg::ThemeChanged { name, theme })),
            Some(Command::msg(Msg::CloseDialog)),
        ])
    }
}

impl Component for ThemePicker {
    fn update(&mut self, msg: &Msg) -> Option<Command> {
        let key = match msg {
            Msg::ThemeChanged { name, theme } => {
                self.current.clone_from(name);
                self.theme = theme.clone();
                self.align_to_current();
                return None;
            }
            Msg::Key(key) => key,
            _ => return None,
        };
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return None;
        }

        match key.code {
            KeyCode::Enter => return self.apply(),
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.filtered.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Backspace => {
                self.query.pop();
                self.refilter();
            }
            KeyCode::Char(c) => {
                self.query.push(c);
                self.refilter();
            }
            _ => {}
        }
        None
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        let width = usize::from(area.width);
        let text = Style::default().fg(self.theme.dialog_text);
        let muted = Style::default().fg(self.theme.muted);

        let mut rows: Vec<(String, Style)> = vec![
            (fit_width("Search", width), muted),
            (
                fit_width(&format!(" {}", self.query), width),
                Style::default().fg(self.theme.text).bg(self.theme.input_bg),
            ),
            (String::new(), text),
        ];

        if self.filtered.is_empty() {
            rows.push((fit_width(NO_MATCHES, width), muted));
        } else {
            let max_rows = usize::from(area.height.saturating_sub(CHROME_ROWS).max(1));
            let start = (self.selected + 1).saturating_sub(max_rows);
            for (i, name) in self.filtered.iter().enumerate().skip(start).take(max_rows) {
                let marker = if *name == self.current { '●' } else { ' ' };
                let line = fit_width(&format!("{marker} {name}"), width);
                let style = if i == self.selected {
                    Style::default()
                        .fg(self.theme.selection_text)
                        .bg(self.theme.selection_bg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    text
                };
                rows.push((line, style));
            }
        }

        rows.push((String::new(), text));
        rows.push((fit_width(FOOTER_HINT, width), muted));

        for (row, (line, style)) in (area.y..area.bottom()).zip(&rows) {
            let row_area = Rect::new(area.x, row, area.width, 1);
            render_lines([line.as_str()], row_area, *style, buf);
        }
    }

    fn set_size(&mut self, width: u16, height: u16) {
        self.width = width.max(1);
        self.height = height.max(1);
    }
}

impl Sizeable for ThemePicker {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }
}
