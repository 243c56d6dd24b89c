//! One-row header and footer bars.
//!
//! Layout: `[left chip] left  help [actions...]      right [right chip]`.
//! When the row is too narrow the right segment wins, the left text is
//! clipped next, and action chips fall back to showing only their keys.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::component::{Bindable, Component, Sizeable};
use crate::event::{Command, Msg};
use crate::keys::{help_text, KeyBinding};
use crate::text::clip_width;
use crate::theme::Theme;

/// Visual weight of an action chip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActionVariant {
    #[default]
    Normal,
    Primary,
    Muted,
    Danger,
}

/// A key + label chip, e.g. `[q] quit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub key: String,
    pub label: String,
    pub variant: ActionVariant,
    pub enabled: bool,
}

impl Action {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            variant: ActionVariant::Normal,
            enabled: true,
        }
    }

    #[must_use]
    pub fn variant(mut self, variant: ActionVariant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Header,
    Footer,
}

/// Header or footer bar.
#[derive(Debug, Clone)]
pub struct Bar {
    role: Role,
    left: String,
    right: String,
    left_action: Option<Action>,
    right_action: Option<Action>,
    actions: Vec<Action>,
    help: Vec<KeyBinding>,
    theme: Theme,
    width: u16,
}

impl Bar {
    /// Bar for the top row; left text is emphasized.
    pub fn header() -> Self {
        Self::with_role(Role::Header)
    }

    /// Bar for the bottom row.
    pub fn footer() -> Self {
        Self::with_role(Role::Footer)
    }

    fn with_role(role: Role) -> Self {
        Self {
            role,
            left: String::new(),
            right: String::new(),
            left_action: None,
            right_action: None,
            actions: Vec::new(),
            help: Vec::new(),
            theme: Theme::default(),
            width: 0,
        }
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
    pub fn left_action(mut self, action: Action) -> Self {
        self.left_action = Some(action);
        self
    }

    #[must_use]
    pub fn right_action(mut self, action: Action) -> Self {
        self.right_action = Some(action);
        self
    }

    #[must_use]
    pub fn actions(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.actions = actions.into_iter().collect();
        self
    }

    /// Show help text for the bindings of `source`.
    #[must_use]
    pub fn help_from(mut self, source: &impl Bindable) -> Self {
        self.help = source.bindings();
        self
    }

    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn set_left(&mut self, text: impl Into<String>) {
        self.left = text.into();
    }

    pub fn set_right(&mut self, text: impl Into<String>) {
        self.right = text.into();
    }

    pub fn set_actions(&mut self, actions: impl IntoIterator<Item = Action>) {
        self.actions = actions.into_iter().collect();
    }

    pub fn set_help(&mut self, bindings: Vec<KeyBinding>) {
        self.help = bindings;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    fn base_style(&self) -> Style {
        Style::default()
            .fg(self.theme.status_text)
            .bg(self.theme.status_bg)
    }

    fn chip(&self, action: &Action, key_only: bool) -> Vec<Span<'static>> {
        let t = &self.theme;
        let key_style = if action.enabled {
            match action.variant {
                ActionVariant::Normal => Style::default().fg(t.text).bg(t.element_bg),
                ActionVariant::Primary => Style::default().fg(t.title_text).bg(t.accent),
                ActionVariant::Muted => Style::default().fg(t.muted).bg(t.element_bg),
                ActionVariant::Danger => Style::default().fg(t.title_text).bg(t.error),
            }
            .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(t.muted).bg(t.element_bg)
        };
        let label_style = if action.enabled {
            self.base_style()
        } else {
            self.base_style().fg(t.muted)
        };

        let mut spans = vec![Span::styled(format!(" {} ", action.key), key_style)];
        if !key_only && !action.label.trim().is_empty() {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(action.label.clone(), label_style));
        }
        spans
    }

    fn left_segment(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        if let Some(action) = &self.left_action {
            spans.extend(self.chip(action, false));
        }
        let help = help_text(&self.help);
        let text = [self.left.trim(), help.trim()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("  ");
        if !text.is_empty() {
            if !spans.is_empty() {
                spans.push(Span::raw(" "));
            }
            let style = match self.role {
                Role::Header => self
                    .base_style()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
                Role::Footer => self.base_style(),
            };
            spans.push(Span::styled(text, style));
        }
        spans
    }

    fn right_segment(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        if !self.right.is_empty() {
            spans.push(Span::styled(
                self.right.clone(),
                self.base_style().fg(self.theme.muted),
            ));
        }
        if let Some(action) = &self.right_action {
            if !spans.is_empty() {
                spans.push(Span::raw(" "));
            }
            spans.extend(self.chip(action, false));
        }
        spans
    }

    /// Chips that fit in `width`, falling back to key-only chips when the
    /// full ones do not all fit.
    fn action_block(&self, width: usize) -> Vec<Span<'static>> {
        let (full, all_fit) = self.actions_within(width, false);
        if all_fit {
            return full;
        }
        self.actions_within(width, true).0
    }

    fn actions_within(&self, width: usize, key_only: bool) -> (Vec<Span<'static>>, bool) {
        let mut spans = Vec::new();
        let mut used = 0;
        for action in self.actions.iter().filter(|a| !a.key.trim().is_empty()) {
            let chip = self.chip(action, key_only);
            let chip_width: usize = chip.iter().map(Span::width).sum();
            let sep = usize::from(!spans.is_empty());
            if used + sep + chip_width > width {
                return (spans, false);
            }
            if sep == 1 {
                spans.push(Span::raw(" "));
            }
            used += sep + chip_width;
            spans.extend(chip);
        }
        (spans, true)
    }

    /// Left and right lines for a row `width` cells wide.
    fn compose(&self, width: usize) -> (Line<'static>, Line<'static>) {
        let right = clip_spans(self.right_segment(), width);
        let right_width = line_width(&right);
        if right_width >= width {
            return (Line::default(), Line::from(right));
        }

        let mut room = width - right_width;
        if right_width > 0 {
            room -= 1;
        }
        let mut left = clip_spans(self.left_segment(), room);
        room -= line_width(&left);
        if !left.is_empty() && room > 0 {
            room -= 1;
            let actions = self.action_block(room);
            if !actions.is_empty() {
                left.push(Span::raw(" "));
                left.extend(actions);
            }
        } else if left.is_empty() {
            left = self.action_block(room);
        }
        (Line::from(left), Line::from(right))
    }

    /// Plain text of the row, for tests and logs.
    pub fn to_plain(&self, width: u16) -> String {
        let (left, right) = self.compose(usize::from(width));
        let left = left.to_string();
        let right = right.to_string();
        let gap = usize::from(width)
            .saturating_sub(left.chars().count() + right.chars().count());
        format!("{left}{}{right}", " ".repeat(gap))
    }
}

fn line_width(spans: &[Span<'_>]) -> usize {
    spans.iter().map(Span::width).sum()
}

fn clip_spans(spans: Vec<Span<'static>>, width: usize) -> Vec<Span<'static>> {
    let mut out = Vec::new();
    let mut used = 0;
    for span in spans {
        let w = span.width();
        if used + w <= width {
            used += w;
            out.push(span);
            continue;
        }
        let clipped = clip_width(&span.content, width - used);
        if !clipped.is_empty() {
            out.push(Span::styled(clipped, span.style));
        }
        break;
    }
    out
}

impl Component for Bar {
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
        let row = Rect::new(area.x, area.y, area.width, 1);
        buf.set_style(row, self.base_style());
        let (left, right) = self.compose(usize::from(row.width));
        let right_width = u16::try_from(right.width()).unwrap_or(row.width);
        left.render(row, buf);
        let right_area = Rect::new(
            row.right().saturating_sub(right_width),
            row.y,
            right_width.min(row.width),
            1,
        );
        right.render(right_area, buf);
    }

    fn set_size(&mut self, width: u16, _height: u16) {
        self.width = width;
    }
}

impl Sizeable for Bar {
    fn size(&self) -> (u16, u16) {
        (self.width, 1)
    }
}
