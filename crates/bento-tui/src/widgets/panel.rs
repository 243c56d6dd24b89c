//! Bordered, focusable container.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Widget},
};

use crate::component::{Component, Focusable, Sizeable};
use crate::event::{Command, Msg};
use crate::text::fit_width;
use crate::theme::Theme;

/// Panel with a border, optional title chip and optional content.
///
/// The content gets the interior minus one column of padding per side:
/// `(width - 4, height - 2)`, one row less when titled.
pub struct Panel {
    title: String,
    content: Option<Box<dyn Component>>,
    focused: bool,
    theme: Theme,
    width: u16,
    height: u16,
}

impl Panel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: None,
            focused: false,
            theme: Theme::default(),
            width: 0,
            height: 0,
        }
    }

    #[must_use]
    pub fn content(mut self, content: impl Component + 'static) -> Self {
        self.content = Some(Box::new(content));
        self
    }

    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    fn title_rows(&self) -> u16 {
        u16::from(!self.title.is_empty())
    }

    fn content_area(&self, area: Rect) -> Rect {
        let top = self.title_rows() + 1;
        Rect::new(
            area.x.saturating_add(2),
            area.y.saturating_add(top),
            area.width.saturating_sub(4),
            area.height.saturating_sub(top + 1),
        )
    }
}

impl Component for Panel {
    fn init(&mut self) -> Option<Command> {
        self.content.as_mut()?.init()
    }

    fn update(&mut self, msg: &Msg) -> Option<Command> {
        if let Msg::ThemeChanged { theme, .. } = msg {
            self.theme = theme.clone();
        }
        self.content.as_mut()?.update(msg)
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        let t = &self.theme;
        let border = if self.focused {
            t.border_focused
        } else {
            t.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if self.focused {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(Style::default().fg(border))
            .style(Style::default().fg(t.text).bg(t.panel_bg));
        let inner = block.inner(area);
        block.render(area, buf);

        if !self.title.is_empty() && !inner.is_empty() {
            let chip = if self.focused {
                Style::default()
                    .fg(t.title_text)
                    .bg(t.title_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(t.muted).bg(t.element_bg)
            };
            let label = fit_width(
                &format!(" {} ", self.title),
                usize::from(inner.width).min(self.title.chars().count() + 2),
            );
            buf.set_stringn(inner.x, inner.y, label, usize::from(inner.width), chip);
        }

        if let Some(content) = &self.content {
            let body = self.content_area(area).intersection(area);
            if !body.is_empty() {
                content.render(body, buf);
            }
        }
    }

    fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let content_h = height.saturating_sub(2 + self.title_rows());
        if let Some(content) = self.content.as_mut() {
            content.set_size(width.saturating_sub(4), content_h);
        }
    }
}

impl Sizeable for Panel {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }
}

impl Focusable for Panel {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::shared;
    use crate::test_utils::{buffer_to_string, SpyComponent, TextLeaf};
    use std::rc::Rc;

    #[test]
    fn test_content_sized_to_interior() {
        let spy = shared(SpyComponent::new("body"));
        let mut panel = Panel::new("Logs").content(Rc::clone(&spy));
        panel.set_size(30, 10);
        assert_eq!(spy.borrow().size(), (26, 7));

        let spy = shared(SpyComponent::new("body"));
        let mut panel = Panel::new("").content(Rc::clone(&spy));
        panel.set_size(30, 10);
        assert_eq!(spy.borrow().size(), (26, 8));
    }

    #[test]
    fn test_tiny_panel_saturates() {
        let spy = shared(SpyComponent::new("body"));
        let mut panel = Panel::new("t").content(Rc::clone(&spy));
        panel.set_size(2, 2);
        assert_eq!(spy.borrow().size(), (0, 0));
    }

    #[test]
    fn test_focus_toggles() {
        let mut panel = Panel::new("p");
        assert!(!panel.is_focused());
        panel.focus();
        assert!(panel.is_focused());
        panel.blur();
        assert!(!panel.is_focused());
    }

    #[test]
    fn test_render_title_and_content() {
        let mut panel = Panel::new("Logs").content(TextLeaf::new("line one"));
        panel.set_size(20, 5);
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        panel.render(area, &mut buf);

        let text = buffer_to_string(&buf);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "╭──────────────────╮");
        assert_eq!(lines[1], "│ Logs             │");
        assert_eq!(lines[2], "│ line one         │");
    }

    #[test]
    fn test_updates_reach_content() {
        let spy = shared(SpyComponent::new("body"));
        let mut panel = Panel::new("p").content(Rc::clone(&spy));
        let _ = panel.update(&Msg::Tick);
        assert_eq!(spy.borrow().updates, 1);
    }
}
