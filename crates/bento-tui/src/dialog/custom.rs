//! Dialog wrapping arbitrary content.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use std::fmt;

use super::frame::{render_frame, render_lines};
use crate::component::Component;
use crate::event::{Command, Msg};
use crate::layout::{centered_fixed, clamp_dim};
use crate::theme::Theme;

/// Dialog embedding any component.
///
/// Width and height of zero mean "half the viewport". Requested sizes are
/// clamped so the frame keeps a two-cell margin from the viewport edges,
/// and the content is sized to the frame interior.
pub struct Custom {
    title: String,
    content: Option<Box<dyn Component>>,
    req_width: u16,
    req_height: u16,
    width: u16,
    height: u16,
    pub(crate) theme: Theme,
}

impl Custom {
    pub fn new(title: impl Into<String>, content: impl Component + 'static) -> Self {
        Self {
            content: Some(Box::new(content)),
            ..Self::empty(title)
        }
    }

    /// Dialog with no content; renders only its frame.
    pub fn empty(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: None,
            req_width: 0,
            req_height: 0,
            width: 0,
            height: 0,
            theme: Theme::default(),
        }
    }

    /// Requested frame size. Zero picks half the viewport on that axis.
    #[must_use]
    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.req_width = width;
        self.req_height = height;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Resolved frame size for the last viewport.
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub(crate) fn init(&mut self) -> Option<Command> {
        self.content.as_mut()?.init()
    }

    pub(crate) fn update(&mut self, msg: &Msg) -> Option<Command> {
        self.content.as_mut()?.update(msg)
    }

    /// Resolve the frame against a `width` x `height` viewport.
    pub(crate) fn set_size(&mut self, width: u16, height: u16) {
        let want_w = if self.req_width == 0 {
            width / 2
        } else {
            self.req_width
        };
        let want_h = if self.req_height == 0 {
            height / 2
        } else {
            self.req_height
        };
        let max_w = width.saturating_sub(4).max(20);
        let max_h = height.saturating_sub(4).max(8);
        self.width = clamp_dim(want_w, 36.min(max_w), max_w);
        self.height = clamp_dim(want_h, 12.min(max_h), max_h);

        if let Some(content) = self.content.as_mut() {
            content.set_size(
                self.width.saturating_sub(4).max(1),
                self.height.saturating_sub(4).max(1),
            );
        }
    }

    pub(crate) fn render(&self, area: Rect, buf: &mut Buffer) {
        let frame = centered_fixed(self.width, self.height, area);
        let body = render_frame(&self.title, frame, &self.theme, buf);
        if body.is_empty() {
            return;
        }
        match &self.content {
            Some(content) => content.render(body, buf),
            None => render_lines([" "], body, Style::default(), buf),
        }
    }
}

impl fmt::Debug for Custom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom")
            .field("title", &self.title)
            .field("has_content", &self.content.is_some())
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{shared, Sizeable};
    use crate::test_utils::{buffer_to_string, SpyComponent, TextLeaf};
    use std::rc::Rc;

    #[test]
    fn test_zero_size_defaults_to_half_viewport() {
        let mut custom = Custom::empty("x");
        custom.set_size(100, 40);
        assert_eq!(custom.size(), (50, 20));
    }

    #[test]
    fn test_oversized_request_is_clamped_to_viewport() {
        let spy = shared(SpyComponent::new("body"));
        let mut custom = Custom::new("x", Rc::clone(&spy)).with_size(120, 60);
        custom.set_size(40, 12);

        assert_eq!(custom.size(), (36, 8));
        let (w, h) = spy.borrow().size();
        assert!(w <= 36 && h <= 8);
        assert_eq!((w, h), (32, 4));
    }

    #[test]
    fn test_small_request_is_raised_to_floor() {
        let mut custom = Custom::empty("x").with_size(10, 3);
        custom.set_size(120, 40);
        assert_eq!(custom.size(), (36, 12));
    }

    #[test]
    fn test_tiny_viewport_keeps_minimum_frame() {
        let mut custom = Custom::empty("x").with_size(50, 50);
        custom.set_size(10, 5);
        assert_eq!(custom.size(), (20, 8));
    }

    #[test]
    fn test_updates_reach_content() {
        let spy = shared(SpyComponent::new("body"));
        let mut custom = Custom::new("x", Rc::clone(&spy));
        let _ = custom.update(&Msg::Tick);
        assert_eq!(spy.borrow().updates, 1);
    }

    #[test]
    fn test_renders_content_in_body() {
        let mut custom = Custom::new("Notes", TextLeaf::new("hello")).with_size(40, 12);
        custom.set_size(60, 20);
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        custom.render(area, &mut buf);

        let text = buffer_to_string(&buf);
        assert!(text.contains("Notes"));
        assert!(text.contains("hello"));
    }
}
