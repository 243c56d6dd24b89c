//! Yes/no confirmation dialog.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use std::fmt;

use super::frame::{render_frame, render_lines};
use crate::layout::centered_fixed;
use crate::event::Msg;
use crate::theme::Theme;

const FALLBACK_MESSAGE: &str = "Confirm?";
const HINT: &str = "Enter confirm  Esc cancel";
const MIN_WIDTH: u16 = 48;
// border, title row, blank, message, blank, hint, border
const HEIGHT: u16 = 7;

/// Callback run when the user confirms.
pub type OnConfirm = Box<dyn FnOnce() -> Msg>;

/// Confirmation dialog with an optional on-confirm callback.
///
/// The dialog manager closes it on Enter and schedules the callback, whose
/// message is fed back into the update loop.
pub struct Confirm {
    title: String,
    message: String,
    on_confirm: Option<OnConfirm>,
    pub(crate) theme: Theme,
    width: u16,
    height: u16,
}

impl Confirm {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            on_confirm: None,
            theme: Theme::default(),
            width: 0,
            height: 0,
        }
    }

    /// Message produced when the user confirms.
    #[must_use]
    pub fn on_confirm(mut self, f: impl FnOnce() -> Msg + 'static) -> Self {
        self.on_confirm = Some(Box::new(f));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn has_callback(&self) -> bool {
        self.on_confirm.is_some()
    }

    pub(crate) fn take_callback(&mut self) -> Option<OnConfirm> {
        self.on_confirm.take()
    }

    pub(crate) fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Frame size for the current viewport.
    fn frame_size(&self) -> (u16, u16) {
        (MIN_WIDTH.max(self.width / 2), HEIGHT)
    }

    pub(crate) fn render(&self, area: Rect, buf: &mut Buffer) {
        let (w, h) = self.frame_size();
        let frame = centered_fixed(w, h, area);
        let body = render_frame(&self.title, frame, &self.theme, buf);

        let message = if self.message.trim().is_empty() {
            FALLBACK_MESSAGE
        } else {
            self.message.as_str()
        };
        let text = Style::default().fg(self.theme.dialog_text);
        render_lines([message], body, text, buf);
        if body.height >= 3 {
            let hint_row = Rect::new(body.x, body.y + 2, body.width, 1);
            render_lines([HINT], hint_row, Style::default().fg(self.theme.muted), buf);
        }
    }
}

impl fmt::Debug for Confirm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Confirm")
            .field("title", &self.title)
            .field("message", &self.message)
            .field("has_callback", &self.on_confirm.is_some())
            .finish_non_exhaustive()
    }
}
