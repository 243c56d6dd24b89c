//! Shared dialog chrome.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Padding, Widget},
};

use crate::text::{fit_width, visual_width};
use crate::theme::Theme;

const DEFAULT_TITLE: &str = "Dialog";
const ESC_HINT: &str = "esc";

/// Draw a dialog frame into `area` and return the body area.
///
/// The frame is a rounded border with one column of padding on each side,
/// a title row with the `esc` hint on the right, and a blank separator
/// row. The body is what remains, so it measures `(w - 4, h - 4)`.
pub fn render_frame(title: &str, area: Rect, theme: &Theme, buf: &mut Buffer) -> Rect {
    Clear.render(area, buf);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.dialog_border))
        .style(Style::default().fg(theme.dialog_text).bg(theme.dialog_bg))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    block.render(area, buf);

    if inner.is_empty() {
        return inner;
    }

    let title = if title.trim().is_empty() {
        DEFAULT_TITLE
    } else {
        title
    };
    let inner_width = usize::from(inner.width);
    let hint_width = visual_width(ESC_HINT);
    let left_width = inner_width.saturating_sub(hint_width + 1).max(1);

    buf.set_stringn(
        inner.x,
        inner.y,
        fit_width(title, left_width),
        inner_width,
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    );
    if inner_width > left_width + 1 {
        let hint_x = inner.x + u16::try_from(left_width + 1).unwrap_or(inner.width);
        buf.set_stringn(
            hint_x,
            inner.y,
            ESC_HINT,
            inner_width - left_width - 1,
            Style::default().fg(theme.muted),
        );
    }

    let header_rows = 2.min(inner.height);
    Rect::new(
        inner.x,
        inner.y + header_rows,
        inner.width,
        inner.height - header_rows,
    )
}

/// Write `lines` into `area`, one per row, clipped to it.
pub fn render_lines<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    area: Rect,
    style: Style,
    buf: &mut Buffer,
) {
    for (row, line) in (area.y..area.bottom()).zip(lines) {
        buf.set_stringn(area.x, row, line, usize::from(area.width), style);
    }
}
