//! Cell-width measurement and fitting.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// Width of `s` in terminal cells. Wide characters count as 2.
pub fn visual_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Longest prefix of `s` that fits in `max_width` cells, without a marker.
pub fn clip_width(s: &str, max_width: usize) -> String {
    take_width(s, max_width).0
}

fn take_width(s: &str, max_width: usize) -> (String, usize) {
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        out.push(ch);
        width += w;
    }
    (out, width)
}

/// Shorten `s` to at most `max_width` cells, marking the cut with `...`.
///
/// Widths too small for the marker get a plain prefix instead, so the
/// result never exceeds `max_width`.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if visual_width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= ELLIPSIS.len() {
        return clip_width(s, max_width);
    }
    let (mut out, _) = take_width(s, max_width - ELLIPSIS.len());
    out.push_str(ELLIPSIS);
    out
}

/// Truncate or right-pad `s` to exactly `width` cells.
pub fn fit_width(s: &str, width: usize) -> String {
    let mut out = truncate_to_width(s, width);
    let used = visual_width(&out);
    if used < width {
        out.push_str(&" ".repeat(width - used));
    }
    out
}
