//! Rect helpers for placing overlays.

use ratatui::layout::Rect;

/// Create a centered rect with fixed dimensions, never larger than `area`.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Clamp `v` into `[lo, hi]`; `lo` wins when the range is inverted.
pub fn clamp_dim(v: u16, lo: u16, hi: u16) -> u16 {
    if hi < lo {
        return lo;
    }
    v.clamp(lo, hi)
}
