//! Flexible-box splitter.
//!
//! A [`Split`] divides its extent along one axis between [`Item`]s:
//! fixed items are served first, in order, each getting at most what is
//! left; the remainder is shared between flex items in proportion to their
//! weight, and the integer-division leftover goes to the last flex item so
//! the allocations add up to the full extent. Without flex items any
//! leftover stays unused.

use ratatui::{buffer::Buffer, layout::Rect};

use crate::component::{Component, Sizeable};
use crate::event::{Command, Msg};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemKind {
    Fixed(u16),
    Flex(u16),
}

/// One child of a split.
pub struct Item {
    kind: ItemKind,
    child: Box<dyn Component>,
}

/// Child with a fixed extent along the split axis.
pub fn fixed(size: u16, child: impl Component + 'static) -> Item {
    Item {
        kind: ItemKind::Fixed(size),
        child: Box::new(child),
    }
}

/// Child sharing leftover space by `weight` (at least 1).
pub fn flex(weight: u16, child: impl Component + 'static) -> Item {
    Item {
        kind: ItemKind::Flex(weight.max(1)),
        child: Box::new(child),
    }
}

/// Splits an area between children along one axis.
pub struct Split {
    horizontal: bool,
    items: Vec<Item>,
    width: u16,
    height: u16,
}

impl Split {
    /// Children side by side; allocation along the width.
    pub fn horizontal(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            horizontal: true,
            items: items.into_iter().collect(),
            width: 0,
            height: 0,
        }
    }

    /// Children stacked; allocation along the height.
    pub fn vertical(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            horizontal: false,
            items: items.into_iter().collect(),
            width: 0,
            height: 0,
        }
    }

    pub fn is_horizontal(&self) -> bool {
        self.horizontal
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Extent of each child along the split axis for the current size.
    pub fn allocations(&self) -> Vec<u16> {
        let total = if self.horizontal {
            self.width
        } else {
            self.height
        };
        let kinds: Vec<ItemKind> = self.items.iter().map(|item| item.kind).collect();
        allocate(total, &kinds)
    }

    /// Allocation bars, e.g. `##|####`, for tests and debugging.
    pub fn debug_layout(&self) -> String {
        self.allocations()
            .into_iter()
            .map(|n| "#".repeat(usize::from(n)))
            .collect::<Vec<_>>()
            .join("|")
    }

    /// Areas each child is drawn into, clipped to `area`.
    fn child_areas(&self, area: Rect) -> Vec<Rect> {
        let mut offset: u16 = 0;
        self.allocations()
            .into_iter()
            .map(|extent| {
                let rect = if self.horizontal {
                    Rect::new(
                        area.x.saturating_add(offset),
                        area.y,
                        extent,
                        area.height,
                    )
                } else {
                    Rect::new(area.x, area.y.saturating_add(offset), area.width, extent)
                };
                offset = offset.saturating_add(extent);
                rect.intersection(area)
            })
            .collect()
    }
}

/// Allocate `total` cells between items.
fn allocate(total: u16, kinds: &[ItemKind]) -> Vec<u16> {
    let mut out = vec![0_u16; kinds.len()];
    let mut remaining = total;
    let mut weight_sum: u32 = 0;

    for (slot, kind) in out.iter_mut().zip(kinds) {
        match *kind {
            ItemKind::Fixed(size) => {
                let w = size.min(remaining);
                *slot = w;
                remaining -= w;
            }
            ItemKind::Flex(weight) => weight_sum += u32::from(weight),
        }
    }

    if remaining == 0 || weight_sum == 0 {
        return out;
    }

    let mut assigned: u32 = 0;
    let mut last_flex = None;
    for (i, kind) in kinds.iter().enumerate() {
        let ItemKind::Flex(weight) = *kind else {
            continue;
        };
        last_flex = Some(i);
        let share = u32::from(remaining) * u32::from(weight) / weight_sum;
        // share <= remaining, which fits in u16
        out[i] = u16::try_from(share).unwrap_or(u16::MAX);
        assigned += share;
    }

    if let Some(i) = last_flex {
        let leftover = u32::from(remaining) - assigned;
        out[i] = out[i].saturating_add(u16::try_from(leftover).unwrap_or(u16::MAX));
    }

    out
}

impl Component for Split {
    fn init(&mut self) -> Option<Command> {
        Command::batch(self.items.iter_mut().map(|item| item.child.init()))
    }

    fn update(&mut self, msg: &Msg) -> Option<Command> {
        Command::batch(self.items.iter_mut().map(|item| item.child.update(msg)))
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        for (item, child_area) in self.items.iter().zip(self.child_areas(area)) {
            if child_area.is_empty() {
                continue;
            }
            item.child.render(child_area, buf);
        }
    }

    fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let allocs = self.allocations();
        let horizontal = self.horizontal;
        for (item, extent) in self.items.iter_mut().zip(allocs) {
            if horizontal {
                item.child.set_size(extent, height);
            } else {
                item.child.set_size(width, extent);
            }
        }
    }
}

impl Sizeable for Split {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }
}
