//! Focus ring manager.
//!
//! Owns an ordered ring of [`Focusable`] components and the index of the
//! focused one. Exactly one member is focused whenever the ring is
//! non-empty; every index change blurs the others, focuses the new member
//! and produces a [`Msg::FocusChanged`] command.
//!
//! With wrap enabled (the default) indices are taken modulo the ring
//! length, so `-1` selects the last member. With wrap disabled they are
//! clamped to the ends of the ring.

use ratatui::{buffer::Buffer, layout::Rect};
use tracing::debug;

use crate::component::{Bindable, Component, Focusable};
use crate::event::{Command, Msg};
use crate::keys::KeyBinding;

/// Focus ring manager.
pub struct FocusManager {
    ring: Vec<Box<dyn Focusable>>,
    idx: usize,
    enabled: bool,
    wrap: bool,
    next: KeyBinding,
    prev: KeyBinding,
}

impl Default for FocusManager {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusManager {
    /// Empty, enabled, wrapping manager bound to Tab / Shift+Tab.
    pub fn new() -> Self {
        Self {
            ring: Vec::new(),
            idx: 0,
            enabled: true,
            wrap: true,
            next: KeyBinding::next_panel(),
            prev: KeyBinding::prev_panel(),
        }
    }

    /// Set the initial ring.
    #[must_use]
    pub fn with_ring<I, F>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Option<Box<dyn Focusable>>>,
    {
        // The change notice is only interesting to a running loop.
        let _ = self.set_ring(members);
        self
    }

    /// Replace the next/prev bindings.
    #[must_use]
    pub fn with_keys(mut self, next: KeyBinding, prev: KeyBinding) -> Self {
        self.next = next;
        self.prev = prev;
        self
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Replace the ring, dropping `None` entries, and reapply focus.
    pub fn set_ring<I, F>(&mut self, members: I) -> Option<Command>
    where
        I: IntoIterator<Item = F>,
        F: Into<Option<Box<dyn Focusable>>>,
    {
        self.ring = members.into_iter().filter_map(Into::into).collect();
        if self.ring.is_empty() {
            self.idx = 0;
            return None;
        }
        self.idx = self.idx.min(self.ring.len() - 1);
        self.apply_focus(None)
    }

    /// Focus the member at `idx`, wrapping or clamping it into range.
    pub fn set_index(&mut self, idx: isize) -> Option<Command> {
        if self.ring.is_empty() {
            self.idx = 0;
            return None;
        }
        let next = if self.wrap {
            wrap_index(idx, self.ring.len())
        } else {
            clamp_index(idx, self.ring.len())
        };
        if next == self.idx {
            return None;
        }
        let from = self.idx;
        self.idx = next;
        self.apply_focus(Some(from))
    }

    /// Move focus by `delta` positions. No-op while disabled.
    pub fn focus_by(&mut self, delta: isize) -> Option<Command> {
        if !self.enabled || self.ring.is_empty() || delta == 0 {
            return None;
        }
        let current = isize::try_from(self.idx).unwrap_or(isize::MAX);
        self.set_index(current.saturating_add(delta))
    }

    pub fn next(&mut self) -> Option<Command> {
        self.focus_by(1)
    }

    pub fn prev(&mut self) -> Option<Command> {
        self.focus_by(-1)
    }

    /// The focused member, `None` when the ring is empty.
    pub fn focused(&self) -> Option<&dyn Focusable> {
        self.ring.get(self.idx).map(AsRef::as_ref)
    }

    /// Mutable access to the focused member.
    pub fn focused_mut(&mut self) -> Option<&mut (dyn Focusable + 'static)> {
        self.ring.get_mut(self.idx).map(AsMut::as_mut)
    }

    pub fn index(&self) -> usize {
        self.idx
    }

    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_wrap(&mut self, wrap: bool) {
        self.wrap = wrap;
    }

    fn apply_focus(&mut self, from: Option<usize>) -> Option<Command> {
        for (i, member) in self.ring.iter_mut().enumerate() {
            if i == self.idx {
                member.focus();
            } else {
                member.blur();
            }
        }
        if from == Some(self.idx) {
            return None;
        }
        let to = self.idx;
        debug!(?from, to, "Focus changed");
        Some(Command::msg(Msg::FocusChanged { from, to }))
    }
}

impl Component for FocusManager {
    fn update(&mut self, msg: &Msg) -> Option<Command> {
        if !self.enabled {
            return None;
        }
        let Msg::Key(key) = msg else {
            return None;
        };
        if self.next.matches(key) {
            self.next()
        } else if self.prev.matches(key) {
            self.prev()
        } else {
            None
        }
    }

    fn render(&self, _area: Rect, _buf: &mut Buffer) {}
}

impl Bindable for FocusManager {
    fn bindings(&self) -> Vec<KeyBinding> {
        vec![self.next.clone(), self.prev.clone()]
    }
}

fn wrap_index(idx: isize, len: usize) -> usize {
    let Ok(len) = isize::try_from(len) else {
        return 0;
    };
    if len <= 0 {
        return 0;
    }
    // rem_euclid is always in [0, len)
    usize::try_from(idx.rem_euclid(len)).unwrap_or(0)
}

fn clamp_index(idx: isize, len: usize) -> usize {
    let last = len.saturating_sub(1);
    usize::try_from(idx).map_or(0, |i| i.min(last))
}
