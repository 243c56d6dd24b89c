//! Layout components for the TUI.
//!
//! This module provides:
//! - [`Split`] - Flex-box splitter mixing fixed and weighted children
//! - [`centered_fixed`], [`clamp_dim`] - Overlay placement helpers

mod rect;
mod split;

pub use rect::{centered_fixed, clamp_dim};
pub use split::{fixed, flex, Item, Split};
