//! Text utilities for chrome rendering.
//!
//! - Width calculation that respects wide characters
//! - Truncation and exact-width fitting
//! - Word wrapping for text blocks

mod width;
mod wrap;

pub use width::{clip_width, fit_width, truncate_to_width, visual_width};
pub use wrap::wrap_text;
