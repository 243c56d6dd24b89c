//! Chrome widgets.
//!
//! All of them are components sized by their owner:
//! - [`Bar`] - header/footer row with text, help and action chips
//! - [`InputRow`] - one-line text input with prompt and completion
//! - [`Panel`] - bordered, focusable container
//! - [`StatusBar`] - left/right status line
//! - [`TextBlock`] - wrapped text leaf

mod bar;
mod input;
mod panel;
mod status_bar;
mod text_block;

pub use bar::{Action, ActionVariant, Bar};
pub use input::InputRow;
pub use panel::Panel;
pub use status_bar::StatusBar;
pub use text_block::TextBlock;
