//! bento-tui: terminal UI composition toolkit
//!
//! This crate layers composition and state management over ratatui:
//! - [`Router`] - named pages, built on first visit and cached
//! - [`FocusManager`] - focus ring with Tab / Shift+Tab cycling
//! - [`DialogManager`] - single modal overlay with confirm and custom kinds
//! - [`Split`] - fixed + weighted flex layout
//! - [`Shell`] - root model tying them together with header/footer chrome

pub mod component;
pub mod dialog;
mod event;
pub mod focus;
pub mod keys;
pub mod layout;
pub mod router;
pub mod shell;
#[cfg(test)]
pub mod test_utils;
pub mod text;
pub mod theme;
pub mod widgets;

pub use bento_config;
pub use component::{shared, Bindable, Component, Focusable, Page, Shared, Sizeable};
pub use dialog::{Confirm, Custom, Dialog, DialogManager, ThemePicker};
pub use event::{AppMsg, Command, Event, EventHandler, Msg};
pub use focus::FocusManager;
pub use keys::{KeyBinding, KeyChord};
pub use layout::{fixed, flex, Split};
pub use router::{page, Route, Router, RouterError};
pub use shell::Shell;
pub use theme::{Theme, ThemeError, ThemeManager};

use crossterm::{
    cursor::Show as ShowCursor,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::collections::VecDeque;
use std::io::{self, stdout};
use tracing::debug;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen, ShowCursor);
    }
}

/// Run `shell` on the real terminal until it asks to quit.
///
/// Sets up raw mode and the alternate screen, restores them on exit, and
/// emits a tick every `tick_rate_ms` while idle.
pub async fn run_app(shell: &mut Shell, tick_rate_ms: u64) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut events = EventHandler::new(tick_rate_ms);
    let result = run_loop(&mut terminal, shell, &mut events).await;

    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    shell: &mut Shell,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    let size = terminal.size()?;
    let mut pending = VecDeque::new();
    pending.push_back(Msg::Resize {
        width: size.width,
        height: size.height,
    });
    if let Some(cmd) = shell.init() {
        pending.extend(cmd.run());
    }
    drain(shell, &mut pending);

    while !shell.should_quit() {
        terminal.draw(|frame| {
            let area = frame.area();
            shell.render(area, frame.buffer_mut());
        })?;

        let Some(event) = events.next().await else {
            debug!("Event stream closed");
            break;
        };
        if let Some(msg) = event.into_msg() {
            pending.push_back(msg);
            drain(shell, &mut pending);
        }
    }

    Ok(())
}

/// Deliver queued messages in order, queueing whatever their commands yield.
fn drain(shell: &mut Shell, pending: &mut VecDeque<Msg>) {
    while let Some(msg) = pending.pop_front() {
        if shell.should_quit() {
            pending.clear();
            return;
        }
        if let Some(cmd) = shell.update(msg) {
            pending.extend(cmd.run());
        }
    }
}

/// Returns the crate version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
