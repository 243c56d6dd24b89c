//! Events, messages and commands for the bento TUI.
//!
//! - [`Event`] is raw terminal input produced by [`EventHandler`].
//! - [`Msg`] is what components receive in `update`.
//! - [`Command`] is a deferred unit of work that yields follow-up messages;
//!   the run loop executes it and feeds the results back in.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent};
use std::any::Any;
use std::fmt;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::dialog::Dialog;
use crate::theme::Theme;

/// Events that can occur in the terminal.
#[derive(Debug, Clone)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// A mouse event occurred.
    Mouse(MouseEvent),
    /// A tick event for UI updates.
    Tick,
    /// Terminal was resized.
    Resize(u16, u16),
}

impl Event {
    /// Convert terminal input into a component message.
    ///
    /// Mouse input is not routed by the toolkit and maps to `None`.
    pub fn into_msg(self) -> Option<Msg> {
        match self {
            Self::Key(key) => Some(Msg::Key(key)),
            Self::Mouse(_) => None,
            Self::Tick => Some(Msg::Tick),
            Self::Resize(width, height) => Some(Msg::Resize { width, height }),
        }
    }
}

/// Event handler that runs in a background task.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    _tx: mpsc::UnboundedSender<Event>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate.
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let tx_clone = tx.clone();

        // crossterm reads are blocking, so poll on a plain thread
        std::thread::spawn(move || {
            let tick_rate = Duration::from_millis(tick_rate_ms);
            loop {
                if event::poll(tick_rate).unwrap_or(false) {
                    if let Ok(evt) = event::read() {
                        let event = match evt {
                            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                                Some(Event::Key(key))
                            }
                            CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
                            CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
                            _ => None,
                        };
                        if let Some(e) = event {
                            if tx_clone.send(e).is_err() {
                                break;
                            }
                        }
                    }
                } else if tx_clone.send(Event::Tick).is_err() {
                    break;
                }
            }
        });

        Self { rx, _tx: tx }
    }

    /// Get the next event, blocking until one is available.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

/// Opaque application-defined payload carried through the toolkit verbatim.
pub struct AppMsg(Box<dyn Any>);

impl AppMsg {
    pub fn new<T: Any>(value: T) -> Self {
        Self(Box::new(value))
    }

    /// Borrow the payload if it has type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.0.is::<T>()
    }
}

impl fmt::Debug for AppMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AppMsg(..)")
    }
}

/// Messages delivered to components.
pub enum Msg {
    /// A key press.
    Key(KeyEvent),
    /// The viewport changed size.
    Resize { width: u16, height: u16 },
    /// Idle tick from the event loop.
    Tick,
    /// Switch the router to the named page.
    Navigate(String),
    /// Open a dialog, replacing any active one.
    OpenDialog(Box<Dialog>),
    /// Close the active dialog.
    CloseDialog,
    /// Ask the shell to open the theme picker.
    OpenThemePicker,
    /// The active theme changed.
    ThemeChanged { name: String, theme: Theme },
    /// The focus ring moved. `from` is `None` when a ring was (re)assigned.
    FocusChanged { from: Option<usize>, to: usize },
    /// Stop the event loop.
    Quit,
    /// Application-defined message.
    App(AppMsg),
}

impl Msg {
    /// Navigation request for the router.
    pub fn navigate(page: impl Into<String>) -> Self {
        Self::Navigate(page.into())
    }

    /// Open request for the dialog manager.
    pub fn open_dialog(dialog: impl Into<Dialog>) -> Self {
        Self::OpenDialog(Box::new(dialog.into()))
    }

    /// Wrap an application value.
    pub fn app<T: Any>(value: T) -> Self {
        Self::App(AppMsg::new(value))
    }
}

impl fmt::Debug for Msg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.debug_tuple("Key").field(key).finish(),
            Self::Resize { width, height } => f
                .debug_struct("Resize")
                .field("width", width)
                .field("height", height)
                .finish(),
            Self::Tick => f.write_str("Tick"),
            Self::Navigate(page) => f.debug_tuple("Navigate").field(page).finish(),
            Self::OpenDialog(dialog) => f.debug_tuple("OpenDialog").field(dialog).finish(),
            Self::CloseDialog => f.write_str("CloseDialog"),
            Self::OpenThemePicker => f.write_str("OpenThemePicker"),
            Self::ThemeChanged { name, .. } => {
                f.debug_struct("ThemeChanged").field("name", name).finish()
            }
            Self::FocusChanged { from, to } => f
                .debug_struct("FocusChanged")
                .field("from", from)
                .field("to", to)
                .finish(),
            Self::Quit => f.write_str("Quit"),
            Self::App(msg) => f.debug_tuple("App").field(msg).finish(),
        }
    }
}

enum CommandKind {
    Once(Box<dyn FnOnce() -> Option<Msg>>),
    Batch(Vec<Command>),
}

/// Deferred work producing follow-up messages.
///
/// Commands never run inside `update`; the event loop runs them after the
/// current message has been fully processed.
pub struct Command(CommandKind);

impl Command {
    /// Command from a closure yielding at most one message.
    pub fn new(f: impl FnOnce() -> Option<Msg> + 'static) -> Self {
        Self(CommandKind::Once(Box::new(f)))
    }

    /// Command that yields `msg`.
    pub fn msg(msg: Msg) -> Self {
        Self::new(move || Some(msg))
    }

    /// Combine commands, skipping `None`.
    ///
    /// Returns `None` when nothing is left and the single command itself
    /// when only one remains.
    pub fn batch(commands: impl IntoIterator<Item = Option<Command>>) -> Option<Command> {
        let mut commands: Vec<Command> = commands.into_iter().flatten().collect();
        match commands.len() {
            0 => None,
            1 => commands.pop(),
            _ => Some(Self(CommandKind::Batch(commands))),
        }
    }

    /// Execute the command, returning produced messages in order.
    pub fn run(self) -> Vec<Msg> {
        let mut out = Vec::new();
        self.run_into(&mut out);
        out
    }

    fn run_into(self, out: &mut Vec<Msg>) {
        match self.0 {
            CommandKind::Once(f) => out.extend(f()),
            CommandKind::Batch(commands) => {
                for command in commands {
                    command.run_into(out);
                }
            }
        }
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            CommandKind::Once(_) => f.write_str("Command(..)"),
            CommandKind::Batch(commands) => f.debug_tuple("Batch").field(commands).finish(),
        }
    }
}
