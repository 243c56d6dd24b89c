//! Demo harness pages.

use bento_tui::bento_config::UiConfig;
use bento_tui::widgets::{Action, ActionVariant, Bar, InputRow, Panel, TextBlock};
use bento_tui::{
    fixed, flex, page, shared, Bindable, Command, Component, Confirm, Custom, FocusManager,
    Focusable, KeyBinding, KeyChord, Msg, Page, Shared, Shell, Sizeable, Split, Theme,
    ThemeManager,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use std::rc::Rc;

pub const DASHBOARD: &str = "dashboard";
pub const ABOUT: &str = "about";

/// Below this width the dashboard stacks its panels.
const COMPACT_WIDTH: u16 = 70;

const ABOUT_TEXT: &str = "bento composes terminal UIs from small parts: a page router \
that builds pages on first visit and keeps them, a focus ring, a modal dialog layer and \
a flex splitter.\n\nPress 1 for the dashboard, t to pick a theme, q to quit.";

/// Placeholder shown in the dashboard command row.
const INPUT_PLACEHOLDER: &str = "Type text, /theme, /dialog, or /confirm";

const COMMANDS: [&str; 3] = ["/theme", "/dialog", "/confirm"];

/// Labels of the actions panel, in selection order.
const ACTIONS: [&str; 3] = ["Theme", "Dialog", "Confirm"];

/// Log lines kept on the dashboard.
const LOG_LINES: usize = 6;

// ring positions
const COMMAND: usize = 0;
const ACTIONS_PANEL: usize = 1;
const SESSIONS: usize = 2;

fn notes_dialog() -> Msg {
    Msg::open_dialog(Custom::new(
        "Notes",
        TextBlock::new("Custom dialogs host any component. Esc closes this one."),
    ))
}

fn quit_confirm() -> Msg {
    Msg::open_dialog(Confirm::new("Quit", "Leave the demo?").on_confirm(|| Msg::Quit))
}

fn action_msg(idx: usize) -> Msg {
    match idx {
        0 => Msg::OpenThemePicker,
        1 => notes_dialog(),
        _ => quit_confirm(),
    }
}

/// Keys every demo page understands.
fn demo_key(key: &KeyEvent) -> Option<Msg> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Char('q') => Some(Msg::Quit),
        KeyCode::Char('1') => Some(Msg::navigate(DASHBOARD)),
        KeyCode::Char('2') => Some(Msg::navigate(ABOUT)),
        KeyCode::Char('t') => Some(Msg::OpenThemePicker),
        KeyCode::Char('d') => Some(notes_dialog()),
        KeyCode::Char('x') => Some(quit_confirm()),
        _ => None,
    }
}

/// Row of selectable actions, moved with Left/Right (or h/l).
struct ActionList {
    selected: usize,
    theme: Theme,
}

impl ActionList {
    fn new() -> Self {
        Self {
            selected: 0,
            theme: Theme::default(),
        }
    }

    fn label(&self) -> &'static str {
        ACTIONS[self.selected]
    }
}

impl Component for ActionList {
    fn update(&mut self, msg: &Msg) -> Option<Command> {
        match msg {
            Msg::Key(key) => match key.code {
                KeyCode::Left | KeyCode::Char('h') => {
                    self.selected = (self.selected + ACTIONS.len() - 1) % ACTIONS.len();
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    self.selected = (self.selected + 1) % ACTIONS.len();
                }
                _ => {}
            },
            Msg::ThemeChanged { theme, .. } => self.theme = theme.clone(),
            _ => {}
        }
        None
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        let t = &self.theme;
        let spans: Vec<Span<'_>> = ACTIONS
            .iter()
            .enumerate()
            .flat_map(|(i, label)| {
                let style = if i == self.selected {
                    Style::default().fg(t.selection_text).bg(t.selection_bg)
                } else {
                    Style::default().fg(t.text)
                };
                [Span::styled(format!(" {label} "), style), Span::raw(" ")]
            })
            .collect();
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

/// Command row, actions and a log, cycled with Tab / Shift+Tab.
///
/// While the command row is focused it gets every key, so typed letters
/// never trigger the global shortcuts. Focus cycling is suspended while
/// the row has a completion pending, letting Tab complete instead.
struct Dashboard {
    panels: Vec<Shared<Panel>>,
    log_panel: Shared<Panel>,
    input: Shared<InputRow>,
    actions: Shared<ActionList>,
    log: Shared<TextBlock>,
    events: Vec<String>,
    root: Split,
    focus: FocusManager,
    compact: bool,
    width: u16,
    height: u16,
}

impl Dashboard {
    fn new() -> Self {
        let input = shared(
            InputRow::new()
                .placeholder(INPUT_PLACEHOLDER)
                .suggestions(COMMANDS),
        );
        let actions = shared(ActionList::new());
        let log = shared(TextBlock::new("Tab moves focus.").muted());
        let panels = vec![
            shared(Panel::new("Command").content(Rc::clone(&input))),
            shared(Panel::new("Actions").content(Rc::clone(&actions))),
            shared(Panel::new("Sessions").content(TextBlock::new("alpha\nbeta\ngamma"))),
        ];
        let mut dashboard = Self {
            root: Split::horizontal([]),
            focus: FocusManager::new(),
            log_panel: shared(Panel::new("Log").content(Rc::clone(&log))),
            panels,
            input,
            actions,
            log,
            events: Vec::new(),
            compact: false,
            width: 0,
            height: 0,
        };
        dashboard.rebuild();
        dashboard
    }

    /// Rebuild the split and focus ring for the current breakpoint.
    fn rebuild(&mut self) {
        let [command, actions, sessions] = [COMMAND, ACTIONS_PANEL, SESSIONS]
            .map(|i| Rc::clone(&self.panels[i]));
        let log = Rc::clone(&self.log_panel);
        self.root = if self.compact {
            Split::vertical([
                fixed(4, command),
                fixed(4, actions),
                fixed(5, sessions),
                flex(1, log),
            ])
        } else {
            Split::horizontal([
                fixed(28, sessions),
                flex(
                    1,
                    Split::vertical([fixed(4, command), fixed(4, actions), flex(1, log)]),
                ),
            ])
        };
        self.focus = FocusManager::new();
        // a fresh ring always announces focus on the first panel
        let _ = self.focus.set_ring(
            self.panels
                .iter()
                .map(|p| Box::new(Rc::clone(p)) as Box<dyn Focusable>),
        );
        self.sync_input_focus();
    }

    fn on_input(&self) -> bool {
        !self.focus.is_empty() && self.focus.index() == COMMAND
    }

    /// Mirror the ring onto the input row's own focus flag.
    fn sync_input_focus(&mut self) {
        if self.on_input() {
            self.input.borrow_mut().focus();
        } else {
            self.input.borrow_mut().blur();
            self.focus.set_enabled(true);
        }
    }

    fn log(&mut self, line: impl Into<String>) {
        self.events.push(line.into());
        if self.events.len() > LOG_LINES {
            self.events.remove(0);
        }
        self.log.borrow_mut().set_text(self.events.join("\n"));
    }

    fn input_key(&mut self, key: &KeyEvent) -> Option<Command> {
        let cmd = if key.code == KeyCode::Enter {
            self.submit()
        } else {
            self.input.borrow_mut().handle_key(key);
            None
        };
        let pending = self.input.borrow().completion().is_some();
        self.focus.set_enabled(!pending);
        cmd
    }

    fn submit(&mut self) -> Option<Command> {
        let text = self.input.borrow_mut().take();
        let text = text.trim();
        match text {
            "" => None,
            "/theme" => {
                self.log("command accepted: /theme");
                Some(Command::msg(Msg::OpenThemePicker))
            }
            "/dialog" => {
                self.log("command accepted: /dialog");
                Some(Command::msg(notes_dialog()))
            }
            "/confirm" => {
                self.log("command accepted: /confirm");
                Some(Command::msg(quit_confirm()))
            }
            "/" => {
                self.log("command pending: type /theme, /dialog, or /confirm");
                None
            }
            other if other.starts_with('/') => {
                self.log(format!("unknown command: {other}"));
                None
            }
            other => {
                self.log(format!("submitted: {other}"));
                None
            }
        }
    }
}

impl Component for Dashboard {
    fn init(&mut self) -> Option<Command> {
        self.root.init()
    }

    fn update(&mut self, msg: &Msg) -> Option<Command> {
        match msg {
            Msg::Key(key) => {
                if let Some(cmd) = self.focus.update(msg) {
                    self.sync_input_focus();
                    return Some(cmd);
                }
                if self.on_input() {
                    return self.input_key(key);
                }
                if let Some(next) = demo_key(key) {
                    return Some(Command::msg(next));
                }
                if self.focus.index() == ACTIONS_PANEL && key.code == KeyCode::Enter {
                    let (idx, label) = {
                        let actions = self.actions.borrow();
                        (actions.selected, actions.label())
                    };
                    self.log(format!("ran action: {}", label.to_lowercase()));
                    return Some(Command::msg(action_msg(idx)));
                }
                self.focus.focused_mut()?.update(msg)
            }
            Msg::FocusChanged { to, .. } => {
                let title = self.panels.get(*to).map(|p| p.borrow().title().to_string());
                self.log(format!("focus moved to {}", title.unwrap_or_default()));
                None
            }
            _ => self.root.update(msg),
        }
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        self.root.render(area, buf);
    }

    fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let compact = width < COMPACT_WIDTH;
        if compact != self.compact {
            self.compact = compact;
            self.rebuild();
        }
        self.root.set_size(width, height);
    }
}

impl Sizeable for Dashboard {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }
}

impl Page for Dashboard {
    fn title(&self) -> &str {
        "Dashboard"
    }

    fn help(&self) -> Vec<KeyBinding> {
        let mut help = self.focus.bindings();
        match self.focus.index() {
            COMMAND => help.push(KeyBinding::new(
                [KeyChord::plain(KeyCode::Enter)],
                "enter",
                "submit",
            )),
            ACTIONS_PANEL => help.push(KeyBinding::new(
                [KeyChord::plain(KeyCode::Left), KeyChord::plain(KeyCode::Right)],
                "←/→",
                "select",
            )),
            _ => {}
        }
        help
    }
}

/// Static page describing the toolkit.
struct About {
    panel: Panel,
    width: u16,
    height: u16,
}

impl About {
    fn new() -> Self {
        let mut panel = Panel::new("About").content(TextBlock::new(ABOUT_TEXT));
        panel.focus();
        Self {
            panel,
            width: 0,
            height: 0,
        }
    }
}

impl Component for About {
    fn update(&mut self, msg: &Msg) -> Option<Command> {
        if let Msg::Key(key) = msg {
            return demo_key(key).map(Command::msg);
        }
        self.panel.update(msg)
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        self.panel.render(area, buf);
    }

    fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.panel.set_size(width, height);
    }
}

impl Sizeable for About {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }
}

impl Page for About {
    fn title(&self) -> &str {
        "About"
    }
}

/// Build the demo shell.
pub fn build_shell(config: &UiConfig, themes: ThemeManager) -> Shell {
    let header = Bar::header()
        .left("bento")
        .right(format!("v{}", bento_tui::tui_version()))
        .actions([
            Action::new("1", "dashboard"),
            Action::new("2", "about"),
        ]);
    let footer = Bar::footer().actions([
        Action::new("t", "theme").variant(ActionVariant::Primary),
        Action::new("d", "dialog"),
        Action::new("x", "confirm"),
        Action::new("q", "quit").variant(ActionVariant::Danger),
    ]);

    Shell::new()
        .with_theme_manager(themes)
        .with_header(header)
        .with_footer(footer)
        .with_header_bar(config.show_header)
        .with_footer_bar(config.show_footer)
        .with_pages([
            page(DASHBOARD, || Box::new(Dashboard::new())),
            page(ABOUT, || Box::new(About::new())),
        ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use bento_tui::bento_config::MemoryThemeStore;
    use bento_tui::Dialog;

    fn key(code: KeyCode) -> Msg {
        Msg::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn focused_flags(d: &Dashboard) -> Vec<bool> {
        d.panels.iter().map(|p| p.borrow().is_focused()).collect()
    }

    fn type_into(d: &mut Dashboard, text: &str) {
        for c in text.chars() {
            assert!(d.update(&key(KeyCode::Char(c))).is_none());
        }
    }

    fn run(d: &mut Dashboard, cmd: Option<Command>) -> Vec<Msg> {
        let msgs = cmd.map(Command::run).unwrap_or_default();
        for msg in &msgs {
            let _ = d.update(msg);
        }
        msgs
    }

    fn demo_shell() -> Shell {
        let themes = ThemeManager::load(MemoryThemeStore::new());
        let mut shell = build_shell(&UiConfig::default(), themes);
        let _ = shell.update(Msg::Resize {
            width: 100,
            height: 30,
        });
        shell
    }

    /// Feed messages back in like the run loop.
    fn drain(shell: &mut Shell, cmd: Option<Command>) {
        let mut queue: Vec<Msg> = cmd.map(Command::run).unwrap_or_default();
        while !queue.is_empty() {
            let msg = queue.remove(0);
            if let Some(next) = shell.update(msg) {
                queue.extend(next.run());
            }
        }
    }

    #[test]
    fn test_tab_cycles_dashboard_panels() {
        let mut dashboard = Dashboard::new();
        dashboard.set_size(100, 30);
        assert_eq!(focused_flags(&dashboard), vec![true, false, false]);
        assert!(dashboard.input.borrow().is_focused());

        let cmd = dashboard.update(&key(KeyCode::Tab));
        run(&mut dashboard, cmd);
        assert_eq!(focused_flags(&dashboard), vec![false, true, false]);
        assert!(!dashboard.input.borrow().is_focused());
        assert!(dashboard.log.borrow().text().contains("focus moved to Actions"));
    }

    #[test]
    fn test_typed_text_reaches_input() {
        let mut dashboard = Dashboard::new();
        type_into(&mut dashboard, "q1tx");
        assert_eq!(dashboard.input.borrow().value(), "q1tx");

        let cmd = dashboard.update(&key(KeyCode::Enter));
        assert!(cmd.is_none());
        assert!(dashboard.input.borrow().is_empty());
        assert_eq!(dashboard.log.borrow().text(), "submitted: q1tx");
    }

    #[test]
    fn test_pending_completion_claims_tab() {
        let mut dashboard = Dashboard::new();
        type_into(&mut dashboard, "/th");
        assert!(!dashboard.focus.is_enabled());

        assert!(dashboard.update(&key(KeyCode::Tab)).is_none());
        assert_eq!(dashboard.input.borrow().value(), "/theme");
        assert_eq!(dashboard.focus.index(), COMMAND);
        assert!(dashboard.focus.is_enabled());

        let _ = dashboard.update(&key(KeyCode::Tab));
        assert_eq!(dashboard.focus.index(), ACTIONS_PANEL);
    }

    #[test]
    fn test_slash_commands() {
        let mut dashboard = Dashboard::new();
        type_into(&mut dashboard, "/theme");
        let cmd = dashboard.update(&key(KeyCode::Enter));
        let msgs = cmd.map(Command::run).unwrap_or_default();
        assert!(matches!(msgs.as_slice(), [Msg::OpenThemePicker]));

        type_into(&mut dashboard, "/nope");
        assert!(dashboard.update(&key(KeyCode::Enter)).is_none());
        assert!(dashboard
            .log
            .borrow()
            .text()
            .ends_with("command accepted: /theme\nunknown command: /nope"));
    }

    #[test]
    fn test_actions_run_selected_entry() {
        let mut dashboard = Dashboard::new();
        let _ = dashboard.update(&key(KeyCode::Tab));
        let _ = dashboard.update(&key(KeyCode::Right));
        assert_eq!(dashboard.actions.borrow().label(), "Dialog");

        let cmd = dashboard.update(&key(KeyCode::Enter));
        let msgs = run(&mut dashboard, cmd);
        assert!(matches!(
            msgs.as_slice(),
            [Msg::OpenDialog(dialog)] if dialog.title() == "Notes"
        ));
        assert!(dashboard.log.borrow().text().contains("ran action: dialog"));

        let _ = dashboard.update(&key(KeyCode::Left));
        let _ = dashboard.update(&key(KeyCode::Left));
        assert_eq!(dashboard.actions.borrow().label(), "Confirm");
    }

    #[test]
    fn test_breakpoint_rebuilds_ring() {
        let mut dashboard = Dashboard::new();
        dashboard.set_size(100, 30);
        let _ = dashboard.update(&key(KeyCode::Tab));
        assert_eq!(dashboard.focus.index(), ACTIONS_PANEL);

        dashboard.set_size(60, 30);
        assert!(dashboard.compact);
        assert_eq!(dashboard.focus.index(), COMMAND);
        assert!(dashboard.input.borrow().is_focused());
        assert_eq!(dashboard.panels[COMMAND].borrow().size(), (60, 4));
        assert_eq!(dashboard.panels[SESSIONS].borrow().size(), (60, 5));
    }

    #[test]
    fn test_help_tracks_focus() {
        let mut dashboard = Dashboard::new();
        let descs = |d: &Dashboard| -> Vec<String> {
            d.help().iter().map(|b| b.help_desc().to_string()).collect()
        };
        assert_eq!(descs(&dashboard), ["next panel", "prev panel", "submit"]);

        let _ = dashboard.update(&key(KeyCode::Tab));
        assert_eq!(descs(&dashboard), ["next panel", "prev panel", "select"]);
    }

    #[test]
    fn test_demo_keys() {
        assert!(matches!(
            demo_key(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Msg::Quit)
        ));
        assert!(matches!(
            demo_key(&KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE)),
            Some(Msg::Navigate(name)) if name == ABOUT
        ));
        assert!(demo_key(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL)).is_none());
    }

    #[test]
    fn test_confirm_command_opens_dialog() {
        let mut shell = demo_shell();
        for c in "/confirm".chars() {
            let cmd = shell.update(key(KeyCode::Char(c)));
            drain(&mut shell, cmd);
        }
        let cmd = shell.update(key(KeyCode::Enter));
        drain(&mut shell, cmd);

        assert!(matches!(
            shell.dialogs().active(),
            Some(Dialog::Confirm(confirm)) if confirm.title() == "Quit"
        ));

        let cmd = shell.update(key(KeyCode::Enter));
        drain(&mut shell, cmd);
        assert!(shell.should_quit());
    }

    #[test]
    fn test_about_page_has_no_focus_help() {
        let mut shell = demo_shell();
        assert!(shell.footer_mut().to_plain(100).contains("next panel"));

        let cmd = shell.update(key(KeyCode::Tab));
        drain(&mut shell, cmd);
        let cmd = shell.update(key(KeyCode::Char('2')));
        drain(&mut shell, cmd);

        assert_eq!(shell.router().current_name(), ABOUT);
        assert!(!shell.footer_mut().to_plain(100).contains("next panel"));
    }
}
