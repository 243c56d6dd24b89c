//! Root model.
//!
//! The shell stacks a header bar, the routed page body and a footer bar,
//! with the dialog layer on top. Input goes to the dialog manager first;
//! the page only sees a message when no dialog was open as it arrived.
//! Theme changes are the exception and reach every layer.
//!
//! The footer help always mirrors [`Page::help`] of the current page.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Clear, Widget},
};
use tracing::{debug, warn};

use crate::component::{Component, Page};
use crate::dialog::{Custom, DialogManager, ThemePicker};
use crate::event::{Command, Msg};
use crate::layout::clamp_dim;
use crate::router::{Route, Router};
use crate::theme::{Theme, ThemeManager, DEFAULT_THEME};
use crate::widgets::Bar;

const THEME_DIALOG_TITLE: &str = "Theme";

/// Root model owning the router, dialogs, bars and theme.
pub struct Shell {
    router: Router,
    dialogs: DialogManager,
    header: Bar,
    footer: Bar,
    theme: Theme,
    theme_name: String,
    themes: Option<ThemeManager>,
    show_header: bool,
    show_footer: bool,
    width: u16,
    height: u16,
    should_quit: bool,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell {
    pub fn new() -> Self {
        let mut shell = Self {
            router: Router::default(),
            dialogs: DialogManager::new(),
            header: Bar::header(),
            footer: Bar::footer(),
            theme: Theme::default(),
            theme_name: DEFAULT_THEME.to_string(),
            themes: None,
            show_header: true,
            show_footer: true,
            width: 0,
            height: 0,
            should_quit: false,
        };
        shell.propagate_theme();
        shell
    }

    #[must_use]
    pub fn with_pages(mut self, routes: impl IntoIterator<Item = Route>) -> Self {
        self.router = Router::new(routes);
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self.propagate_theme();
        self
    }

    /// Use `themes` as the theme context; changes are persisted through it.
    #[must_use]
    pub fn with_theme_manager(mut self, themes: ThemeManager) -> Self {
        self.theme = themes.current().clone();
        self.theme_name = themes.current_name().to_string();
        self.themes = Some(themes);
        self.propagate_theme();
        self
    }

    #[must_use]
    pub fn with_header(mut self, header: Bar) -> Self {
        self.header = header;
        self.header.set_theme(self.theme.clone());
        self
    }

    #[must_use]
    pub fn with_footer(mut self, footer: Bar) -> Self {
        self.footer = footer;
        self.footer.set_theme(self.theme.clone());
        self
    }

    #[must_use]
    pub fn with_header_bar(mut self, show: bool) -> Self {
        self.show_header = show;
        self
    }

    #[must_use]
    pub fn with_footer_bar(mut self, show: bool) -> Self {
        self.show_footer = show;
        self
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut Router {
        &mut self.router
    }

    pub fn dialogs(&self) -> &DialogManager {
        &self.dialogs
    }

    pub fn header_mut(&mut self) -> &mut Bar {
        &mut self.header
    }

    pub fn footer_mut(&mut self) -> &mut Bar {
        &mut self.footer
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn theme_name(&self) -> &str {
        &self.theme_name
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Init every layer and hand the first page the current theme.
    pub fn init(&mut self) -> Option<Command> {
        let theme_msg = self.theme_msg();
        let cmd = Command::batch([
            self.router.init(),
            self.router.update(&theme_msg),
            self.header.init(),
            self.footer.init(),
        ]);
        self.sync_footer_help();
        cmd
    }

    /// Process one message.
    pub fn update(&mut self, msg: Msg) -> Option<Command> {
        let msg = match msg {
            Msg::OpenDialog(dialog) => return self.dialogs.open(*dialog),
            other => other,
        };

        let mut theme_changed = false;
        match &msg {
            Msg::Quit => {
                self.should_quit = true;
                return None;
            }
            Msg::Key(key) if is_ctrl_c(key) => {
                self.should_quit = true;
                return None;
            }
            Msg::Resize { width, height } => {
                self.sync_viewport(*width, *height);
                return None;
            }
            Msg::OpenThemePicker => {
                if self.dialogs.is_open() {
                    return None;
                }
                return self.open_theme_picker();
            }
            Msg::ThemeChanged { name, theme } => {
                self.apply_theme(name, theme);
                theme_changed = true;
            }
            _ => {}
        }

        let unbuilt = match &msg {
            Msg::Navigate(name) => !self.router.is_cached(name),
            _ => false,
        };
        let was_open = self.dialogs.is_open();
        let dialog_cmd = self.dialogs.update(&msg);
        let page_cmd = if theme_changed || !was_open {
            self.router.update(&msg)
        } else {
            None
        };
        // pages built by this navigation never saw the current theme
        let built_cmd = match &msg {
            Msg::Navigate(name) if unbuilt && self.router.is_cached(name) => {
                let theme_msg = self.theme_msg();
                self.router.update(&theme_msg)
            }
            _ => None,
        };
        let header_cmd = self.header.update(&msg);
        let footer_cmd = self.footer.update(&msg);
        self.sync_footer_help();
        Command::batch([dialog_cmd, page_cmd, built_cmd, header_cmd, footer_cmd])
    }

    /// Draw background, body, bars, then the scrim and dialog.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_style(
            area,
            Style::default().fg(self.theme.text).bg(self.theme.background),
        );

        let header_rows = u16::from(self.show_header).min(area.height);
        let footer_rows = u16::from(self.show_footer).min(area.height - header_rows);
        let body_height = area.height - header_rows - footer_rows;

        let body = Rect::new(area.x, area.y + header_rows, area.width, body_height);
        if !body.is_empty() {
            self.router.render(body, buf);
        }
        if header_rows > 0 {
            self.header
                .render(Rect::new(area.x, area.y, area.width, 1), buf);
        }
        if footer_rows > 0 {
            let y = area.y + header_rows + body_height;
            self.footer.render(Rect::new(area.x, y, area.width, 1), buf);
        }

        if self.dialogs.is_open() {
            Clear.render(area, buf);
            buf.set_style(area, Style::default().bg(self.theme.scrim));
            self.dialogs.render(area, buf);
        }
    }

    fn theme_msg(&self) -> Msg {
        Msg::ThemeChanged {
            name: self.theme_name.clone(),
            theme: self.theme.clone(),
        }
    }

    fn body_height(&self, height: u16) -> u16 {
        height
            .saturating_sub(u16::from(self.show_header))
            .saturating_sub(u16::from(self.show_footer))
    }

    fn sync_viewport(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.router.set_size(width, self.body_height(height));
        self.dialogs.set_size(width, height);
        self.header.set_size(width, 1);
        self.footer.set_size(width, 1);
        self.sync_footer_help();
    }

    fn sync_footer_help(&mut self) {
        let help = self.router.current().map(|page| page.help()).unwrap_or_default();
        self.footer.set_help(help);
    }

    fn propagate_theme(&mut self) {
        self.header.set_theme(self.theme.clone());
        self.footer.set_theme(self.theme.clone());
        self.dialogs.set_theme(self.theme.clone());
    }

    fn apply_theme(&mut self, name: &str, theme: &Theme) {
        if let Some(themes) = self.themes.as_mut() {
            if themes.current_name() != name {
                if let Err(e) = themes.set(name) {
                    warn!(theme = name, error = %e, "Theme change not persisted");
                }
            }
        }
        debug!(theme = name, "Theme changed");
        self.theme = theme.clone();
        self.theme_name = name.to_string();
        self.propagate_theme();
    }

    fn open_theme_picker(&mut self) -> Option<Command> {
        let (width, height) = (self.width, self.height);
        let max_w = width.saturating_sub(4).max(36);
        let max_h = height.saturating_sub(4).max(10);
        let modal_w = clamp_dim(width.saturating_sub(12), 48.min(max_w), max_w);
        let modal_h = clamp_dim(height.saturating_sub(8), 18.min(max_h), max_h);

        let picker = ThemePicker::new(self.theme_name.clone(), self.theme.clone());
        self.dialogs.open(
            Custom::new(THEME_DIALOG_TITLE, picker).with_size(modal_w, modal_h),
        )
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Sizeable;
    use crate::keys::{KeyBinding, KeyChord};
    use crate::dialog::Confirm;
    use crate::router::page;
    use crate::test_utils::{
        buffer_to_string, create_test_terminal, create_test_terminal_sized, key_msg, key_msg_with,
        CounterPage, TEST_HEIGHT, TEST_WIDTH,
    };
    use crate::theme::{DRACULA, OSAKA_JADE};
    use bento_config::MemoryThemeStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Page that records the last theme it was told about.
    struct ThemeSpy {
        seen: Rc<RefCell<Option<String>>>,
        size: (u16, u16),
    }

    impl Component for ThemeSpy {
        fn update(&mut self, msg: &Msg) -> Option<Command> {
            if let Msg::ThemeChanged { name, .. } = msg {
                *self.seen.borrow_mut() = Some(name.clone());
            }
            None
        }

        fn render(&self, _area: Rect, _buf: &mut Buffer) {}

        fn set_size(&mut self, width: u16, height: u16) {
            self.size = (width, height);
        }
    }

    impl Sizeable for ThemeSpy {
        fn size(&self) -> (u16, u16) {
            self.size
        }
    }

    impl Page for ThemeSpy {
        fn title(&self) -> &str {
            "spy"
        }

        fn help(&self) -> Vec<KeyBinding> {
            vec![KeyBinding::new(
                [KeyChord::plain(KeyCode::Char('p'))],
                "p",
                "spy",
            )]
        }
    }

    fn counter_shell() -> Shell {
        let mut shell = Shell::new().with_pages([
            page("home", || Box::new(CounterPage::new("home"))),
            page("settings", || Box::new(CounterPage::new("settings"))),
        ]);
        let _ = shell.update(Msg::Resize {
            width: 80,
            height: 24,
        });
        shell
    }

    fn home_title(shell: &mut Shell) -> String {
        shell.router_mut().current().unwrap().title().to_string()
    }

    /// Feed a command's messages back in, like the run loop does.
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
    fn test_resize_splits_viewport() {
        let mut shell = counter_shell();
        assert_eq!(shell.size(), (80, 24));
        assert_eq!(shell.router_mut().current().unwrap().size(), (80, 22));
        assert_eq!(shell.dialogs().size(), (80, 24));
    }

    #[test]
    fn test_hidden_bars_give_body_full_height() {
        let mut shell = Shell::new()
            .with_header_bar(false)
            .with_footer_bar(false)
            .with_pages([page("home", || Box::new(CounterPage::new("home")))]);
        let _ = shell.update(Msg::Resize {
            width: 50,
            height: 10,
        });
        assert_eq!(shell.router_mut().current().unwrap().size(), (50, 10));
    }

    #[test]
    fn test_open_dialog_blocks_page_input() {
        let mut shell = counter_shell();
        let _ = shell.update(Msg::open_dialog(Confirm::new("t", "m")));
        assert!(shell.dialogs().is_open());

        let _ = shell.update(key_msg(KeyCode::Char('+')));
        assert_eq!(home_title(&mut shell), "home:0");

        // Esc closes the dialog and is not replayed to the page
        let _ = shell.update(key_msg(KeyCode::Esc));
        assert!(!shell.dialogs().is_open());

        let _ = shell.update(key_msg(KeyCode::Char('+')));
        assert_eq!(home_title(&mut shell), "home:1");
    }

    #[test]
    fn test_navigation_reaches_router() {
        let mut shell = counter_shell();
        let _ = shell.update(Msg::navigate("settings"));
        assert_eq!(shell.router().current_name(), "settings");
    }

    #[test]
    fn test_confirm_callback_runs_through_loop() {
        let mut shell = counter_shell();
        let cmd = shell.update(Msg::open_dialog(
            Confirm::new("Go", "Open settings?").on_confirm(|| Msg::navigate("settings")),
        ));
        drain(&mut shell, cmd);

        let cmd = shell.update(key_msg(KeyCode::Enter));
        drain(&mut shell, cmd);
        assert!(!shell.dialogs().is_open());
        assert_eq!(shell.router().current_name(), "settings");
    }

    #[test]
    fn test_theme_picker_opens_only_without_dialog() {
        let mut shell = counter_shell();
        let _ = shell.update(Msg::open_dialog(Confirm::new("A", "first")));
        let _ = shell.update(Msg::OpenThemePicker);
        assert_eq!(shell.dialogs().active().unwrap().title(), "A");

        let _ = shell.update(Msg::CloseDialog);
        let _ = shell.update(Msg::OpenThemePicker);
        let active = shell.dialogs().active().unwrap();
        assert_eq!(active.title(), THEME_DIALOG_TITLE);
        // 80x24 viewport: clamp(68, 48, 76) x clamp(16, 18, 20)
        assert_eq!(active.size(), (68, 18));
    }

    #[test]
    fn test_theme_picker_selection_applies_and_persists() {
        let store = MemoryThemeStore::new();
        let mut shell = Shell::new()
            .with_theme_manager(ThemeManager::load(store.clone()))
            .with_pages([page("home", || Box::new(CounterPage::new("home")))]);
        let _ = shell.update(Msg::Resize {
            width: 80,
            height: 24,
        });

        let _ = shell.update(Msg::OpenThemePicker);
        let _ = shell.update(key_msg(KeyCode::Down));
        let cmd = shell.update(key_msg(KeyCode::Enter));
        drain(&mut shell, cmd);

        assert!(!shell.dialogs().is_open());
        assert_eq!(shell.theme_name(), DRACULA);
        assert_eq!(shell.theme(), &Theme::dracula());
        assert_eq!(store.stored(), Some(DRACULA.to_string()));
    }

    #[test]
    fn test_theme_change_reaches_page_under_dialog() {
        let seen = Rc::new(RefCell::new(None));
        let spy_seen = Rc::clone(&seen);
        let mut shell = Shell::new().with_pages([page("spy", move || {
            Box::new(ThemeSpy {
                seen: Rc::clone(&spy_seen),
                size: (0, 0),
            })
        })]);
        let _ = shell.update(Msg::open_dialog(Confirm::new("t", "m")));

        let _ = shell.update(Msg::ThemeChanged {
            name: OSAKA_JADE.into(),
            theme: Theme::osaka_jade(),
        });
        assert!(shell.dialogs().is_open());
        assert_eq!(seen.borrow().as_deref(), Some(OSAKA_JADE));
        assert_eq!(shell.theme(), &Theme::osaka_jade());
    }

    #[test]
    fn test_pages_start_with_current_theme() {
        let first = Rc::new(RefCell::new(None));
        let second = Rc::new(RefCell::new(None));
        let (a, b) = (Rc::clone(&first), Rc::clone(&second));
        let mut shell = Shell::new()
            .with_theme_manager(ThemeManager::load(MemoryThemeStore::with_name(DRACULA)))
            .with_pages([
                page("a", move || {
                    Box::new(ThemeSpy {
                        seen: Rc::clone(&a),
                        size: (0, 0),
                    })
                }),
                page("b", move || {
                    Box::new(ThemeSpy {
                        seen: Rc::clone(&b),
                        size: (0, 0),
                    })
                }),
            ]);

        let cmd = shell.init();
        drain(&mut shell, cmd);
        assert_eq!(first.borrow().as_deref(), Some(DRACULA));
        assert_eq!(second.borrow().as_deref(), None);

        let _ = shell.update(Msg::navigate("b"));
        assert_eq!(second.borrow().as_deref(), Some(DRACULA));
    }

    #[test]
    fn test_footer_help_follows_current_page() {
        let mut shell = Shell::new().with_pages([
            page("spy", || {
                Box::new(ThemeSpy {
                    seen: Rc::new(RefCell::new(None)),
                    size: (0, 0),
                })
            }),
            page("home", || Box::new(CounterPage::new("home"))),
        ]);
        let _ = shell.update(Msg::Resize {
            width: 60,
            height: 10,
        });
        assert_eq!(shell.footer_mut().to_plain(60).trim_end(), "p: spy");

        let _ = shell.update(Msg::navigate("home"));
        assert_eq!(shell.footer_mut().to_plain(60).trim_end(), "");
    }

    #[test]
    fn test_quit_and_ctrl_c() {
        let mut shell = counter_shell();
        assert!(!shell.should_quit());
        let _ = shell.update(Msg::Quit);
        assert!(shell.should_quit());

        let mut shell = counter_shell();
        let _ = shell.update(key_msg_with(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(shell.should_quit());
    }

    #[test]
    fn test_render_stacks_header_body_footer() {
        let mut shell = Shell::new()
            .with_header(Bar::header().left("bento").right("home"))
            .with_footer(Bar::footer().left("q quit"))
            .with_pages([page("home", || Box::new(CounterPage::new("home")))]);
        let _ = shell.update(Msg::Resize {
            width: 30,
            height: 4,
        });

        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);
        shell.render(area, &mut buf);
        assert_eq!(
            buffer_to_string(&buf),
            "bento                     home\nhome:0\n\nq quit"
        );
    }

    #[test]
    fn test_draw_on_default_terminal() {
        let mut shell = Shell::new()
            .with_header(Bar::header().left("bento"))
            .with_pages([page("home", || Box::new(CounterPage::new("home")))]);
        let _ = shell.update(Msg::Resize {
            width: TEST_WIDTH,
            height: TEST_HEIGHT,
        });

        let mut terminal = create_test_terminal();
        terminal
            .draw(|frame| shell.render(frame.area(), frame.buffer_mut()))
            .unwrap();
        let text = buffer_to_string(terminal.backend().buffer());
        let rows: Vec<&str> = text.split('\n').collect();
        assert_eq!(rows.len(), usize::from(TEST_HEIGHT));
        assert_eq!(rows[0], "bento");
        assert_eq!(rows[1], "home:0");
    }

    #[test]
    fn test_render_dialog_hides_page() {
        let mut shell = counter_shell();
        let _ = shell.update(Msg::open_dialog(Confirm::new("Delete", "Remove item?")));

        let mut terminal = create_test_terminal_sized(80, 24);
        terminal
            .draw(|frame| shell.render(frame.area(), frame.buffer_mut()))
            .unwrap();
        let text = buffer_to_string(terminal.backend().buffer());
        assert!(text.contains("Remove item?"));
        assert!(!text.contains("home:0"));
    }
}
