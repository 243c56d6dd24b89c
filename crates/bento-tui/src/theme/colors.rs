//! Theme color palettes.
//!
//! Three presets ship with bento: Catppuccin Mocha (default), Dracula and
//! Osaka Jade.

use ratatui::style::Color;

/// Preset name of the default theme.
pub const DEFAULT_THEME: &str = CATPPUCCIN_MOCHA;
pub const CATPPUCCIN_MOCHA: &str = "catppuccin-mocha";
pub const DRACULA: &str = "dracula";
pub const OSAKA_JADE: &str = "osaka-jade";

const PRESETS: [&str; 3] = [CATPPUCCIN_MOCHA, DRACULA, OSAKA_JADE];

/// Theme color palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Base
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
    pub background: Color,
    pub panel_bg: Color,
    pub element_bg: Color,

    // Semantic
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // Borders
    pub border: Color,
    pub border_focused: Color,

    // Selection and input
    pub selection_bg: Color,
    pub selection_text: Color,
    pub input_bg: Color,

    // Chrome
    pub title_text: Color,
    pub title_bg: Color,
    pub status_text: Color,
    pub status_bg: Color,

    // Dialogs
    pub dialog_text: Color,
    pub dialog_bg: Color,
    pub dialog_border: Color,
    pub scrim: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::catppuccin_mocha()
    }
}

impl Theme {
    /// Look up a preset by name.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            CATPPUCCIN_MOCHA => Some(Self::catppuccin_mocha()),
            DRACULA => Some(Self::dracula()),
            OSAKA_JADE => Some(Self::osaka_jade()),
            _ => None,
        }
    }

    /// Names of all presets, default first.
    pub fn available() -> &'static [&'static str] {
        &PRESETS
    }

    /// Catppuccin Mocha (default dark theme).
    pub fn catppuccin_mocha() -> Self {
        Self {
            accent: Color::Rgb(137, 180, 250),     // #89b4fa
            text: Color::Rgb(205, 214, 244),       // #cdd6f4
            muted: Color::Rgb(186, 194, 222),      // #bac2de
            background: Color::Rgb(24, 24, 37),    // #181825
            panel_bg: Color::Rgb(36, 39, 58),      // #24273a
            element_bg: Color::Rgb(49, 50, 68),    // #313244
            success: Color::Rgb(166, 227, 161),    // #a6e3a1
            warning: Color::Rgb(249, 226, 175),    // #f9e2af
            error: Color::Rgb(243, 139, 168),      // #f38ba8
            border: Color::Rgb(88, 91, 112),       // #585b70
            border_focused: Color::Rgb(137, 180, 250),
            selection_bg: Color::Rgb(137, 180, 250),
            selection_text: Color::Rgb(30, 30, 46), // #1e1e2e
            input_bg: Color::Rgb(43, 44, 63),      // #2b2c3f
            title_text: Color::Rgb(30, 30, 46),
            title_bg: Color::Rgb(137, 180, 250),
            status_text: Color::Rgb(205, 214, 244),
            status_bg: Color::Rgb(17, 17, 27),     // #11111b
            dialog_text: Color::Rgb(205, 214, 244),
            dialog_bg: Color::Rgb(49, 50, 68),
            dialog_border: Color::Rgb(137, 180, 250),
            scrim: Color::Rgb(15, 15, 23),         // #0f0f17
        }
    }

    /// Dracula.
    pub fn dracula() -> Self {
        Self {
            accent: Color::Rgb(255, 121, 198),     // #ff79c6
            text: Color::Rgb(248, 248, 242),       // #f8f8f2
            muted: Color::Rgb(178, 190, 220),      // #b2bedc
            background: Color::Rgb(40, 42, 54),    // #282a36
            panel_bg: Color::Rgb(48, 51, 65),      // #303341
            element_bg: Color::Rgb(59, 62, 77),    // #3b3e4d
            success: Color::Rgb(80, 250, 123),     // #50fa7b
            warning: Color::Rgb(255, 184, 108),    // #ffb86c
            error: Color::Rgb(255, 85, 85),        // #ff5555
            border: Color::Rgb(98, 114, 164),      // #6272a4
            border_focused: Color::Rgb(255, 121, 198),
            selection_bg: Color::Rgb(189, 147, 249), // #bd93f9
            selection_text: Color::Rgb(30, 31, 41),  // #1e1f29
            input_bg: Color::Rgb(58, 61, 76),      // #3a3d4c
            title_text: Color::Rgb(40, 42, 54),
            title_bg: Color::Rgb(189, 147, 249),
            status_text: Color::Rgb(248, 248, 242),
            status_bg: Color::Rgb(31, 34, 48),     // #1f2230
            dialog_text: Color::Rgb(248, 248, 242),
            dialog_bg: Color::Rgb(47, 51, 67),     // #2f3343
            dialog_border: Color::Rgb(255, 121, 198),
            scrim: Color::Rgb(22, 24, 33),         // #161821
        }
    }

    /// Osaka Jade.
    pub fn osaka_jade() -> Self {
        Self {
            accent: Color::Rgb(56, 194, 163),      // #38c2a3
            text: Color::Rgb(213, 239, 233),       // #d5efe9
            muted: Color::Rgb(134, 184, 172),      // #86b8ac
            background: Color::Rgb(7, 27, 26),     // #071b1a
            panel_bg: Color::Rgb(12, 35, 34),      // #0c2322
            element_bg: Color::Rgb(19, 48, 46),    // #13302e
            success: Color::Rgb(86, 211, 155),     // #56d39b
            warning: Color::Rgb(244, 193, 109),    // #f4c16d
            error: Color::Rgb(242, 106, 106),      // #f26a6a
            border: Color::Rgb(47, 110, 99),       // #2f6e63
            border_focused: Color::Rgb(93, 224, 191), // #5de0bf
            selection_bg: Color::Rgb(27, 80, 73),  // #1b5049
            selection_text: Color::Rgb(227, 251, 245), // #e3fbf5
            input_bg: Color::Rgb(19, 50, 46),      // #13322e
            title_text: Color::Rgb(7, 27, 26),
            title_bg: Color::Rgb(56, 194, 163),
            status_text: Color::Rgb(213, 239, 233),
            status_bg: Color::Rgb(11, 36, 34),     // #0b2422
            dialog_text: Color::Rgb(213, 239, 233),
            dialog_bg: Color::Rgb(16, 47, 43),     // #102f2b
            dialog_border: Color::Rgb(93, 224, 191),
            scrim: Color::Rgb(3, 18, 17),          // #031211
        }
    }
}
