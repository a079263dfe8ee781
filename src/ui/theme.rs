// ui/theme.rs - Theme system for UI styling

use ratatui::style::Color;

/// Theme configuration
#[derive(Debug, Clone, Default)]
pub struct Theme {
    pub general: GeneralTheme,
    pub ui: UiTheme,
}

#[derive(Debug, Clone)]
pub struct GeneralTheme {
    pub background: Color,
    pub foreground: Color,
}

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub title_fg: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    pub gutter_fg: Color,
    pub filler_fg: Color,
    pub cursor_bg: Color,
    pub cursor_fg: Color,
}

impl Default for GeneralTheme {
    fn default() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::Reset,
        }
    }
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            title_fg: Color::Reset,
            status_bar_bg: Color::White,
            status_bar_fg: Color::Black,
            gutter_fg: Color::DarkGray,
            filler_fg: Color::DarkGray,
            cursor_bg: Color::Gray,
            cursor_fg: Color::Black,
        }
    }
}
