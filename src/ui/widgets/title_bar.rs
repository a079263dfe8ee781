// ui/widgets/title_bar.rs - One-row title at the top of the screen

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Widget,
};

use crate::ui::theme::Theme;

pub const TITLE: &str = "Atto";

pub struct TitleBar<'a> {
    pub theme: &'a Theme,
}

impl<'a> TitleBar<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for TitleBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line_widget = Line::from(TITLE).style(
            Style::default()
                .fg(self.theme.ui.title_fg)
                .add_modifier(Modifier::BOLD),
        );
        buf.set_line(area.x, area.y, &line_widget, area.width);
    }
}
