// ui/widgets/gutter.rs - Gutter widget for line numbers

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::snapshot::Snapshot;
use crate::ui::theme::Theme;

/// Left-aligned 1-based line numbers for the visible rows
pub struct Gutter<'a> {
    pub snapshot: &'a Snapshot,
    pub theme: &'a Theme,
}

impl<'a> Gutter<'a> {
    pub fn new(snapshot: &'a Snapshot, theme: &'a Theme) -> Self {
        Self { snapshot, theme }
    }
}

impl Widget for Gutter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width as usize;
        for (i, line) in self.snapshot.lines.iter().enumerate().take(area.height as usize) {
            let text = format!("{:<width$}", line.number, width = width);
            let line_widget = Line::from(Span::styled(
                text,
                Style::default().fg(self.theme.ui.gutter_fg),
            ));
            buf.set_line(area.x, area.y + i as u16, &line_widget, area.width);
        }
    }
}
