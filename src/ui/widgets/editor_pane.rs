// ui/widgets/editor_pane.rs - Editor pane widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::snapshot::Snapshot;
use crate::ui::theme::Theme;

/// Editor pane widget that renders the visible slice of the buffer
pub struct EditorPane<'a> {
    pub snapshot: &'a Snapshot,
    pub theme: &'a Theme,
}

impl<'a> EditorPane<'a> {
    pub fn new(snapshot: &'a Snapshot, theme: &'a Theme) -> Self {
        Self { snapshot, theme }
    }
}

impl Widget for EditorPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.theme.general.background));

        for i in 0..area.height as usize {
            let line_widget = match self.snapshot.lines.get(i) {
                Some(line) => Line::from(Span::styled(
                    line.text.as_str(),
                    Style::default().fg(self.theme.general.foreground),
                )),
                None => Line::from(Span::styled(
                    "~",
                    Style::default().fg(self.theme.ui.filler_fg),
                )),
            };
            buf.set_line(area.x, area.y + i as u16, &line_widget, area.width);
        }

        let (cursor_row, cursor_col) = self.snapshot.cursor_screen;
        if cursor_row < area.height as usize && cursor_col < area.width as usize {
            buf.get_mut(area.x + cursor_col as u16, area.y + cursor_row as u16)
                .set_style(
                    Style::default()
                        .bg(self.theme.ui.cursor_bg)
                        .fg(self.theme.ui.cursor_fg),
                );
        }
    }
}
