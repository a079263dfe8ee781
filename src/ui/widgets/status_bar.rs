// ui/widgets/status_bar.rs - Status bar widget

use ratatui::{buffer::Buffer, layout::Rect, style::Style, text::Line, widgets::Widget};

use crate::snapshot::{Snapshot, StatusText};
use crate::ui::theme::Theme;

/// Status bar showing the command prompt, a message, or mode/file/position
pub struct StatusBar<'a> {
    pub snapshot: &'a Snapshot,
    pub theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(snapshot: &'a Snapshot, theme: &'a Theme) -> Self {
        Self { snapshot, theme }
    }

    /// The full status line for a bar `width` columns wide.
    pub fn text(&self, width: usize) -> String {
        match &self.snapshot.status {
            StatusText::Prompt(prompt) => pad(prompt.clone(), width),
            StatusText::Message(msg) => pad(msg.clone(), width),
            StatusText::Info => {
                let mut left = String::new();
                if let Some(mode) = self.snapshot.mode_label {
                    left.push_str(&format!(" {:<7}│ ", mode));
                } else {
                    left.push(' ');
                }
                left.push_str(&self.snapshot.file_name);
                if self.snapshot.modified {
                    left.push_str(" [+]");
                }
                let right = format!("│ {} ", self.snapshot.position_label());

                let used = left.chars().count() + right.chars().count();
                let gap = width.saturating_sub(used).max(1);
                format!("{}{}{}", left, " ".repeat(gap), right)
            }
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let status = self.text(area.width as usize);
        let line_widget = Line::from(status).style(
            Style::default()
                .bg(self.theme.ui.status_bar_bg)
                .fg(self.theme.ui.status_bar_fg),
        );
        buf.set_line(area.x, area.y, &line_widget, area.width);
    }
}

/// Pad the status text to fill the entire width
fn pad(text: String, width: usize) -> String {
    let len = text.chars().count();
    if len < width {
        format!("{}{}", text, " ".repeat(width - len))
    } else {
        text
    }
}
