// ui/renderer.rs - Ratatui-based renderer for the text editor

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
};
use std::io::Stdout;

use crate::editor::Editor;
use crate::ui::theme::Theme;
use crate::ui::widgets::editor_pane::EditorPane;
use crate::ui::widgets::gutter::Gutter;
use crate::ui::widgets::status_bar::StatusBar;
use crate::ui::widgets::title_bar::TitleBar;

/// Width of the line-number column.
pub const GUTTER_WIDTH: u16 = 5;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    pub title: Rect,
    pub gutter: Rect,
    pub text: Rect,
    pub status: Rect,
}

impl FrameLayout {
    /// Title row, main pane (gutter + text), status row.
    pub fn split(area: Rect) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(0),    // Editor area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let editor_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(GUTTER_WIDTH), Constraint::Min(0)])
            .split(vertical_chunks[1]);

        Self {
            title: vertical_chunks[0],
            gutter: editor_chunks[0],
            text: editor_chunks[1],
            status: vertical_chunks[2],
        }
    }
}

/// Ratatui-based renderer for the text editor
pub struct TuiRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
}

impl TuiRenderer {
    pub fn new() -> std::io::Result<Self> {
        let backend = CrosstermBackend::new(std::io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            theme: Theme::default(),
        })
    }

    /// Draw the editor UI. The text area size of this frame becomes the
    /// editor's viewport size.
    pub fn draw(&mut self, editor: &mut Editor) -> std::io::Result<()> {
        let theme = &self.theme;
        self.terminal.draw(|f| {
            let layout = FrameLayout::split(f.size());
            editor.resize_viewport(layout.text.height as usize, layout.text.width as usize);
            let snapshot = editor.snapshot();

            f.render_widget(TitleBar::new(theme), layout.title);
            f.render_widget(Gutter::new(&snapshot, theme), layout.gutter);
            f.render_widget(EditorPane::new(&snapshot, theme), layout.text);
            f.render_widget(StatusBar::new(&snapshot, theme), layout.status);

            let (cursor_row, cursor_col) = snapshot.cursor_screen;
            if cursor_row < layout.text.height as usize && cursor_col < layout.text.width as usize {
                f.set_cursor(
                    layout.text.x + cursor_col as u16,
                    layout.text.y + cursor_row as u16,
                );
            }
        })?;
        Ok(())
    }
}
