// Common test utilities for editor scenarios

use atto::buffer::Buffer;
use atto::config::EditorConfig;
use atto::editor::Editor;
use atto::input::Key;

/// Utilities for creating editors with specific buffer state
pub mod boundary {
    use super::*;

    /// Create a buffer with n lines of varying lengths
    /// Line i has (i % 10) + 1 characters
    #[allow(dead_code)]
    pub fn create_multiline_buffer(line_count: usize) -> Buffer {
        let text = (0..line_count)
            .map(|i| "a".repeat(i % 10 + 1))
            .collect::<Vec<_>>()
            .join("\n");
        Buffer::from_text(&text)
    }

    /// Modal editor holding `text`, with a 10x20 viewport
    #[allow(dead_code)]
    pub fn create_editor_with_text(text: &str) -> Editor {
        create_editor_with_config(text, EditorConfig::default())
    }

    #[allow(dead_code)]
    pub fn create_editor_with_config(text: &str, config: EditorConfig) -> Editor {
        let mut editor = Editor::new(config);
        editor.buffer = Buffer::from_text(text);
        editor.resize_viewport(10, 20);
        editor
    }

    /// Get all boundary positions for a buffer: start, last char and one past
    /// the end of every line
    #[allow(dead_code)]
    pub fn get_boundary_positions(buffer: &Buffer) -> Vec<(usize, usize)> {
        let mut positions = Vec::new();
        for line in 0..buffer.line_count() {
            let line_len = buffer.line_length(line);
            positions.push((line, 0));
            if line_len > 0 {
                positions.push((line, line_len - 1));
            }
            positions.push((line, line_len));
        }
        positions
    }
}

/// Validation utilities for checking invariants
pub mod validation {
    use super::*;

    /// Assert cursor is in valid position
    #[allow(dead_code)]
    pub fn assert_cursor_valid(editor: &Editor) {
        assert!(
            editor.cursor.line < editor.buffer.line_count(),
            "Cursor line {} out of bounds (line_count: {})",
            editor.cursor.line,
            editor.buffer.line_count()
        );
        assert!(
            editor.cursor.col <= editor.buffer.line_length(editor.cursor.line),
            "Cursor col {} out of bounds for line {} (line_len: {})",
            editor.cursor.col,
            editor.cursor.line,
            editor.buffer.line_length(editor.cursor.line)
        );
    }

    /// Assert the cursor sits inside the viewport
    #[allow(dead_code)]
    pub fn assert_cursor_visible(editor: &Editor) {
        let vp = &editor.viewport;
        assert!(
            editor.cursor.line >= vp.offset_line && editor.cursor.line < vp.offset_line + vp.rows,
            "Cursor line {} outside rows {}..{}",
            editor.cursor.line,
            vp.offset_line,
            vp.offset_line + vp.rows
        );
        assert!(
            editor.cursor.col >= vp.offset_col && editor.cursor.col < vp.offset_col + vp.cols,
            "Cursor col {} outside cols {}..{}",
            editor.cursor.col,
            vp.offset_col,
            vp.offset_col + vp.cols
        );
    }

    #[allow(dead_code)]
    pub fn lines(editor: &Editor) -> Vec<String> {
        (0..editor.buffer.line_count())
            .map(|row| editor.buffer.line_text(row).expect("All lines should be accessible"))
            .collect()
    }
}

/// Utilities for driving the editor with keys
pub mod keys {
    use super::*;

    #[allow(dead_code)]
    pub fn type_text(editor: &mut Editor, text: &str) {
        for c in text.chars() {
            editor.handle_input(Key::Char(c));
        }
    }

    /// Type `:<command>` and press Enter
    #[allow(dead_code)]
    pub fn run_command(editor: &mut Editor, command: &str) {
        editor.handle_input(Key::Char(':'));
        type_text(editor, command);
        editor.handle_input(Key::Enter);
    }
}
