use crate::buffer::Buffer;

/// Cursor position in buffer coordinates. `col` may equal the line length,
/// meaning "after the last character".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub line: usize,
    pub col: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self { line: 0, col: 0 }
    }

    pub fn at(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    /// Pull the cursor back inside the buffer's current shape.
    pub fn clamp(&mut self, buffer: &Buffer) {
        self.line = self.line.min(buffer.line_count().saturating_sub(1));
        self.col = self.col.min(buffer.line_length(self.line));
    }

    pub fn move_up(&mut self, buffer: &Buffer) {
        if self.line > 0 {
            self.line -= 1;
        }
        self.clamp(buffer);
    }

    pub fn move_down(&mut self, buffer: &Buffer) {
        if self.line + 1 < buffer.line_count() {
            self.line += 1;
        }
        self.clamp(buffer);
    }

    /// Step left, wrapping to the end of the previous line at column 0.
    pub fn move_left(&mut self, buffer: &Buffer) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.line > 0 {
            self.line -= 1;
            self.col = buffer.line_length(self.line);
        }
        self.clamp(buffer);
    }

    /// Step right, wrapping to the start of the next line at end of line.
    pub fn move_right(&mut self, buffer: &Buffer) {
        if self.col < buffer.line_length(self.line) {
            self.col += 1;
        } else if self.line + 1 < buffer.line_count() {
            self.line += 1;
            self.col = 0;
        }
        self.clamp(buffer);
    }
}
