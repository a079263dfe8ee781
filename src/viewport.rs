use crate::cursor::Cursor;

/// Visible window over the buffer: scroll offsets plus text-area size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub offset_line: usize,
    pub offset_col: usize,
    pub rows: usize,
    pub cols: usize,
}

impl Viewport {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            offset_line: 0,
            offset_col: 0,
            rows,
            cols,
        }
    }

    pub fn resize(&mut self, rows: usize, cols: usize, cursor: Cursor) {
        self.rows = rows;
        self.cols = cols;
        self.resync(cursor);
    }

    /// Scroll just far enough to bring the cursor into view.
    ///
    /// An axis with zero size is left alone.
    pub fn resync(&mut self, cursor: Cursor) {
        if self.rows > 0 {
            if cursor.line < self.offset_line {
                self.offset_line = cursor.line;
            } else if cursor.line >= self.offset_line + self.rows {
                self.offset_line = cursor.line + 1 - self.rows;
            }
        }
        if self.cols > 0 {
            if cursor.col < self.offset_col {
                self.offset_col = cursor.col;
            } else if cursor.col >= self.offset_col + self.cols {
                self.offset_col = cursor.col + 1 - self.cols;
            }
        }
    }

    /// Cursor position relative to the top-left visible cell.
    pub fn screen_position(&self, cursor: Cursor) -> (usize, usize) {
        (
            cursor.line.saturating_sub(self.offset_line),
            cursor.col.saturating_sub(self.offset_col),
        )
    }
}
