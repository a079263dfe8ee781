use ropey::Rope;
use std::fs;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("line {0} is out of range")]
    LineOutOfRange(usize),
    #[error("column {col} is out of range for line {row}")]
    ColumnOutOfRange { row: usize, col: usize },
    #[error("newlines must be inserted with split_line")]
    EmbeddedNewline,
    #[error("nothing to delete at line {0}")]
    NothingToDelete(usize),
}

/// Ordered sequence of lines backed by a rope.
///
/// The rope is built without CR/Unicode line-break recognition, so `\n` is the
/// only separator and a buffer always holds at least one (possibly empty)
/// line. Columns are counted in chars.
pub struct Buffer {
    pub rope: Rope,
    pub modified: bool,
}

impl Buffer {
    pub fn new() -> Self {
        Self {
            rope: Rope::from(""),
            modified: false,
        }
    }

    /// Build a buffer from on-disk text.
    ///
    /// A trailing `\r` is stripped from every line and a final `\n`
    /// terminator does not produce an extra empty line.
    pub fn from_text(text: &str) -> Self {
        let body = text.strip_suffix('\n').unwrap_or(text);
        let lines: Vec<&str> = body
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        Self {
            rope: Rope::from_str(&lines.join("\n")),
            modified: false,
        }
    }

    /// Lines joined by `\n`, without a terminator after the last one.
    pub fn to_text(&self) -> String {
        self.rope.to_string()
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer {
    pub fn insert_char(&mut self, ch: char, row: usize, col: usize) -> Result<(), BufferError> {
        if ch == '\n' {
            return Err(BufferError::EmbeddedNewline);
        }
        let char_idx = self.char_index(row, col)?;
        self.rope.insert_char(char_idx, ch);
        self.modified = true;
        Ok(())
    }

    /// Split `row` at `col`: the head stays, the tail becomes line `row + 1`.
    pub fn split_line(&mut self, row: usize, col: usize) -> Result<(), BufferError> {
        let char_idx = self.char_index(row, col)?;
        self.rope.insert_char(char_idx, '\n');
        self.modified = true;
        Ok(())
    }

    /// Append line `row` to line `row - 1` and remove it.
    pub fn merge_with_previous(&mut self, row: usize) -> Result<(), BufferError> {
        if row == 0 {
            return Err(BufferError::NothingToDelete(row));
        }
        if row >= self.line_count() {
            return Err(BufferError::LineOutOfRange(row));
        }
        let line_start = self.rope.line_to_char(row);
        self.rope.remove(line_start - 1..line_start);
        self.modified = true;
        Ok(())
    }

    /// Remove the character at `col - 1` on line `row`.
    pub fn delete_char_before(&mut self, row: usize, col: usize) -> Result<(), BufferError> {
        if col == 0 {
            return Err(BufferError::NothingToDelete(row));
        }
        let char_idx = self.char_index(row, col)?;
        self.rope.remove(char_idx - 1..char_idx);
        self.modified = true;
        Ok(())
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn line_text(&self, row: usize) -> Option<String> {
        if row < self.line_count() {
            let line = self.rope.line(row).to_string();
            match line.strip_suffix('\n') {
                Some(stripped) => Some(stripped.to_string()),
                None => Some(line),
            }
        } else {
            None
        }
    }

    /// Length of `row` in chars, excluding the separator. Zero past the end.
    pub fn line_length(&self, row: usize) -> usize {
        if row >= self.line_count() {
            return 0;
        }
        let line = self.rope.line(row);
        let len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    /// Chars of `row` starting at `start`, at most `width` of them.
    pub fn line_window(&self, row: usize, start: usize, width: usize) -> String {
        if row >= self.line_count() {
            return String::new();
        }
        self.rope
            .line(row)
            .chars()
            .filter(|&c| c != '\n')
            .skip(start)
            .take(width)
            .collect()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, BufferError> {
        let bytes = fs::read(path.as_ref())?;
        Ok(Self::from_text(&String::from_utf8_lossy(&bytes)))
    }

    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), BufferError> {
        fs::write(path.as_ref(), self.to_text())?;
        self.modified = false;
        Ok(())
    }

    fn char_index(&self, row: usize, col: usize) -> Result<usize, BufferError> {
        if row >= self.line_count() {
            return Err(BufferError::LineOutOfRange(row));
        }
        if col > self.line_length(row) {
            return Err(BufferError::ColumnOutOfRange { row, col });
        }
        Ok(self.rope.line_to_char(row) + col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(buffer: &Buffer) -> Vec<String> {
        (0..buffer.line_count())
            .map(|row| buffer.line_text(row).unwrap())
            .collect()
    }

    #[test]
    fn test_new_buffer_has_one_empty_line() {
        let buffer = Buffer::new();
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.line_text(0).unwrap(), "");
        assert_eq!(buffer.line_length(0), 0);
    }

    #[test]
    fn test_insert_char() {
        let mut buffer = Buffer::new();
        buffer.insert_char('a', 0, 0).unwrap();
        buffer.insert_char('c', 0, 1).unwrap();
        buffer.insert_char('b', 0, 1).unwrap();
        assert_eq!(buffer.line_text(0).unwrap(), "abc");
        assert!(buffer.modified);
    }

    #[test]
    fn test_insert_char_rejects_newline_and_bad_column() {
        let mut buffer = Buffer::from_text("ab");
        assert!(matches!(
            buffer.insert_char('\n', 0, 1),
            Err(BufferError::EmbeddedNewline)
        ));
        assert!(matches!(
            buffer.insert_char('x', 0, 3),
            Err(BufferError::ColumnOutOfRange { row: 0, col: 3 })
        ));
        assert!(matches!(
            buffer.insert_char('x', 1, 0),
            Err(BufferError::LineOutOfRange(1))
        ));
        assert_eq!(lines(&buffer), vec!["ab"]);
        assert!(!buffer.modified);
    }

    #[test]
    fn test_split_line_middle_and_end() {
        let mut buffer = Buffer::from_text("hello\nworld");
        buffer.split_line(0, 2).unwrap();
        assert_eq!(lines(&buffer), vec!["he", "llo", "world"]);
        buffer.split_line(2, 5).unwrap();
        assert_eq!(lines(&buffer), vec!["he", "llo", "world", ""]);
    }

    #[test]
    fn test_merge_with_previous() {
        let mut buffer = Buffer::from_text("foo\nbar");
        buffer.merge_with_previous(1).unwrap();
        assert_eq!(lines(&buffer), vec!["foobar"]);
        assert!(buffer.merge_with_previous(0).is_err());
        assert_eq!(buffer.line_count(), 1);
    }

    #[test]
    fn test_delete_char_before() {
        let mut buffer = Buffer::from_text("abc");
        buffer.delete_char_before(0, 2).unwrap();
        assert_eq!(lines(&buffer), vec!["ac"]);
        assert!(buffer.delete_char_before(0, 0).is_err());
        assert_eq!(lines(&buffer), vec!["ac"]);
    }

    #[test]
    fn test_from_text_normalizes_line_endings() {
        let buffer = Buffer::from_text("one\r\ntwo\r\nthree\n");
        assert_eq!(lines(&buffer), vec!["one", "two", "three"]);
        assert_eq!(buffer.to_text(), "one\ntwo\nthree");
    }

    #[test]
    fn test_from_text_keeps_inner_carriage_return() {
        let buffer = Buffer::from_text("a\rb\n");
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.line_length(0), 3);
    }

    #[test]
    fn test_from_text_empty_and_blank_lines() {
        assert_eq!(lines(&Buffer::from_text("")), vec![""]);
        assert_eq!(lines(&Buffer::from_text("\n")), vec![""]);
        assert_eq!(lines(&Buffer::from_text("a\n\n")), vec!["a", ""]);
    }

    #[test]
    fn test_line_window() {
        let buffer = Buffer::from_text("abcdef\nxy");
        assert_eq!(buffer.line_window(0, 2, 3), "cde");
        assert_eq!(buffer.line_window(0, 10, 3), "");
        assert_eq!(buffer.line_window(1, 0, 10), "xy");
        assert_eq!(buffer.line_window(5, 0, 10), "");
    }

    #[test]
    fn test_load_and_save() {
        use tempfile::NamedTempFile;
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "hello\r\nworld\n").unwrap();

        let mut buffer = Buffer::load_from_file(temp_file.path()).unwrap();
        assert_eq!(lines(&buffer), vec!["hello", "world"]);

        buffer.insert_char('!', 1, 5).unwrap();
        let save_file = NamedTempFile::new().unwrap();
        buffer.save_to_file(save_file.path()).unwrap();
        assert!(!buffer.modified);
        let content = fs::read_to_string(save_file.path()).unwrap();
        assert_eq!(content, "hello\nworld!");
    }
}
