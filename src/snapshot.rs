// snapshot.rs - Read-only view of the editor handed to the renderer each frame

/// A buffer line inside the viewport, already cut to the visible columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleLine {
    /// 1-based line number.
    pub number: usize,
    pub text: String,
}

/// What the status row shows. The command prompt wins over a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusText {
    Prompt(String),
    Message(String),
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub lines: Vec<VisibleLine>,
    /// Cursor (row, col) relative to the text area.
    pub cursor_screen: (usize, usize),
    /// `None` when the session is not modal.
    pub mode_label: Option<&'static str>,
    pub file_name: String,
    pub modified: bool,
    /// 1-based cursor line.
    pub cursor_line: usize,
    /// 1-based cursor column.
    pub cursor_col: usize,
    pub status: StatusText,
}

impl Snapshot {
    /// `"Ln 3, Col 7"`
    pub fn position_label(&self) -> String {
        format!("Ln {}, Col {}", self.cursor_line, self.cursor_col)
    }
}
