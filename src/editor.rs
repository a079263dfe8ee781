// src/editor.rs - Core editor coordinator

use crate::buffer::{Buffer, BufferError};
use crate::command::Command;
use crate::command_line::ExCommand;
use crate::config::EditorConfig;
use crate::cursor::Cursor;
use crate::input::Key;
use crate::keymap::ModeController;
use crate::mode::Mode;
use crate::snapshot::{Snapshot, StatusText, VisibleLine};
use crate::viewport::Viewport;
use log::{debug, info, warn};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("No filename specified.")]
    NoFileName,
    #[error(transparent)]
    Buffer(#[from] BufferError),
}

pub struct Editor {
    pub buffer: Buffer,
    pub cursor: Cursor,
    pub mode: Mode,
    pub viewport: Viewport,
    pub file_path: Option<PathBuf>,
    pub command_line: String,
    pub status_message: Option<String>,
    config: EditorConfig,
    controller: ModeController,
    running: bool,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        let controller = config.controller();
        Self {
            buffer: Buffer::new(),
            cursor: Cursor::new(),
            mode: controller.initial_mode(),
            viewport: Viewport::new(0, 0),
            file_path: None,
            command_line: String::new(),
            status_message: None,
            config,
            controller,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_modal(&self) -> bool {
        self.controller.is_modal()
    }

    /// Open `path` as the session's file. A missing file starts an empty
    /// buffer that will be created on first save.
    pub fn open_file<P: AsRef<Path>>(&mut self, path: P) {
        let path = path.as_ref();
        self.file_path = Some(path.to_path_buf());

        match Buffer::load_from_file(path) {
            Ok(buffer) => {
                self.buffer = buffer;
                info!("read {} lines from {}", self.buffer.line_count(), path.display());
                self.set_status_if_empty(format!(
                    "\"{}\" {}L read",
                    path.display(),
                    self.buffer.line_count()
                ));
            }
            Err(BufferError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                self.buffer = Buffer::new();
                info!("{} does not exist, starting a new file", path.display());
                self.set_status_if_empty(format!("\"{}\" [New File]", path.display()));
            }
            Err(e) => {
                self.buffer = Buffer::new();
                warn!("could not read {}: {}", path.display(), e);
                self.status_message = Some(format!("Error: Could not read file: {}", e));
            }
        }

        self.cursor = Cursor::new();
        self.viewport.offset_line = 0;
        self.viewport.offset_col = 0;
    }

    /// Write the buffer to the session's file and report the outcome in the
    /// status bar. The buffer is left untouched on failure.
    pub fn save_file(&mut self) -> Result<(), SessionError> {
        let result = match self.file_path.clone() {
            None => Err(SessionError::NoFileName),
            Some(path) => self
                .buffer
                .save_to_file(&path)
                .map(|()| path)
                .map_err(SessionError::from),
        };

        match result {
            Ok(path) => {
                info!("wrote {} lines to {}", self.buffer.line_count(), path.display());
                self.status_message = Some(format!(
                    "\"{}\" {}L written",
                    path.display(),
                    self.buffer.line_count()
                ));
                Ok(())
            }
            Err(SessionError::NoFileName) => {
                warn!("save requested without a filename");
                self.status_message = Some("Error: No filename specified.".to_string());
                Err(SessionError::NoFileName)
            }
            Err(e) => {
                warn!("save failed: {}", e);
                self.status_message = Some(format!("Error: Could not write file: {}", e));
                Err(e)
            }
        }
    }

    /// Process one key: translate it for the current mode and apply it.
    pub fn handle_input(&mut self, key: Key) {
        if !self.running {
            return;
        }
        if self.mode != Mode::Command {
            self.status_message = None;
        }
        match self.controller.translate(self.mode, key) {
            Some(cmd) => {
                debug!("{:?} in {:?} -> {:?}", key, self.mode, cmd);
                self.execute_command(cmd);
            }
            None => debug!("{:?} ignored in {:?}", key, self.mode),
        }
    }

    pub fn execute_command(&mut self, cmd: Command) {
        match cmd {
            Command::MoveLeft => self.cursor.move_left(&self.buffer),
            Command::MoveRight => self.cursor.move_right(&self.buffer),
            Command::MoveUp => self.cursor.move_up(&self.buffer),
            Command::MoveDown => self.cursor.move_down(&self.buffer),
            Command::InsertChar(c) => {
                if self
                    .buffer
                    .insert_char(c, self.cursor.line, self.cursor.col)
                    .is_ok()
                {
                    self.cursor.col += 1;
                }
            }
            Command::NewLine => {
                if self
                    .buffer
                    .split_line(self.cursor.line, self.cursor.col)
                    .is_ok()
                {
                    self.cursor = Cursor::at(self.cursor.line + 1, 0);
                }
            }
            Command::DeleteChar => self.backspace(),
            Command::InsertMode => self.set_mode(Mode::Insert),
            Command::NormalMode => {
                self.command_line.clear();
                self.set_mode(Mode::Normal);
            }
            Command::EnterCommandMode => {
                self.command_line.clear();
                self.set_mode(Mode::Command);
            }
            Command::CommandLineInput(c) => self.command_line.push(c),
            Command::CommandLineBackspace => {
                self.command_line.pop();
            }
            Command::ExecuteCommandLine => self.execute_command_line(),
            Command::SaveFile => {
                self.save_file().ok();
            }
            Command::Quit => self.running = false,
        }

        self.cursor.clamp(&self.buffer);
        self.viewport.resync(self.cursor);
    }

    /// Set the text-area size supplied by the render layer.
    pub fn resize_viewport(&mut self, rows: usize, cols: usize) {
        self.viewport.resize(rows, cols, self.cursor);
    }

    /// Get command line display text
    pub fn get_command_line_display(&self) -> String {
        if self.mode == Mode::Command {
            format!(":{}", self.command_line)
        } else {
            String::new()
        }
    }

    pub fn file_name(&self) -> String {
        match &self.file_path {
            Some(path) => path.display().to_string(),
            None => "Untitled".to_string(),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let end = (self.viewport.offset_line + self.viewport.rows).min(self.buffer.line_count());
        let lines = (self.viewport.offset_line..end)
            .map(|row| VisibleLine {
                number: row + 1,
                text: self
                    .buffer
                    .line_window(row, self.viewport.offset_col, self.viewport.cols),
            })
            .collect();

        let status = if self.is_modal() && self.mode == Mode::Command {
            StatusText::Prompt(self.get_command_line_display())
        } else if let Some(msg) = &self.status_message {
            StatusText::Message(msg.clone())
        } else {
            StatusText::Info
        };

        Snapshot {
            lines,
            cursor_screen: self.viewport.screen_position(self.cursor),
            mode_label: self.is_modal().then(|| self.mode.label()),
            file_name: self.file_name(),
            modified: self.buffer.modified,
            cursor_line: self.cursor.line + 1,
            cursor_col: self.cursor.col + 1,
            status,
        }
    }

    fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.status_message = None;
    }

    fn set_status_if_empty(&mut self, message: String) {
        if self.status_message.is_none() {
            self.status_message = Some(message);
        }
    }

    /// Backspace: delete the previous char, or join with the line above at
    /// column 0.
    fn backspace(&mut self) {
        let Cursor { line, col } = self.cursor;
        if col > 0 {
            if self.buffer.delete_char_before(line, col).is_ok() {
                self.cursor.col -= 1;
            }
        } else if line > 0 {
            let joined_at = self.buffer.line_length(line - 1);
            if self.buffer.merge_with_previous(line).is_ok() {
                self.cursor = Cursor::at(line - 1, joined_at);
            }
        }
    }

    /// Run the accumulated command line, then return to Normal mode.
    fn execute_command_line(&mut self) {
        let input = std::mem::take(&mut self.command_line);
        self.mode = Mode::Normal;
        if input.is_empty() {
            return;
        }

        match self.config.command_style.parse(&input) {
            Some(ExCommand::Quit) => self.running = false,
            Some(ExCommand::Write) => {
                self.save_file().ok();
            }
            Some(ExCommand::WriteQuit) => {
                self.save_file().ok();
                self.running = false;
            }
            None => {
                debug!("unknown command {:?}", input);
                self.status_message = Some(format!("Unknown command: {}", input));
            }
        }
    }
}
