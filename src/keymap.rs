// keymap.rs - Key translation per mode and non-modal key binding presets

use std::collections::HashMap;
use std::str::FromStr;

use crate::command::Command;
use crate::input::Key;
use crate::mode::Mode;

/// Actions a non-modal preset can bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Save,
    Quit,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
}

impl KeyAction {
    fn command(self) -> Command {
        match self {
            KeyAction::Save => Command::SaveFile,
            KeyAction::Quit => Command::Quit,
            KeyAction::MoveUp => Command::MoveUp,
            KeyAction::MoveDown => Command::MoveDown,
            KeyAction::MoveLeft => Command::MoveLeft,
            KeyAction::MoveRight => Command::MoveRight,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyBindingPreset {
    #[default]
    Atto,
    Nano,
    Micro,
    Emacs,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown key binding preset: {0}")]
pub struct UnknownPreset(pub String);

impl FromStr for KeyBindingPreset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "atto" => Ok(KeyBindingPreset::Atto),
            "nano" => Ok(KeyBindingPreset::Nano),
            "micro" => Ok(KeyBindingPreset::Micro),
            "emacs" => Ok(KeyBindingPreset::Emacs),
            other => Err(UnknownPreset(other.to_string())),
        }
    }
}

/// Lookup table from key to bound action, built once from a preset.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyBindingSet {
    bindings: HashMap<Key, KeyAction>,
}

impl KeyBindingSet {
    pub fn from_preset(preset: KeyBindingPreset) -> Self {
        let (save, quit) = match preset {
            KeyBindingPreset::Atto | KeyBindingPreset::Micro => (Key::Ctrl('s'), Key::Ctrl('q')),
            KeyBindingPreset::Nano => (Key::Ctrl('o'), Key::Ctrl('x')),
            KeyBindingPreset::Emacs => (Key::Ctrl('x'), Key::Ctrl('c')),
        };
        let [up, down, left, right] = match preset {
            KeyBindingPreset::Emacs => [
                Key::Ctrl('p'),
                Key::Ctrl('n'),
                Key::Ctrl('b'),
                Key::Ctrl('f'),
            ],
            _ => [Key::Up, Key::Down, Key::Left, Key::Right],
        };

        let bindings = HashMap::from([
            (save, KeyAction::Save),
            (quit, KeyAction::Quit),
            (up, KeyAction::MoveUp),
            (down, KeyAction::MoveDown),
            (left, KeyAction::MoveLeft),
            (right, KeyAction::MoveRight),
        ]);
        Self { bindings }
    }

    pub fn action_for(&self, key: Key) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    /// The key bound to `action`.
    pub fn key_for(&self, action: KeyAction) -> Option<Key> {
        self.bindings
            .iter()
            .find(|(_, bound)| **bound == action)
            .map(|(key, _)| *key)
    }
}

impl Default for KeyBindingSet {
    fn default() -> Self {
        Self::from_preset(KeyBindingPreset::default())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputScheme {
    /// Normal/Insert/Command, vim-like.
    Modal,
    /// A single editing state driven by a preset's bindings.
    Direct(KeyBindingSet),
}

/// Maps a key plus the current mode to an editor command.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeController {
    scheme: InputScheme,
}

impl ModeController {
    pub fn new(scheme: InputScheme) -> Self {
        Self { scheme }
    }

    pub fn modal() -> Self {
        Self::new(InputScheme::Modal)
    }

    pub fn direct(bindings: KeyBindingSet) -> Self {
        Self::new(InputScheme::Direct(bindings))
    }

    pub fn is_modal(&self) -> bool {
        matches!(self.scheme, InputScheme::Modal)
    }

    pub fn initial_mode(&self) -> Mode {
        match self.scheme {
            InputScheme::Modal => Mode::Normal,
            InputScheme::Direct(_) => Mode::Insert,
        }
    }

    pub fn translate(&self, mode: Mode, key: Key) -> Option<Command> {
        match &self.scheme {
            InputScheme::Modal => match mode {
                Mode::Normal => normal_command(key),
                Mode::Insert => match key {
                    Key::Esc => Some(Command::NormalMode),
                    _ => editing_command(key),
                },
                Mode::Command => command_line_command(key),
            },
            InputScheme::Direct(bindings) => bindings
                .action_for(key)
                .map(KeyAction::command)
                .or_else(|| editing_command(key)),
        }
    }
}

fn normal_command(key: Key) -> Option<Command> {
    match key {
        Key::Char(':') => Some(Command::EnterCommandMode),
        Key::Char('i') => Some(Command::InsertMode),
        Key::Char('h') | Key::Left => Some(Command::MoveLeft),
        Key::Char('j') | Key::Down => Some(Command::MoveDown),
        Key::Char('k') | Key::Up => Some(Command::MoveUp),
        Key::Char('l') | Key::Right => Some(Command::MoveRight),
        _ => None,
    }
}

/// Keys shared by Insert mode and non-modal sessions.
fn editing_command(key: Key) -> Option<Command> {
    match key {
        Key::Up => Some(Command::MoveUp),
        Key::Down => Some(Command::MoveDown),
        Key::Left => Some(Command::MoveLeft),
        Key::Right => Some(Command::MoveRight),
        Key::Enter => Some(Command::NewLine),
        Key::Backspace => Some(Command::DeleteChar),
        _ => key.printable().map(Command::InsertChar),
    }
}

fn command_line_command(key: Key) -> Option<Command> {
    match key {
        Key::Esc => Some(Command::NormalMode),
        Key::Enter => Some(Command::ExecuteCommandLine),
        Key::Backspace => Some(Command::CommandLineBackspace),
        _ => key.printable().map(Command::CommandLineInput),
    }
}
