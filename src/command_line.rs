// command_line.rs - The `:` command language typed in Command mode

use std::str::FromStr;

/// Keyword set used to recognise command-line input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandStyle {
    /// `q`/`quit`, `w`, `wq`
    #[default]
    Vim,
    /// `quit`, `write`, `write-quit`
    Kakoune,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown command style: {0}")]
pub struct UnknownStyle(pub String);

impl FromStr for CommandStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vim" => Ok(CommandStyle::Vim),
            "kakoune" => Ok(CommandStyle::Kakoune),
            other => Err(UnknownStyle(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExCommand {
    Quit,
    Write,
    WriteQuit,
}

impl CommandStyle {
    /// Recognise `input` as one of this style's literal keywords.
    pub fn parse(self, input: &str) -> Option<ExCommand> {
        match (self, input) {
            (CommandStyle::Vim, "q" | "quit") => Some(ExCommand::Quit),
            (CommandStyle::Vim, "w") => Some(ExCommand::Write),
            (CommandStyle::Vim, "wq") => Some(ExCommand::WriteQuit),
            (CommandStyle::Kakoune, "quit") => Some(ExCommand::Quit),
            (CommandStyle::Kakoune, "write") => Some(ExCommand::Write),
            (CommandStyle::Kakoune, "write-quit") => Some(ExCommand::WriteQuit),
            _ => None,
        }
    }
}
