// config.rs - Configuration discovery, defaults and fallback

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::command_line::CommandStyle;
use crate::keymap::{KeyBindingPreset, KeyBindingSet, ModeController};

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Invalid config format: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// The on-disk document. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub vim_mode: bool,
    pub command_style: String,
    pub key_binding_preset: String,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            vim_mode: true,
            command_style: "vim".to_string(),
            key_binding_preset: "atto".to_string(),
        }
    }
}

impl ConfigFile {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Write this document to `path`, creating parent directories.
    pub fn write_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Resolved settings handed to the editor at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorConfig {
    pub vim_mode: bool,
    pub command_style: CommandStyle,
    pub key_binding_preset: KeyBindingPreset,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            vim_mode: true,
            command_style: CommandStyle::default(),
            key_binding_preset: KeyBindingPreset::default(),
        }
    }
}

impl EditorConfig {
    pub fn modal() -> Self {
        Self::default()
    }

    pub fn direct(preset: KeyBindingPreset) -> Self {
        Self {
            vim_mode: false,
            key_binding_preset: preset,
            ..Self::default()
        }
    }

    /// Resolve names from the document. Unknown names fall back to the
    /// defaults; the returned message describes the first fallback taken.
    pub fn resolve(file: &ConfigFile) -> (Self, Option<String>) {
        let mut warning = None;

        let command_style = file.command_style.parse().unwrap_or_else(|e| {
            warn!("{}, falling back to vim", e);
            warning.get_or_insert_with(|| format!("Config: {}", e));
            CommandStyle::default()
        });
        let key_binding_preset = file.key_binding_preset.parse().unwrap_or_else(|e| {
            warn!("{}, falling back to atto", e);
            warning.get_or_insert_with(|| format!("Config: {}", e));
            KeyBindingPreset::default()
        });

        let config = Self {
            vim_mode: file.vim_mode,
            command_style,
            key_binding_preset,
        };
        (config, warning)
    }

    pub fn controller(&self) -> ModeController {
        if self.vim_mode {
            ModeController::modal()
        } else {
            ModeController::direct(KeyBindingSet::from_preset(self.key_binding_preset))
        }
    }
}

/// Outcome of startup config handling: always a usable config, plus an
/// optional message for the status bar.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: EditorConfig,
    pub status: Option<String>,
}

/// `./config.toml` if present, else the per-user config directory.
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    match dirs::config_dir() {
        Some(dir) => dir.join("atto").join(CONFIG_FILE_NAME),
        None => local,
    }
}

/// Load the config at `path`, writing a default document first when it
/// does not exist. Never fails: problems become a status message.
pub fn load_or_create(path: &Path) -> LoadedConfig {
    match ConfigFile::from_file(path) {
        Ok(file) => {
            info!("loaded config from {}", path.display());
            let (config, status) = EditorConfig::resolve(&file);
            LoadedConfig { config, status }
        }
        Err(ConfigError::Read(e)) if e.kind() == ErrorKind::NotFound => create_default(path),
        Err(ConfigError::Parse(e)) => {
            warn!("malformed config {}: {}", path.display(), e);
            fallback(format!("Error parsing config: {}", e.message()))
        }
        Err(e) => {
            warn!("could not load config {}: {}", path.display(), e);
            fallback(format!("Error loading config: {}", e))
        }
    }
}

fn create_default(path: &Path) -> LoadedConfig {
    let file = ConfigFile::default();
    let status = match file.write_to(path) {
        Ok(()) => {
            info!("created default config at {}", path.display());
            format!("Created default config at: {}", path.display())
        }
        Err(e) => {
            warn!("could not create config at {}: {}", path.display(), e);
            format!("Using default config: {}", e)
        }
    };
    let (config, _) = EditorConfig::resolve(&file);
    LoadedConfig {
        config,
        status: Some(status),
    }
}

fn fallback(status: String) -> LoadedConfig {
    LoadedConfig {
        config: EditorConfig::modal(),
        status: Some(status),
    }
}
