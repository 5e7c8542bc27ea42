//! Toolbar configuration.
//!
//! Read once at toolbar construction. Every field has a default, so an empty
//! or partial `skinbar.toml` still yields a complete config.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SkinbarError};

/// Environment variable overriding [`ToolbarConfig::skin`].
pub const SKIN_ENV: &str = "SKINBAR_SKIN";
/// Environment variable overriding [`ToolbarConfig::editor_mode`].
pub const MODE_ENV: &str = "SKINBAR_MODE";

/// Which editing surface the toolbar is attached to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditorMode {
    /// Regular document editing.
    #[default]
    #[serde(alias = "edit")]
    Edit,
    /// The editing log surface, which prefers full-word buttons.
    #[serde(alias = "log")]
    Log,
}

impl EditorMode {
    pub fn name(self) -> &'static str {
        match self {
            Self::Edit => "Edit",
            Self::Log => "Log",
        }
    }
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EditorMode {
    type Err = SkinbarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "edit" => Ok(Self::Edit),
            "log" => Ok(Self::Log),
            _ => Err(SkinbarError::UnknownMode(s.to_string())),
        }
    }
}

/// Optional buttons of the format toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatContents {
    /// Include the strikethrough button.
    pub strike: bool,
    /// Include the subscript and superscript buttons (always together).
    pub sub_super: bool,
}

impl Default for FormatContents {
    fn default() -> Self {
        Self {
            strike: true,
            sub_super: true,
        }
    }
}

/// Top-level configuration (`skinbar.toml`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarConfig {
    /// Display name of the selected skin, e.g. "LCARS".
    pub skin: String,
    /// Editing surface the toolbar is attached to.
    pub editor_mode: EditorMode,
    /// Directory of skin override files (`*.toml`).
    pub skins_dir: Option<PathBuf>,
    /// Optional format toolbar buttons.
    pub format: FormatContents,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            skin: "Stock Science Fiction".to_string(),
            editor_mode: EditorMode::Edit,
            skins_dir: None,
            format: FormatContents::default(),
        }
    }
}

impl ToolbarConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| SkinbarError::Config(format!("skinbar.toml: {e}")))
    }

    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| SkinbarError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml(&text)
    }

    /// Apply `SKINBAR_SKIN` / `SKINBAR_MODE` from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary lookup. An unparsable mode is
    /// ignored with a warning.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(skin) = lookup(SKIN_ENV)
            && !skin.trim().is_empty()
        {
            self.skin = skin.trim().to_string();
        }
        if let Some(mode) = lookup(MODE_ENV) {
            match mode.parse() {
                Ok(m) => self.editor_mode = m,
                Err(e) => log::warn!("ignoring {MODE_ENV}: {e}"),
            }
        }
    }
}
