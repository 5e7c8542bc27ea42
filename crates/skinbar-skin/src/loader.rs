//! Skin loading from TOML files.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use skinbar_types::error::{Result, SkinbarError};

use crate::id::SkinId;
use crate::registry::SkinRegistry;
use crate::theme::SkinTokens;

/// The `skin = "..."` header every skin file starts with.
#[derive(Deserialize)]
struct SkinHeader {
    skin: SkinId,
}

/// Parse a skin file: the `skin` header naming which skin it defines plus
/// the token set.
pub fn parse_skin_file(text: &str) -> Result<(SkinId, SkinTokens)> {
    let header: SkinHeader = toml::from_str(text)?;
    let tokens = SkinTokens::from_toml(text)?;
    Ok((header.skin, tokens))
}

/// List `*.toml` files in a directory, sorted by path.
pub fn discover_skin_files(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    files.sort();
    files
}

impl SkinRegistry {
    /// Register every skin file found in `dir`, overriding any skin already
    /// registered under the same name.
    ///
    /// Unreadable or malformed files are skipped with a warning. Returns the
    /// skins that were loaded, in file order.
    pub fn load_directory(&mut self, dir: &Path) -> Result<Vec<SkinId>> {
        if !dir.is_dir() {
            return Err(SkinbarError::Config(format!(
                "{}: not a skins directory",
                dir.display()
            )));
        }
        let mut loaded = Vec::new();
        for path in discover_skin_files(dir) {
            let parsed = std::fs::read_to_string(&path)
                .map_err(SkinbarError::from)
                .and_then(|text| parse_skin_file(&text));
            match parsed {
                Ok((id, tokens)) => {
                    log::info!("Loaded skin override {id} from {}", path.display());
                    self.register(id, tokens);
                    loaded.push(id);
                },
                Err(e) => log::warn!("Skipping skin file {}: {e}", path.display()),
            }
        }
        Ok(loaded)
    }
}
