//! Error types for skinbar.

use std::io;

/// Errors produced by skinbar.
///
/// `UnknownSkin` and `UnknownIcon` never reach the rendering layer: the style
/// and label resolvers absorb them with a fallback. They surface only from
/// the lower-level lookups (`SkinRegistry::tokens`, `try_label_for`, name
/// parsing) for callers that want to report them.
#[derive(Debug, thiserror::Error)]
pub enum SkinbarError {
    #[error("unknown skin: {0}")]
    UnknownSkin(String),

    #[error("unknown icon: {0}")]
    UnknownIcon(String),

    #[error("unknown editor mode: {0}")]
    UnknownMode(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, SkinbarError>;
