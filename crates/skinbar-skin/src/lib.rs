//! Skin system -- data-driven visual themes for the editor toolbar.
//!
//! A skin is a TOML token set: a color palette, per-render-kind button rules
//! (padding, frame, font, corner, active colors) and a few behavior flags.
//! The nine built-in skins are embedded; a skins directory can override
//! them at startup. Skins can be switched at runtime through the
//! [`SkinRegistry`].

pub mod builtin;
pub mod id;
mod loader;
pub mod registry;
pub mod theme;

pub use id::SkinId;
pub use loader::{discover_skin_files, parse_skin_file};
pub use registry::{SharedSkinRegistry, SkinRegistry, StyleContext};
pub use theme::{
    ActiveChannel, Border, BorderSpec, ButtonRules, CapsuleOverlay, ColorRef, CornerStyle,
    FontSpec, PaletteSlot, RenderKind, SkinPalette, SkinTokens,
};

/// Skin selected when a configured name is not recognized.
pub const DEFAULT_SKIN: SkinId = SkinId::StockScienceFiction;

/// Resolve a configured skin name.
///
/// Unknown names fall back to [`DEFAULT_SKIN`] with a warning: a toolbar
/// must always render something.
pub fn resolve_skin_name(name: &str) -> SkinId {
    match name.parse() {
        Ok(id) => id,
        Err(e) => {
            log::warn!("{e} -- falling back to {DEFAULT_SKIN}");
            DEFAULT_SKIN
        },
    }
}
