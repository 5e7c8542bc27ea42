//! Icon-to-word mapping for skins that draw labels instead of glyphs.

use skinbar_types::error::{Result, SkinbarError};

use crate::icon::Icon;

/// Label shown for icons that have no dedicated word.
pub const GENERIC_LABEL: &str = "BUTTON";

/// Maps icon symbol names to the uppercase word drawn in their place.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelResolver;

impl LabelResolver {
    /// Word for a symbol name. Unknown symbols map to [`GENERIC_LABEL`].
    pub fn label_for(symbol: &str) -> &'static str {
        match Self::try_label_for(symbol) {
            Ok(label) => label,
            Err(e) => {
                log::debug!("{e} -- labelled {GENERIC_LABEL}");
                GENERIC_LABEL
            },
        }
    }

    /// Word for a symbol name, or `UnknownIcon` when none is defined.
    pub fn try_label_for(symbol: &str) -> Result<&'static str> {
        match symbol {
            "arrow.uturn.backward" => Ok("UNDO"),
            "arrow.uturn.forward" => Ok("REDO"),
            "figure.walk" => Ok("MOVE"),
            "underline" => Ok("UNDERLINE"),
            "italic" => Ok("ITALIC"),
            "bold" => Ok("BOLD"),
            _ => Err(SkinbarError::UnknownIcon(symbol.to_string())),
        }
    }

    pub fn label_for_icon(icon: Icon) -> &'static str {
        Self::label_for(icon.symbol())
    }
}
