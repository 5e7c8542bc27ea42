//! Toolbar glyphs.
//!
//! Icons are addressed by their platform symbol name ("bold",
//! "arrow.uturn.backward", ...). The rendering layer maps the symbol name to
//! an actual glyph; this crate only carries the identity.

use std::fmt;

use serde::Serialize;

/// Well-known toolbar glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    // Formatting
    Bold,
    Italic,
    Underline,
    CharacterMagnify,
    FigureWalk,
    Strikethrough,
    Subscript,
    Superscript,
    // Correction
    UndoArrow,
    RedoArrow,
}

impl Icon {
    pub const ALL: [Icon; 10] = [
        Icon::Bold,
        Icon::Italic,
        Icon::Underline,
        Icon::CharacterMagnify,
        Icon::FigureWalk,
        Icon::Strikethrough,
        Icon::Subscript,
        Icon::Superscript,
        Icon::UndoArrow,
        Icon::RedoArrow,
    ];

    /// Platform symbol name.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::CharacterMagnify => "character.magnify",
            Self::FigureWalk => "figure.walk",
            Self::Strikethrough => "strikethrough",
            Self::Subscript => "textformat.subscript",
            Self::Superscript => "textformat.superscript",
            Self::UndoArrow => "arrow.uturn.backward",
            Self::RedoArrow => "arrow.uturn.forward",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.symbol() == symbol)
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Serialize for Icon {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}
