//! Closed set of skin identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use skinbar_types::error::{Result, SkinbarError};

/// A built-in skin. Skins are addressed by their display name in config and
/// skin files ("LCARS", "The Establishment", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum SkinId {
    StockScienceFiction,
    LeanScienceFiction,
    LeanDarkScienceFiction,
    StockFantasy,
    LeanFantasy,
    LeanDarkFantasy,
    TheEstablishment,
    TerminalLog,
    Lcars,
}

impl SkinId {
    /// Every skin, in menu order.
    pub const ALL: [SkinId; 9] = [
        SkinId::StockScienceFiction,
        SkinId::LeanScienceFiction,
        SkinId::LeanDarkScienceFiction,
        SkinId::StockFantasy,
        SkinId::LeanFantasy,
        SkinId::LeanDarkFantasy,
        SkinId::TheEstablishment,
        SkinId::TerminalLog,
        SkinId::Lcars,
    ];

    /// Display name, as used in configuration.
    pub fn name(self) -> &'static str {
        match self {
            Self::StockScienceFiction => "Stock Science Fiction",
            Self::LeanScienceFiction => "Lean Science Fiction",
            Self::LeanDarkScienceFiction => "Lean Dark Science Fiction",
            Self::StockFantasy => "Stock Fantasy",
            Self::LeanFantasy => "Lean Fantasy",
            Self::LeanDarkFantasy => "Lean Dark Fantasy",
            Self::TheEstablishment => "The Establishment",
            Self::TerminalLog => "TerminalLog",
            Self::Lcars => "LCARS",
        }
    }
}

impl fmt::Display for SkinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SkinId {
    type Err = SkinbarError;

    /// Case-insensitive match on the display name.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SkinbarError::UnknownSkin(s.to_string()))
    }
}

impl TryFrom<String> for SkinId {
    type Error = SkinbarError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl Serialize for SkinId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
