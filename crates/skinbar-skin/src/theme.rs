//! Skin token sets -- palette, button rules and behavior flags.
//!
//! Every field carries a default, so a partial skin file still produces a
//! complete token set. Colors inside button rules are [`ColorRef`]s that
//! point either at a palette slot or at a literal hex color; they are
//! resolved against the skin's own palette at style-resolution time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use skinbar_types::color::{Color, parse_hex_color};
use skinbar_types::error::{Result, SkinbarError};
use skinbar_types::layout::{FrameSize, Padding};

/// How a button is drawn: glyph or word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderKind {
    Icon,
    Text,
}

/// Named colors of a skin.
///
/// The built-in rules reference only `text`, `text_background`, `highlight`,
/// `icon` and `icon_background`. The remaining slots are part of every
/// skin's palette so that override files can point rules at them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SkinPalette {
    /// Text button foreground.
    pub text: Color,
    /// Text button background.
    pub text_background: Color,
    /// Text button background while selected.
    pub text_selected: Color,
    /// Disabled button foreground.
    pub text_disabled: Color,
    /// Highlight (active) background.
    pub highlight: Color,
    /// Foreground drawn over the highlight background.
    pub highlight_text: Color,
    /// Icon button foreground.
    pub icon: Color,
    /// Icon button background.
    pub icon_background: Color,
}

impl Default for SkinPalette {
    fn default() -> Self {
        Self {
            text: Color::rgb(230, 230, 240),
            text_background: Color::rgb(50, 50, 70),
            text_selected: Color::rgb(65, 65, 90),
            text_disabled: Color::rgb(100, 100, 120),
            highlight: Color::rgb(80, 160, 255),
            highlight_text: Color::WHITE,
            icon: Color::rgb(160, 160, 180),
            icon_background: Color::rgb(30, 30, 40),
        }
    }
}

/// A palette slot name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteSlot {
    Text,
    TextBackground,
    TextSelected,
    TextDisabled,
    Highlight,
    HighlightText,
    Icon,
    IconBackground,
}

impl PaletteSlot {
    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::TextBackground => "text_background",
            Self::TextSelected => "text_selected",
            Self::TextDisabled => "text_disabled",
            Self::Highlight => "highlight",
            Self::HighlightText => "highlight_text",
            Self::Icon => "icon",
            Self::IconBackground => "icon_background",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "text" => Self::Text,
            "text_background" => Self::TextBackground,
            "text_selected" => Self::TextSelected,
            "text_disabled" => Self::TextDisabled,
            "highlight" => Self::Highlight,
            "highlight_text" => Self::HighlightText,
            "icon" => Self::Icon,
            "icon_background" => Self::IconBackground,
            _ => return None,
        })
    }
}

impl SkinPalette {
    pub fn get(&self, slot: PaletteSlot) -> Color {
        match slot {
            PaletteSlot::Text => self.text,
            PaletteSlot::TextBackground => self.text_background,
            PaletteSlot::TextSelected => self.text_selected,
            PaletteSlot::TextDisabled => self.text_disabled,
            PaletteSlot::Highlight => self.highlight,
            PaletteSlot::HighlightText => self.highlight_text,
            PaletteSlot::Icon => self.icon,
            PaletteSlot::IconBackground => self.icon_background,
        }
    }
}

/// A color in a button rule: a palette slot or a literal `#RRGGBB[AA]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum ColorRef {
    Palette(PaletteSlot),
    Literal(Color),
}

impl ColorRef {
    pub fn resolve(self, palette: &SkinPalette) -> Color {
        match self {
            Self::Palette(slot) => palette.get(slot),
            Self::Literal(c) => c,
        }
    }
}

impl FromStr for ColorRef {
    type Err = SkinbarError;

    fn from_str(s: &str) -> Result<Self> {
        if s.starts_with('#') {
            return parse_hex_color(s)
                .map(Self::Literal)
                .ok_or_else(|| SkinbarError::Config(format!("invalid color: {s}")));
        }
        PaletteSlot::from_name(s)
            .map(Self::Palette)
            .ok_or_else(|| SkinbarError::Config(format!("unknown palette slot: {s}")))
    }
}

impl TryFrom<String> for ColorRef {
    type Error = SkinbarError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for ColorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Palette(slot) => f.write_str(slot.name()),
            Self::Literal(c) => write!(f, "{c}"),
        }
    }
}

/// A concrete font. `None` in a rule means the platform default font.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub size: u16,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: u16) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

/// Outline shape of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CornerStyle {
    #[default]
    Rounded,
    Capsule,
    Square,
}

/// Border stroke as written in a skin file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BorderSpec {
    pub color: ColorRef,
    pub width: u16,
}

/// Border stroke resolved against a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Border {
    pub color: Color,
    pub width: u16,
}

/// Which color channel carries a button's active indication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveChannel {
    /// Active and inactive look the same.
    None,
    /// Only the foreground changes.
    Foreground,
    /// Only the background changes.
    Background,
    /// Both channels change.
    Both,
}

/// Layout and color rules for one render kind of one skin.
///
/// Fields missing from a rules table take the plain defaults, which paint no
/// background.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ButtonRules {
    pub padding: Padding,
    /// Fixed frame regardless of content.
    pub frame: Option<FrameSize>,
    pub font: Option<FontSpec>,
    /// Upper-case the label text.
    pub uppercase: bool,
    pub border: Option<BorderSpec>,
    pub corner: CornerStyle,
    pub corner_radius: u16,
    pub foreground: ColorRef,
    pub active_foreground: ColorRef,
    /// `None` means no background is painted.
    pub background: Option<ColorRef>,
    pub active_background: Option<ColorRef>,
    /// The background stops this many points above the bottom edge.
    pub background_bottom_inset: u16,
}

impl Default for ButtonRules {
    fn default() -> Self {
        Self {
            padding: Padding::symmetric(16, 5),
            frame: None,
            font: None,
            uppercase: false,
            border: None,
            corner: CornerStyle::Rounded,
            corner_radius: 3,
            foreground: ColorRef::Palette(PaletteSlot::Text),
            active_foreground: ColorRef::Palette(PaletteSlot::Text),
            background: None,
            active_background: None,
            background_bottom_inset: 0,
        }
    }
}

impl ButtonRules {
    /// Fallback icon rules: glyph in the icon color, highlight background
    /// while active.
    pub fn icon_default() -> Self {
        Self {
            foreground: ColorRef::Palette(PaletteSlot::Icon),
            active_foreground: ColorRef::Palette(PaletteSlot::Icon),
            active_background: Some(ColorRef::Palette(PaletteSlot::Highlight)),
            ..Self::default()
        }
    }

    /// Fallback text rules: text background, highlight background while
    /// active.
    pub fn text_default() -> Self {
        Self {
            background: Some(ColorRef::Palette(PaletteSlot::TextBackground)),
            active_background: Some(ColorRef::Palette(PaletteSlot::Highlight)),
            ..Self::default()
        }
    }

    pub fn foreground_for(&self, active: bool, palette: &SkinPalette) -> Color {
        if active {
            self.active_foreground.resolve(palette)
        } else {
            self.foreground.resolve(palette)
        }
    }

    pub fn background_for(&self, active: bool, palette: &SkinPalette) -> Option<Color> {
        let r = if active {
            self.active_background
        } else {
            self.background
        };
        r.map(|c| c.resolve(palette))
    }

    pub fn border_for(&self, palette: &SkinPalette) -> Option<Border> {
        self.border.map(|b| Border {
            color: b.color.resolve(palette),
            width: b.width,
        })
    }

    /// Channel(s) that differ between the inactive and active look.
    pub fn active_channel(&self, palette: &SkinPalette) -> ActiveChannel {
        let fg = self.foreground_for(false, palette) != self.foreground_for(true, palette);
        let bg = self.background_for(false, palette) != self.background_for(true, palette);
        match (fg, bg) {
            (false, false) => ActiveChannel::None,
            (true, false) => ActiveChannel::Foreground,
            (false, true) => ActiveChannel::Background,
            (true, true) => ActiveChannel::Both,
        }
    }
}

/// Capsule drawn behind every button label (LCARS).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CapsuleOverlay {
    pub fill: ColorRef,
    pub font: FontSpec,
    /// Label inset inside the capsule; the label is trailing-aligned.
    #[serde(default)]
    pub label_padding: Padding,
}

/// The complete token set of one skin.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SkinTokens {
    pub palette: SkinPalette,
    /// Keep icons even on the Log surface.
    pub icon_only: bool,
    /// Render labels inside a capsule and ignore icon glyphs.
    pub capsule: Option<CapsuleOverlay>,
    pub icon_button: ButtonRules,
    pub text_button: ButtonRules,
}

impl Default for SkinTokens {
    fn default() -> Self {
        Self {
            palette: SkinPalette::default(),
            icon_only: false,
            capsule: None,
            icon_button: ButtonRules::icon_default(),
            text_button: ButtonRules::text_default(),
        }
    }
}

impl SkinTokens {
    /// Parse a token set from TOML. A `skin = "..."` header, if present, is
    /// ignored here; see [`crate::parse_skin_file`].
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn rules(&self, kind: RenderKind) -> &ButtonRules {
        match kind {
            RenderKind::Icon => &self.icon_button,
            RenderKind::Text => &self.text_button,
        }
    }

    pub fn active_channel(&self, kind: RenderKind) -> ActiveChannel {
        self.rules(kind).active_channel(&self.palette)
    }
}
