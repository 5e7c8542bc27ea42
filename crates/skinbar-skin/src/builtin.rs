//! Built-in skin definitions.
//!
//! Each skin is an embedded TOML constant in the same format as an override
//! file in the skins directory, so every built-in can be replaced at runtime
//! without a rebuild.

use skinbar_types::error::Result;

use crate::id::SkinId;
use crate::loader::parse_skin_file;
use crate::theme::SkinTokens;

// ---------------------------------------------------------------------------
// Science fiction family: monospaced text buttons, red active glyphs.
// ---------------------------------------------------------------------------

const STOCK_SCIENCE_FICTION: &str = r##"
skin = "Stock Science Fiction"

[palette]
text = "#E0E6F0"
text_background = "#1C2A3A"
text_selected = "#2E4A66"
text_disabled = "#5A6470"
highlight = "#3A7BD5"
highlight_text = "#FFFFFF"
icon = "#8FB8E8"
icon_background = "#0E1620"

[icon_button]
padding = { top = 5, right = 16, bottom = 5, left = 16 }
frame = { width = 36, height = 30 }
foreground = "icon"
active_foreground = "#FF3B30"

[text_button]
padding = { top = 5, right = 16, bottom = 5, left = 16 }
font = { family = "Inconsolata-Regular", size = 18 }
foreground = "text"
active_foreground = "text"
background = "text_background"
active_background = "highlight"
"##;

const LEAN_SCIENCE_FICTION: &str = r##"
skin = "Lean Science Fiction"

[palette]
text = "#1B2330"
text_background = "#DCE4EE"
text_selected = "#C2D0E0"
text_disabled = "#9AA4B0"
highlight = "#7FA7D9"
highlight_text = "#0A0F16"
icon = "#2F5B8C"
icon_background = "#C9D6E6"

[icon_button]
padding = { top = 5, right = 16, bottom = 5, left = 16 }
font = { family = "Inconsolata-Regular", size = 18 }
foreground = "icon"
active_foreground = "#FF3B30"
active_background = "icon_background"

[text_button]
padding = { top = 5, right = 16, bottom = 5, left = 16 }
font = { family = "Inconsolata-Regular", size = 18 }
foreground = "text"
active_foreground = "text"
background = "text_background"
active_background = "highlight"
"##;

const LEAN_DARK_SCIENCE_FICTION: &str = r##"
skin = "Lean Dark Science Fiction"

[palette]
text = "#C8D2DE"
text_background = "#12161C"
text_selected = "#222A34"
text_disabled = "#4A525C"
highlight = "#2C5A8C"
highlight_text = "#FFFFFF"
icon = "#6F9CCF"
icon_background = "#0A0D11"

[icon_button]
padding = { top = 5, right = 16, bottom = 5, left = 16 }
font = { family = "Inconsolata-Regular", size = 18 }
foreground = "icon"
active_foreground = "#FF3B30"

[text_button]
padding = { top = 5, right = 16, bottom = 5, left = 16 }
font = { family = "Inconsolata-Regular", size = 18 }
foreground = "text"
active_foreground = "text"
background = "text_background"
active_background = "highlight"
"##;

// ---------------------------------------------------------------------------
// Fantasy family: calligraphic text buttons with no vertical padding.
// ---------------------------------------------------------------------------

const STOCK_FANTASY: &str = r##"
skin = "Stock Fantasy"

[palette]
text = "#3B2412"
text_background = "#E8D8B0"
text_selected = "#D8C090"
text_disabled = "#A89878"
highlight = "#C89B4A"
highlight_text = "#1E1208"
icon = "#6B3E1A"
icon_background = "#D9C29A"

[icon_button]
padding = { top = 5, right = 16, bottom = 5, left = 16 }
font = { family = "Inconsolata-Regular", size = 18 }
foreground = "text"
active_foreground = "icon"
active_background = "icon_background"

[text_button]
padding = { top = 0, right = 16, bottom = 0, left = 16 }
font = { family = "Trattatello", size = 18 }
uppercase = true
border = { color = "#8B5A2B", width = 3 }
foreground = "text"
active_foreground = "text"
background = "text_background"
active_background = "highlight"
"##;

const LEAN_FANTASY: &str = r##"
skin = "Lean Fantasy"

[palette]
text = "#2E2418"
text_background = "#F2E8D2"
text_selected = "#E4D4B2"
text_disabled = "#B0A488"
highlight = "#D9B977"
highlight_text = "#1A140C"
icon = "#7A5230"
icon_background = "#E6D6B4"

[icon_button]
padding = { top = 5, right = 16, bottom = 5, left = 16 }
font = { family = "Inconsolata-Regular", size = 18 }
foreground = "icon"
active_foreground = "#FF3B30"
active_background = "icon_background"

[text_button]
padding = { top = 0, right = 16, bottom = 0, left = 16 }
font = { family = "Trattatello", size = 18 }
foreground = "text"
active_foreground = "text"
background = "text_background"
active_background = "highlight"
"##;

const LEAN_DARK_FANTASY: &str = r##"
skin = "Lean Dark Fantasy"

[palette]
text = "#E6D6B4"
text_background = "#231A12"
text_selected = "#3A2C1E"
text_disabled = "#6A5A44"
highlight = "#7A5A2E"
highlight_text = "#FFF4DC"
icon = "#C9A46A"
icon_background = "#16100A"

[icon_button]
padding = { top = 5, right = 16, bottom = 5, left = 16 }
font = { family = "Inconsolata-Regular", size = 18 }
foreground = "icon"
active_foreground = "#FF3B30"
active_background = "icon_background"

[text_button]
padding = { top = 0, right = 16, bottom = 0, left = 16 }
font = { family = "Trattatello", size = 18 }
foreground = "text"
active_foreground = "text"
background = "text_background"
active_background = "highlight"
"##;

// ---------------------------------------------------------------------------
// Corporate and terminal skins.
// ---------------------------------------------------------------------------

const THE_ESTABLISHMENT: &str = r##"
skin = "The Establishment"
icon_only = true

[palette]
text = "#1F2A44"
text_background = "#F4F5F7"
text_selected = "#E1E4EA"
text_disabled = "#A0A6B2"
highlight = "#C5CFE0"
highlight_text = "#0F1626"
icon = "#34496E"
icon_background = "#DDE3EC"

[icon_button]
padding = { top = 5, right = 16, bottom = 5, left = 16 }
font = { family = "Inconsolata-Regular", size = 18 }
foreground = "text"
active_foreground = "icon"
active_background = "icon_background"

[text_button]
padding = { top = 5, right = 16, bottom = 5, left = 16 }
font = { family = "Inconsolata-Regular", size = 18 }
foreground = "text"
active_foreground = "text"
background = "text_background"
active_background = "highlight"
"##;

const TERMINAL_LOG: &str = r##"
skin = "TerminalLog"

[palette]
text = "#33FF66"
text_background = "#001A08"
text_selected = "#003311"
text_disabled = "#116622"
highlight = "#0A5A22"
highlight_text = "#CCFFDD"
icon = "#22CC55"
icon_background = "#002A0E"

[icon_button]
padding = { top = 5, right = 16, bottom = 5, left = 16 }
font = { family = "Inconsolata-Regular", size = 18 }
foreground = "text"
active_foreground = "icon"
active_background = "icon_background"

[text_button]
padding = { top = 5, right = 16, bottom = 35, left = 16 }
font = { family = "Inconsolata-Regular", size = 18 }
foreground = "text"
active_foreground = "text"
background = "text_background"
active_background = "highlight"
background_bottom_inset = 35
"##;

// ---------------------------------------------------------------------------
// LCARS: fixed 90x36 capsules with trailing labels, no glyphs.
// ---------------------------------------------------------------------------

const LCARS: &str = r##"
skin = "LCARS"

[palette]
text = "#000000"
text_background = "#000000"
text_selected = "#CC6666"
text_disabled = "#664444"
highlight = "#FF9900"
highlight_text = "#000000"
icon = "#000000"
icon_background = "#000000"

[capsule]
fill = "#FF3B30"
font = { family = "Futura-CondensedMedium", size = 18 }
label_padding = { top = 9, right = 13 }

[icon_button]
padding = { top = 0, right = 0, bottom = 0, left = 0 }
frame = { width = 90, height = 36 }
corner = "capsule"
foreground = "text"
active_foreground = "text"

[text_button]
padding = { top = 0, right = 0, bottom = 0, left = 0 }
frame = { width = 90, height = 36 }
corner = "capsule"
foreground = "text"
active_foreground = "#FFCC00"
"##;

fn source(id: SkinId) -> &'static str {
    match id {
        SkinId::StockScienceFiction => STOCK_SCIENCE_FICTION,
        SkinId::LeanScienceFiction => LEAN_SCIENCE_FICTION,
        SkinId::LeanDarkScienceFiction => LEAN_DARK_SCIENCE_FICTION,
        SkinId::StockFantasy => STOCK_FANTASY,
        SkinId::LeanFantasy => LEAN_FANTASY,
        SkinId::LeanDarkFantasy => LEAN_DARK_FANTASY,
        SkinId::TheEstablishment => THE_ESTABLISHMENT,
        SkinId::TerminalLog => TERMINAL_LOG,
        SkinId::Lcars => LCARS,
    }
}

/// Load a built-in skin's token set.
pub fn load_builtin(id: SkinId) -> Result<SkinTokens> {
    let (_, tokens) = parse_skin_file(source(id))?;
    Ok(tokens)
}

/// List available built-in skins.
pub fn builtin_ids() -> &'static [SkinId] {
    &SkinId::ALL
}
