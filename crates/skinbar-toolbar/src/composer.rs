//! Toolbar composition: which buttons a toolbar shows, in which order.

use skinbar_types::config::FormatContents;

use crate::descriptor::{ButtonDescriptor, ButtonRole};

/// Caption of the format toolbar while no button is hovered.
pub const FORMAT_CAPTION: &str = "Text Format";
/// Caption of the correction toolbar while no button is hovered.
pub const CORRECTION_CAPTION: &str = "Correction";

/// An ordered button list plus the caption shown while idle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarLayout {
    pub idle_caption: &'static str,
    pub buttons: Vec<ButtonDescriptor>,
}

impl ToolbarLayout {
    pub fn roles(&self) -> Vec<ButtonRole> {
        self.buttons.iter().map(|b| b.role).collect()
    }
}

/// Bold, Italic, Subhead and Move, then Strikethrough and the
/// Subscript/Superscript pair when enabled.
pub fn build_format_toolbar(contents: &FormatContents) -> ToolbarLayout {
    let mut roles = vec![
        ButtonRole::Bold,
        ButtonRole::Italic,
        ButtonRole::Subhead,
        ButtonRole::Move,
    ];
    if contents.strike {
        roles.push(ButtonRole::Strikethrough);
    }
    if contents.sub_super {
        roles.extend([ButtonRole::Subscript, ButtonRole::Superscript]);
    }
    ToolbarLayout {
        idle_caption: FORMAT_CAPTION,
        buttons: roles.into_iter().map(ButtonDescriptor::for_role).collect(),
    }
}

/// Undo then Redo.
pub fn build_correction_toolbar() -> ToolbarLayout {
    ToolbarLayout {
        idle_caption: CORRECTION_CAPTION,
        buttons: vec![
            ButtonDescriptor::for_role(ButtonRole::Undo),
            ButtonDescriptor::for_role(ButtonRole::Redo),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(strike: bool, sub_super: bool) -> FormatContents {
        FormatContents { strike, sub_super }
    }

    #[test]
    fn strike_without_sub_super() {
        let t = build_format_toolbar(&contents(true, false));
        assert_eq!(
            t.roles(),
            vec![
                ButtonRole::Bold,
                ButtonRole::Italic,
                ButtonRole::Subhead,
                ButtonRole::Move,
                ButtonRole::Strikethrough,
            ]
        );
    }

    #[test]
    fn full_format_toolbar() {
        let t = build_format_toolbar(&FormatContents::default());
        assert_eq!(t.buttons.len(), 7);
        assert_eq!(
            &t.roles()[4..],
            &[
                ButtonRole::Strikethrough,
                ButtonRole::Subscript,
                ButtonRole::Superscript
            ]
        );
        assert_eq!(t.idle_caption, FORMAT_CAPTION);
    }

    #[test]
    fn minimal_format_toolbar() {
        let t = build_format_toolbar(&contents(false, false));
        assert_eq!(t.buttons.len(), 4);
    }

    #[test]
    fn sub_super_without_strike() {
        let t = build_format_toolbar(&contents(false, true));
        assert_eq!(
            &t.roles()[4..],
            &[ButtonRole::Subscript, ButtonRole::Superscript]
        );
    }

    #[test]
    fn correction_toolbar() {
        let t = build_correction_toolbar();
        assert_eq!(t.roles(), vec![ButtonRole::Undo, ButtonRole::Redo]);
        assert_eq!(t.idle_caption, CORRECTION_CAPTION);
    }
}
