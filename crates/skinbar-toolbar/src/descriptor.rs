//! Button descriptors, selection state and editor commands.
//!
//! A descriptor is the semantic identity of one toolbar button: which
//! command it sends, which selection flag lights it up, and how it is named.
//! It says nothing about looks; that is the resolver's job.

use std::fmt;

use serde::Serialize;

use skinbar_skin::RenderKind;

use crate::icon::Icon;

/// Command a toolbar button represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ButtonRole {
    Undo,
    Redo,
    Bold,
    Italic,
    Underline,
    Subhead,
    Move,
    Strikethrough,
    Subscript,
    Superscript,
}

impl ButtonRole {
    pub const ALL: [ButtonRole; 10] = [
        ButtonRole::Undo,
        ButtonRole::Redo,
        ButtonRole::Bold,
        ButtonRole::Italic,
        ButtonRole::Underline,
        ButtonRole::Subhead,
        ButtonRole::Move,
        ButtonRole::Strikethrough,
        ButtonRole::Subscript,
        ButtonRole::Superscript,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Undo => "Undo",
            Self::Redo => "Redo",
            Self::Bold => "Bold",
            Self::Italic => "Italic",
            Self::Underline => "Underline",
            Self::Subhead => "Subhead",
            Self::Move => "Move",
            Self::Strikethrough => "Strikethrough",
            Self::Subscript => "Subscript",
            Self::Superscript => "Superscript",
        }
    }
}

impl fmt::Display for ButtonRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Paragraph style of the current selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum ParagraphStyle {
    #[default]
    P,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

/// A boolean attribute of the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SelectionFlag {
    Bold,
    Italic,
    Underline,
    Code,
    Strike,
    Subscript,
    Superscript,
}

/// Snapshot of the editing engine's selection, pushed on every change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub code: bool,
    pub strike: bool,
    pub subscript: bool,
    pub superscript: bool,
    pub style: ParagraphStyle,
}

impl SelectionState {
    pub fn flag(&self, flag: SelectionFlag) -> bool {
        match flag {
            SelectionFlag::Bold => self.bold,
            SelectionFlag::Italic => self.italic,
            SelectionFlag::Underline => self.underline,
            SelectionFlag::Code => self.code,
            SelectionFlag::Strike => self.strike,
            SelectionFlag::Subscript => self.subscript,
            SelectionFlag::Superscript => self.superscript,
        }
    }
}

/// Opaque command sent to the editing engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EditorCommand {
    Bold,
    Italic,
    Underline,
    ReplaceStyle {
        from: ParagraphStyle,
        to: ParagraphStyle,
    },
    Code,
    Strike,
    Subscript,
    Superscript,
    Undo,
    Redo,
}

/// Immutable semantic identity of one toolbar button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonDescriptor {
    pub role: ButtonRole,
    /// `None` forces text rendering.
    pub icon: Option<Icon>,
    /// Literal uppercase word used when the button renders as text.
    pub label: &'static str,
    /// Shown in the toolbar caption while the pointer is over the button.
    pub caption: &'static str,
    /// Selection flag that lights the button up; `None` never shows active.
    pub active_source: Option<SelectionFlag>,
    /// Whether the button still lights up when rendered as text.
    pub text_shows_active: bool,
    pub command: EditorCommand,
    /// Render as text on the Log surface even on icon-only skins.
    pub log_text_always: bool,
}

impl ButtonDescriptor {
    /// The standard descriptor for a role.
    pub fn for_role(role: ButtonRole) -> Self {
        let (icon, label, caption, active_source, command) = match role {
            ButtonRole::Undo => (Icon::UndoArrow, "UNDO", "Undo", None, EditorCommand::Undo),
            ButtonRole::Redo => (Icon::RedoArrow, "REDO", "Redo", None, EditorCommand::Redo),
            ButtonRole::Bold => (
                Icon::Bold,
                "BOLD",
                "Bold",
                Some(SelectionFlag::Bold),
                EditorCommand::Bold,
            ),
            ButtonRole::Italic => (
                Icon::Italic,
                "ITALIC",
                "Italic",
                Some(SelectionFlag::Italic),
                EditorCommand::Italic,
            ),
            ButtonRole::Underline => (
                Icon::Underline,
                "UNDERLINE",
                "Underline",
                Some(SelectionFlag::Underline),
                EditorCommand::Underline,
            ),
            // Lit by the underline flag; the editing engine reports no
            // heading flag.
            ButtonRole::Subhead => (
                Icon::CharacterMagnify,
                "SUBHEAD",
                "Subhead",
                Some(SelectionFlag::Underline),
                EditorCommand::ReplaceStyle {
                    from: ParagraphStyle::P,
                    to: ParagraphStyle::H1,
                },
            ),
            ButtonRole::Move => (
                Icon::FigureWalk,
                "MOVE",
                "Code",
                Some(SelectionFlag::Code),
                EditorCommand::Code,
            ),
            ButtonRole::Strikethrough => (
                Icon::Strikethrough,
                "STRIKE",
                "Strikethrough",
                Some(SelectionFlag::Strike),
                EditorCommand::Strike,
            ),
            ButtonRole::Subscript => (
                Icon::Subscript,
                "SUB",
                "Subscript",
                Some(SelectionFlag::Subscript),
                EditorCommand::Subscript,
            ),
            ButtonRole::Superscript => (
                Icon::Superscript,
                "SUPER",
                "Superscript",
                Some(SelectionFlag::Superscript),
                EditorCommand::Superscript,
            ),
        };
        Self {
            role,
            icon: Some(icon),
            label,
            caption,
            active_source,
            // The word form of Subhead has no active state.
            text_shows_active: role != ButtonRole::Subhead,
            command,
            log_text_always: matches!(role, ButtonRole::Undo | ButtonRole::Redo),
        }
    }

    /// Whether an active state shows when the button renders as `kind`.
    pub fn shows_active(&self, kind: RenderKind) -> bool {
        self.active_source.is_some() && (kind == RenderKind::Icon || self.text_shows_active)
    }

    /// Whether the selection lights this button up.
    pub fn is_active(&self, selection: &SelectionState) -> bool {
        self.active_source.is_some_and(|f| selection.flag(f))
    }

    /// The command to send given the current selection. Style replacement
    /// starts from the selection's paragraph style.
    pub fn command_for(&self, selection: &SelectionState) -> EditorCommand {
        match self.command {
            EditorCommand::ReplaceStyle { to, .. } => EditorCommand::ReplaceStyle {
                from: selection.style,
                to,
            },
            other => other,
        }
    }
}
