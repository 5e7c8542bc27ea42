//! skinbar-toolbar: skinned editor toolbars.
//!
//! Descriptors name what each button does; the resolver decides how it
//! looks under the selected skin and editor mode; the composer decides which
//! buttons a toolbar shows; [`Toolbar`] tracks hover and selection state and
//! forwards clicks to the editing engine.

pub mod composer;
pub mod descriptor;
pub mod icon;
pub mod label;
pub mod resolver;
pub mod toolbar;

#[cfg(test)]
pub(crate) mod test_utils;

pub use composer::{ToolbarLayout, build_correction_toolbar, build_format_toolbar};
pub use descriptor::{
    ButtonDescriptor, ButtonRole, EditorCommand, ParagraphStyle, SelectionFlag, SelectionState,
};
pub use icon::Icon;
pub use label::LabelResolver;
pub use resolver::{InteractionState, Presentation, ResolvedStyle, StyleResolver, resolve};
pub use toolbar::{EditorCommands, Toolbar};
