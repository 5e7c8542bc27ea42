//! Foundation types for skinbar.
//!
//! Platform-agnostic values shared by every skinbar crate: colors, padding
//! and frame geometry, the editor mode, toolbar configuration, and the error
//! type.

pub mod color;
pub mod config;
pub mod error;
pub mod layout;

pub use color::Color;
pub use config::{EditorMode, FormatContents, ToolbarConfig};
pub use error::{Result, SkinbarError};
pub use layout::{FrameSize, Padding};
