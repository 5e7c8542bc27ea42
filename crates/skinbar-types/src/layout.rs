//! Padding and fixed frame geometry.

use serde::{Deserialize, Serialize};

/// Padding specification for all four sides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    /// Top padding in points.
    pub top: u16,
    /// Right padding in points.
    pub right: u16,
    /// Bottom padding in points.
    pub bottom: u16,
    /// Left padding in points.
    pub left: u16,
}

impl Padding {
    /// Create symmetric padding (horizontal and vertical).
    pub const fn symmetric(h: u16, v: u16) -> Self {
        Self {
            top: v,
            right: h,
            bottom: v,
            left: h,
        }
    }

    /// Create padding with individual side values.
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// A fixed button frame mandated by a skin, in points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: u16,
    pub height: u16,
}

impl FrameSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}
