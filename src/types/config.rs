//! Layout-wide configuration.

use serde::{Deserialize, Serialize};

/// Uniform gap between adjacent items, horizontally and vertically.
///
/// Set once per layout configuration and read on every geometry computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InterItemSpacing {
    /// Gap between horizontally adjacent items
    pub x: f32,
    /// Gap between vertically adjacent item rows
    pub y: f32,
}

impl InterItemSpacing {
    /// Create a new spacing pair
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Spacing with negative components clamped to zero.
    ///
    /// Negative gaps would produce overlapping frames and negative widths, so
    /// the measure pass reads spacing through this.
    pub fn sanitized(self) -> Self {
        Self {
            x: self.x.max(0.0),
            y: self.y.max(0.0),
        }
    }
}

/// Configuration state of a [`crate::UniformGridLayout`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Gap between adjacent items
    #[serde(default)]
    pub inter_item_spacing: InterItemSpacing,
    /// Keep each section's header clamped to the viewport top while the
    /// section is scrolled through
    #[serde(default)]
    pub sticky_headers: bool,
}
