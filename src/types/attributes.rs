//! Layout attribute records returned to the host.

use serde::{Deserialize, Serialize};

use super::Rect;

/// What a [`LayoutAttributes`] record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementKind {
    /// A grid cell
    Item,
    /// A section header
    Header,
    /// A section footer
    Footer,
}

/// Geometry for one item, header, or footer.
///
/// Produced fresh on every layout pass; the host owns the record once
/// returned and places/draws whatever it maps the element to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutAttributes {
    /// Element kind tag
    pub kind: ElementKind,
    /// Section the element belongs to
    pub section: usize,
    /// Item index within the section (always 0 for headers and footers)
    pub index: usize,
    /// Frame in content coordinates
    pub frame: Rect,
    /// True when a sticky header is currently clamped to the viewport top.
    /// Hosts typically raise pinned headers above cells when drawing.
    #[serde(skip_serializing_if = "is_false", default)]
    pub pinned: bool,
}

impl LayoutAttributes {
    /// Attributes for an item cell
    pub fn item(section: usize, index: usize, frame: Rect) -> Self {
        Self {
            kind: ElementKind::Item,
            section,
            index,
            frame,
            pinned: false,
        }
    }

    /// Attributes for a section header at its natural position
    pub fn header(section: usize, frame: Rect) -> Self {
        Self {
            kind: ElementKind::Header,
            section,
            index: 0,
            frame,
            pinned: false,
        }
    }

    /// Attributes for a section footer
    pub fn footer(section: usize, frame: Rect) -> Self {
        Self {
            kind: ElementKind::Footer,
            section,
            index: 0,
            frame,
            pinned: false,
        }
    }
}

/// Helper function for serde skip_serializing_if
fn is_false(b: &bool) -> bool {
    !b
}
