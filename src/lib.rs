//! flowgrid - sectioned uniform-grid layout for scrollable collection views
//!
//! Computes the rectangle for every item, section header, and section footer
//! in a vertically scrolling grid:
//! - Per-section column counts, item/header/footer heights, and spacing come
//!   from a delegate-style [`SectionSource`]
//! - Uniform item widths within a section, row-major placement
//! - Optional sticky headers pinned to the viewport top
//! - Visible-region queries and hit testing over the measured spans
//!
//! The host UI framework owns scrolling, invalidation, and rendering; it
//! calls the compute methods on each layout pass and places the returned
//! geometry.
//!
//! # Usage
//!
//! ```
//! use flowgrid::{GridContent, InterItemSpacing, UniformGridLayout, Viewport};
//!
//! let content = GridContent::from_json(
//!     r#"{"sections":[{"items":4,"itemHeight":50,"columns":2}]}"#,
//! )?;
//! let mut layout = UniformGridLayout::new();
//! layout.configure(InterItemSpacing::new(10.0, 10.0), true);
//!
//! let viewport = Viewport::with_size(210.0, 600.0);
//! let attributes = layout.layout_attributes(&content, &viewport);
//! let size = layout.content_size(&content, &viewport);
//! assert_eq!(attributes.len(), 4);
//! assert_eq!(size.height, 110.0);
//! # Ok::<(), flowgrid::FlowgridError>(())
//! ```

pub mod error;
pub mod layout;
pub mod source;
pub mod types;

pub use error::{FlowgridError, Result};
pub use layout::{SectionMetrics, SectionSpan, UniformGridLayout, Viewport};
pub use source::SectionSource;
pub use types::*;

/// Get the library version
#[must_use]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
