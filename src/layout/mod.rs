//! Layout engine for computing grid geometry and viewport management.
//!
//! This module handles:
//! - Measuring sections into cumulative vertical spans
//! - Generating item/header/footer attribute records
//! - Sticky header pinning against the viewport
//! - Binary search for efficient section lookup and visible-region queries

mod metrics;
mod uniform;
mod viewport;

pub use metrics::{SectionMetrics, SectionSpan};
pub use uniform::UniformGridLayout;
pub use viewport::Viewport;
