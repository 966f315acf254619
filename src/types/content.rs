//! Data-driven grid content.
//!
//! [`GridContent`] is a plain serializable description of a sectioned grid
//! that answers the layout's delegate queries directly from its fields. Hosts
//! that already know their section shapes up front (and the CLI) use it
//! instead of hand-implementing [`SectionSource`].

use serde::{Deserialize, Serialize};

use crate::error::{FlowgridError, Result};
use crate::source::SectionSource;

/// One section of a [`GridContent`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionConfig {
    /// Number of items in the section
    pub items: usize,
    /// Height shared by every item in the section
    pub item_height: f32,
    /// Header height (0 = no header)
    #[serde(default)]
    pub header_height: f32,
    /// Footer height (0 = no footer)
    #[serde(default)]
    pub footer_height: f32,
    /// Number of columns in the section's item grid
    #[serde(default = "default_columns")]
    pub columns: usize,
}

fn default_columns() -> usize {
    1
}

/// A complete grid description
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridContent {
    /// Sections in display order
    pub sections: Vec<SectionConfig>,
    /// Vertical gap between consecutive sections
    #[serde(default)]
    pub section_spacing: f32,
}

impl GridContent {
    /// Parse a grid description from JSON
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or describes non-finite
    /// dimensions.
    pub fn from_json(json: &str) -> Result<Self> {
        let content: GridContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Check that every dimension is a finite number.
    ///
    /// Negative values are legal here — the measure pass clamps them — but
    /// NaN/infinity from a host's arithmetic would poison every offset
    /// downstream, so they are rejected at the boundary.
    ///
    /// # Errors
    /// Returns an error naming the first offending section.
    pub fn validate(&self) -> Result<()> {
        if !self.section_spacing.is_finite() {
            return Err(FlowgridError::Content(
                "sectionSpacing must be finite".to_string(),
            ));
        }
        for (index, section) in self.sections.iter().enumerate() {
            let finite = section.item_height.is_finite()
                && section.header_height.is_finite()
                && section.footer_height.is_finite();
            if !finite {
                return Err(FlowgridError::Content(format!(
                    "section {index}: heights must be finite"
                )));
            }
        }
        Ok(())
    }
}

impl SectionSource for GridContent {
    fn section_count(&self) -> usize {
        self.sections.len()
    }

    fn item_count(&self, section: usize) -> usize {
        self.sections.get(section).map_or(0, |s| s.items)
    }

    fn item_height(&self, section: usize) -> f32 {
        self.sections.get(section).map_or(0.0, |s| s.item_height)
    }

    fn header_height(&self, section: usize) -> f32 {
        self.sections.get(section).map_or(0.0, |s| s.header_height)
    }

    fn footer_height(&self, section: usize) -> f32 {
        self.sections.get(section).map_or(0.0, |s| s.footer_height)
    }

    fn section_spacing(&self) -> f32 {
        self.section_spacing
    }

    fn column_count(&self, section: usize) -> usize {
        self.sections.get(section).map_or(1, |s| s.columns)
    }
}
