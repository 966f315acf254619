//! Measured vertical spans for each section.
//!
//! A measure pass walks the sections once, accumulating a running vertical
//! offset: header, row-major item grid, footer, then the inter-section gap.
//! The resulting spans back attribute generation, hit testing, and the
//! visible-region query without re-querying the source.

use std::cmp::Ordering;

use crate::source::SectionSource;
use crate::types::{InterItemSpacing, LayoutConfig, Point, Rect};

/// Measured vertical extent of one section
#[derive(Debug, Clone)]
pub struct SectionSpan {
    /// Natural y of the section's header (== the section's top edge)
    pub header_top: f32,
    /// Header height (0 = no header)
    pub header_height: f32,
    /// Y of the first item row
    pub items_top: f32,
    /// Number of items in the section
    pub item_count: usize,
    /// Columns in the item grid (always ≥ 1)
    pub columns: usize,
    /// Item rows (`ceil(item_count / columns)`)
    pub rows: usize,
    /// Uniform item width for the section
    pub item_width: f32,
    /// Uniform item height for the section
    pub item_height: f32,
    /// Y of the footer
    pub footer_top: f32,
    /// Footer height (0 = no footer)
    pub footer_height: f32,
    /// Bottom edge of the section (footer end, before any section gap)
    pub end: f32,
}

/// Measured spans for a whole grid
#[derive(Debug, Clone)]
pub struct SectionMetrics {
    spans: Vec<SectionSpan>,
    spacing: InterItemSpacing,
    container_width: f32,
    content_height: f32,
}

impl SectionMetrics {
    /// Run a measure pass over the source.
    ///
    /// Every delegate answer is sanitized here: negative heights and spacing
    /// clamp to zero, a zero column count lays out as a single column. The
    /// pass is the only place the source is queried.
    pub fn measure(
        source: &dyn SectionSource,
        config: &LayoutConfig,
        container_width: f32,
    ) -> Self {
        let spacing = config.inter_item_spacing.sanitized();
        let container_width = container_width.max(0.0);
        let section_count = source.section_count();
        let section_spacing = source.section_spacing().max(0.0);

        let mut spans = Vec::with_capacity(section_count);
        let mut y = 0.0f32;

        for section in 0..section_count {
            let header_height = source.header_height(section).max(0.0);
            let footer_height = source.footer_height(section).max(0.0);
            let item_height = source.item_height(section).max(0.0);
            let item_count = source.item_count(section);
            let columns = sanitized_columns(source.column_count(section), section);
            let item_width = uniform_item_width(container_width, columns, spacing.x);
            let rows = item_count.div_ceil(columns);

            let header_top = y;
            y += header_height;
            let items_top = y;
            if rows > 0 {
                let rows_f = rows as f32;
                y += rows_f * item_height + (rows_f - 1.0) * spacing.y;
            }
            let footer_top = y;
            y += footer_height;

            spans.push(SectionSpan {
                header_top,
                header_height,
                items_top,
                item_count,
                columns,
                rows,
                item_width,
                item_height,
                footer_top,
                footer_height,
                end: y,
            });

            // The gap belongs to the next section's offset, so the last
            // section does not trail one.
            if section + 1 < section_count {
                y += section_spacing;
            }
        }

        SectionMetrics {
            spans,
            spacing,
            container_width,
            content_height: y,
        }
    }

    /// Measured span for a section
    pub fn span(&self, section: usize) -> Option<&SectionSpan> {
        self.spans.get(section)
    }

    /// Measured spans in section order
    pub fn spans(&self) -> &[SectionSpan] {
        &self.spans
    }

    /// Number of sections measured
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// True if the grid has no sections
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Sanitized inter-item spacing the pass was measured with
    pub fn spacing(&self) -> InterItemSpacing {
        self.spacing
    }

    /// Container width the pass was measured against
    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    /// Total content height (final cumulative offset after the last section)
    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    /// Find the section at a y offset (binary search).
    ///
    /// Offsets before the first section or past the last attribute to the
    /// nearest section; the gap after a section attributes to that section.
    pub fn section_at_y(&self, y: f32) -> Option<usize> {
        if self.spans.is_empty() {
            return None;
        }
        match self
            .spans
            .binary_search_by(|span| span.header_top.partial_cmp(&y).unwrap_or(Ordering::Equal))
        {
            Ok(i) => Some(i),
            Err(i) => Some(i.saturating_sub(1)),
        }
    }

    /// Frame of one item in content coordinates
    pub fn item_rect(&self, section: usize, index: usize) -> Option<Rect> {
        let span = self.spans.get(section)?;
        if index >= span.item_count {
            return None;
        }
        let row = (index / span.columns) as f32;
        let col = (index % span.columns) as f32;
        Some(Rect::new(
            col * (span.item_width + self.spacing.x),
            span.items_top + row * (span.item_height + self.spacing.y),
            span.item_width,
            span.item_height,
        ))
    }

    /// Hit-test a point against the item grid.
    ///
    /// Returns `(section, index)` when the point lies inside an item's frame;
    /// headers, footers, and gaps between items return `None`.
    pub fn item_at(&self, point: Point) -> Option<(usize, usize)> {
        if point.x < 0.0 || point.x >= self.container_width || point.y < 0.0 {
            return None;
        }
        let section = self.section_at_y(point.y)?;
        let span = self.spans.get(section)?;
        if span.item_count == 0 {
            return None;
        }

        let row = grid_slot(point.y - span.items_top, span.item_height, self.spacing.y)?;
        let col = grid_slot(point.x, span.item_width, self.spacing.x)?;
        if row >= span.rows || col >= span.columns {
            return None;
        }
        let index = row * span.columns + col;
        if index >= span.item_count {
            return None;
        }
        Some((section, index))
    }
}

/// Resolve an offset along one axis to a grid slot.
///
/// `None` when the offset falls in the gap between slots or before slot 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn grid_slot(offset: f32, extent: f32, gap: f32) -> Option<usize> {
    if offset < 0.0 {
        return None;
    }
    let step = extent + gap;
    if step <= 0.0 {
        // Degenerate zero-size slots all collapse onto slot 0.
        return Some(0);
    }
    let slot = (offset / step).floor();
    if offset - slot * step >= extent && extent > 0.0 {
        return None; // in the gap after the slot
    }
    Some(slot as usize)
}

fn sanitized_columns(columns: usize, section: usize) -> usize {
    if columns == 0 {
        log::warn!("section {section} reported 0 columns; laying out as a single column");
        return 1;
    }
    columns
}

/// Uniform item width for a section: the container width minus the gaps,
/// split evenly across the columns. Clamped so oversized spacing degrades to
/// zero-width items instead of negative ones.
pub(crate) fn uniform_item_width(container_width: f32, columns: usize, gap: f32) -> f32 {
    let columns_f = (columns.max(1)) as f32;
    ((container_width - (columns_f - 1.0) * gap) / columns_f).max(0.0)
}
