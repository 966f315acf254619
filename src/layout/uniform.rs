//! The uniform grid layout strategy.

use super::metrics::{uniform_item_width, SectionMetrics};
use super::viewport::Viewport;
use crate::source::SectionSource;
use crate::types::{InterItemSpacing, LayoutAttributes, LayoutConfig, Rect, Size};

/// Computes per-item, per-header, and per-footer geometry for a sectioned
/// grid whose columns are uniform in width within a section.
///
/// The strategy itself holds only configuration; every pass re-queries the
/// [`SectionSource`] so a host invalidation simply means calling the compute
/// methods again. Passes are read-only and calling one twice with unchanged
/// inputs yields identical output.
#[derive(Debug, Clone)]
pub struct UniformGridLayout {
    config: LayoutConfig,
}

impl Default for UniformGridLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformGridLayout {
    /// Create a layout with no spacing and sticky headers disabled
    pub fn new() -> Self {
        Self {
            config: LayoutConfig::default(),
        }
    }

    /// Create a layout from an existing configuration
    pub fn with_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Set the layout-wide parameters
    pub fn configure(&mut self, spacing: InterItemSpacing, sticky_headers: bool) {
        self.config = LayoutConfig {
            inter_item_spacing: spacing,
            sticky_headers,
        };
    }

    /// Current configuration
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Uniform item width for a section.
    ///
    /// `(container_width − (columns−1)·spacing.x) / columns`. A non-positive
    /// column count from the source lays out as a single column, so the
    /// division never degenerates; oversized spacing clamps to a zero width
    /// rather than going negative. An out-of-range section index takes
    /// whatever the source answers for it (the same single-column fallback
    /// for a well-behaved source).
    pub fn item_width(
        &self,
        source: &dyn SectionSource,
        container_width: f32,
        section: usize,
    ) -> f32 {
        let spacing = self.config.inter_item_spacing.sanitized();
        uniform_item_width(
            container_width.max(0.0),
            source.column_count(section).max(1),
            spacing.x,
        )
    }

    /// Run a measure pass and return the per-section spans.
    ///
    /// Exposed so hosts can hit-test ([`SectionMetrics::item_at`]) or inspect
    /// spans without generating attribute records.
    pub fn measure(&self, source: &dyn SectionSource, container_width: f32) -> SectionMetrics {
        SectionMetrics::measure(source, &self.config, container_width)
    }

    /// Geometry for every item, header, and footer.
    ///
    /// Sections in ascending order; within each section the header, then the
    /// items in row-major order, then the footer. Headers and footers with
    /// zero height are not emitted — the host has nothing to place for them.
    pub fn layout_attributes(
        &self,
        source: &dyn SectionSource,
        viewport: &Viewport,
    ) -> Vec<LayoutAttributes> {
        let metrics = self.measure(source, viewport.width);
        let attributes = self.collect(&metrics, viewport, None);
        log::debug!(
            "layout pass: {} sections, {} attributes, content height {}",
            metrics.len(),
            attributes.len(),
            metrics.content_height()
        );
        attributes
    }

    /// Geometry restricted to elements whose frame intersects `rect`.
    ///
    /// Same ordering as [`layout_attributes`](Self::layout_attributes).
    /// Whole sections outside the rect are skipped via binary search; a
    /// pinned header is reported when the rect covers it even though its
    /// natural frame lies elsewhere.
    pub fn attributes_in_rect(
        &self,
        source: &dyn SectionSource,
        viewport: &Viewport,
        rect: Rect,
    ) -> Vec<LayoutAttributes> {
        let metrics = self.measure(source, viewport.width);
        self.collect(&metrics, viewport, Some(rect))
    }

    /// Total scrollable content size: final cumulative offset after the last
    /// section, at container width.
    pub fn content_size(&self, source: &dyn SectionSource, viewport: &Viewport) -> Size {
        let metrics = self.measure(source, viewport.width);
        Size::new(metrics.container_width(), metrics.content_height())
    }

    fn collect(
        &self,
        metrics: &SectionMetrics,
        viewport: &Viewport,
        clip: Option<Rect>,
    ) -> Vec<LayoutAttributes> {
        let width = metrics.container_width();
        let spacing = metrics.spacing();
        let mut attributes = Vec::new();

        let start = match clip {
            Some(rect) => {
                // A pinned header can sit above the query rect's own section,
                // so probe from the viewport top as well.
                let probe_y = if self.config.sticky_headers {
                    rect.y.min(viewport.scroll_y)
                } else {
                    rect.y
                };
                match metrics.section_at_y(probe_y) {
                    Some(section) => section,
                    None => return attributes,
                }
            }
            None => 0,
        };

        for (section, span) in metrics.spans().iter().enumerate().skip(start) {
            if let Some(rect) = clip {
                // Every frame in this and later sections starts at or below
                // header_top, so nothing further can intersect.
                if span.header_top >= rect.max_y() {
                    break;
                }
            }

            if span.header_height > 0.0 {
                let (y, pinned) = if self.config.sticky_headers {
                    header_position(viewport.scroll_y, span.header_top, span.end, span.header_height)
                } else {
                    (span.header_top, false)
                };
                let frame = Rect::new(0.0, y, width, span.header_height);
                if clip.is_none_or(|rect| frame.intersects(&rect)) {
                    let mut header = LayoutAttributes::header(section, frame);
                    header.pinned = pinned;
                    attributes.push(header);
                }
            }

            for row in 0..span.rows {
                let row_y = span.items_top + (row as f32) * (span.item_height + spacing.y);
                let band = Rect::new(0.0, row_y, width, span.item_height);
                if clip.is_some_and(|rect| !band.intersects(&rect)) {
                    continue;
                }
                for col in 0..span.columns {
                    let index = row * span.columns + col;
                    if index >= span.item_count {
                        break;
                    }
                    let frame = Rect::new(
                        (col as f32) * (span.item_width + spacing.x),
                        row_y,
                        span.item_width,
                        span.item_height,
                    );
                    if clip.is_none_or(|rect| frame.intersects(&rect)) {
                        attributes.push(LayoutAttributes::item(section, index, frame));
                    }
                }
            }

            if span.footer_height > 0.0 {
                let frame = Rect::new(0.0, span.footer_top, width, span.footer_height);
                if clip.is_none_or(|rect| frame.intersects(&rect)) {
                    attributes.push(LayoutAttributes::footer(section, frame));
                }
            }
        }

        attributes
    }
}

/// Sticky header position for one section: two states, natural or pinned.
///
/// While the viewport top lies within `[header_top, end - header_height]` the
/// header rides at the viewport top; outside that range (before the section,
/// or once the next section's header would have to push it out) it sits at
/// its natural stacked position. A section shorter than its own header has an
/// empty pinning range and never pins.
fn header_position(scroll_y: f32, header_top: f32, end: f32, header_height: f32) -> (f32, bool) {
    let push_out = end - header_height;
    if scroll_y > header_top && scroll_y <= push_out {
        (scroll_y, true)
    } else {
        (header_top, false)
    }
}
