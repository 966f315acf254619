//! The delegate capability trait queried during layout passes.

/// Per-section answers the layout queries while measuring.
///
/// The integrating application implements this on whatever owns the grid's
/// data. Three methods are required; the rest are capabilities with the
/// documented defaults — override only what the grid actually varies:
///
/// - [`header_height`](SectionSource::header_height) — default 0 (no header)
/// - [`footer_height`](SectionSource::footer_height) — default 0 (no footer)
/// - [`section_spacing`](SectionSource::section_spacing) — default 0
/// - [`column_count`](SectionSource::column_count) — default 1
///
/// Every query is re-issued on each measure pass; answers are never cached
/// across passes, so a source may change its answers between passes (after
/// which the host should invalidate and re-layout).
///
/// Answers are expected to be non-negative. The measure pass clamps negative
/// heights and spacing to zero and treats a zero column count as one column
/// rather than letting degenerate arithmetic through.
pub trait SectionSource {
    /// Number of sections in the grid
    fn section_count(&self) -> usize;

    /// Number of items in a section
    fn item_count(&self, section: usize) -> usize;

    /// Height shared by every item in a section
    fn item_height(&self, section: usize) -> f32;

    /// Height of a section's header (0 = no header)
    fn header_height(&self, _section: usize) -> f32 {
        0.0
    }

    /// Height of a section's footer (0 = no footer)
    fn footer_height(&self, _section: usize) -> f32 {
        0.0
    }

    /// Vertical gap inserted between consecutive sections
    fn section_spacing(&self) -> f32 {
        0.0
    }

    /// Number of columns in a section's item grid
    fn column_count(&self, _section: usize) -> usize {
        1
    }
}
