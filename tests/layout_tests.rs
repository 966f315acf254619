//! Layout feature tests for flowgrid
//!
//! Tests for item width derivation, row-major placement, cumulative section
//! offsets, delegate fallbacks, ordering, and content size.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use test_case::test_case;

use flowgrid::{ElementKind, GridContent, InterItemSpacing, Rect, UniformGridLayout, Viewport};

// Helper to build a configured layout
fn make_layout(spacing: (f32, f32), sticky: bool) -> UniformGridLayout {
    let mut layout = UniformGridLayout::new();
    layout.configure(InterItemSpacing::new(spacing.0, spacing.1), sticky);
    layout
}

// Helper to parse grid content from JSON
fn make_content(json: &str) -> GridContent {
    GridContent::from_json(json).expect("Failed to parse content")
}

// =============================================================================
// ITEM WIDTH TESTS
// =============================================================================

#[test_case(210.0, 2, 10.0 ; "two columns")]
#[test_case(210.0, 1, 10.0 ; "single column")]
#[test_case(375.0, 3, 8.0 ; "three columns")]
#[test_case(320.0, 4, 1.5 ; "four columns fractional gap")]
#[test_case(1024.0, 7, 12.0 ; "seven columns")]
fn test_item_width_round_trips(container: f32, columns: usize, gap: f32) {
    let layout = make_layout((gap, gap), false);
    let content = make_content(&format!(
        r#"{{"sections":[{{"items":{columns},"itemHeight":40,"columns":{columns}}}]}}"#
    ));

    let width = layout.item_width(&content, container, 0);
    assert!(width > 0.0, "Item width should be positive, got {width}");

    // c items of that width plus (c-1) gaps exactly fill the container
    let filled = width * columns as f32 + gap * (columns as f32 - 1.0);
    assert!(
        (filled - container).abs() < 1e-3,
        "{columns} items + gaps should fill {container}, got {filled}"
    );
}

#[test]
fn test_item_width_zero_columns_falls_back() {
    let layout = make_layout((10.0, 10.0), false);
    let content = make_content(r#"{"sections":[{"items":3,"itemHeight":40,"columns":0}]}"#);

    // Falls back to 1 column: full container width, no division by zero
    assert_eq!(layout.item_width(&content, 210.0, 0), 210.0);
}

#[test]
fn test_item_width_out_of_range_section() {
    let layout = make_layout((10.0, 10.0), false);
    let content = make_content(r#"{"sections":[{"items":3,"itemHeight":40,"columns":3}]}"#);

    // Out-of-range sections answer the default single column
    assert_eq!(layout.item_width(&content, 210.0, 5), 210.0);
}

#[test]
fn test_item_width_oversized_spacing_clamps() {
    let layout = make_layout((500.0, 0.0), false);
    let content = make_content(r#"{"sections":[{"items":4,"itemHeight":40,"columns":4}]}"#);

    // Gaps wider than the container degrade to zero-width items
    assert_eq!(layout.item_width(&content, 200.0, 0), 0.0);
}

// =============================================================================
// PLACEMENT TESTS
// =============================================================================

#[test]
fn test_four_items_two_columns_scenario() {
    // 1 section, 4 items, 2 columns, item height 50, spacing (10,10), width 210
    let layout = make_layout((10.0, 10.0), false);
    let content = make_content(r#"{"sections":[{"items":4,"itemHeight":50,"columns":2}]}"#);
    let viewport = Viewport::with_size(210.0, 600.0);

    assert_eq!(layout.item_width(&content, 210.0, 0), 100.0);

    let attributes = layout.layout_attributes(&content, &viewport);
    assert_eq!(attributes.len(), 4);
    assert_eq!(attributes[0].frame, Rect::new(0.0, 0.0, 100.0, 50.0));
    assert_eq!(attributes[1].frame, Rect::new(110.0, 0.0, 100.0, 50.0));
    assert_eq!(attributes[2].frame, Rect::new(0.0, 60.0, 100.0, 50.0));
    assert_eq!(attributes[3].frame, Rect::new(110.0, 60.0, 100.0, 50.0));

    let size = layout.content_size(&content, &viewport);
    assert_eq!(size.width, 210.0);
    assert_eq!(size.height, 110.0);
}

#[test]
fn test_row_major_order() {
    let layout = make_layout((0.0, 0.0), false);
    let content = make_content(r#"{"sections":[{"items":7,"itemHeight":10,"columns":3}]}"#);
    let viewport = Viewport::with_size(300.0, 600.0);

    let attributes = layout.layout_attributes(&content, &viewport);
    assert_eq!(attributes.len(), 7);

    for (i, attrs) in attributes.iter().enumerate() {
        let row = (i / 3) as f32;
        let col = (i % 3) as f32;
        assert_eq!(attrs.index, i);
        assert_eq!(attrs.frame.x, col * 100.0, "item {i} x");
        assert_eq!(attrs.frame.y, row * 10.0, "item {i} y");
    }
}

#[test]
fn test_items_share_section_dimensions() {
    let layout = make_layout((6.0, 6.0), false);
    let content = make_content(
        r#"{"sections":[
            {"items": 5, "itemHeight": 48, "columns": 2},
            {"items": 5, "itemHeight": 64, "columns": 3}
        ]}"#,
    );
    let viewport = Viewport::with_size(320.0, 600.0);

    let attributes = layout.layout_attributes(&content, &viewport);
    for attrs in &attributes {
        let expected_width = layout.item_width(&content, 320.0, attrs.section);
        let expected_height = if attrs.section == 0 { 48.0 } else { 64.0 };
        assert_eq!(attrs.frame.width, expected_width);
        assert_eq!(attrs.frame.height, expected_height);
    }
}

// =============================================================================
// SECTION OFFSET TESTS
// =============================================================================

#[test]
fn test_cumulative_offsets_across_sections() {
    let layout = make_layout((10.0, 10.0), false);
    let content = make_content(
        r#"{
            "sections": [
                {"items": 4, "itemHeight": 50, "headerHeight": 20, "footerHeight": 10, "columns": 2},
                {"items": 2, "itemHeight": 30, "headerHeight": 24, "columns": 2}
            ],
            "sectionSpacing": 8
        }"#,
    );
    let viewport = Viewport::with_size(210.0, 600.0);
    let attributes = layout.layout_attributes(&content, &viewport);

    // Section 0: header at 0, items from 20, footer after 2 item rows
    assert_eq!(attributes[0].kind, ElementKind::Header);
    assert_eq!(attributes[0].frame, Rect::new(0.0, 0.0, 210.0, 20.0));
    assert_eq!(attributes[1].frame.y, 20.0);
    assert_eq!(attributes[3].frame.y, 80.0);
    assert_eq!(attributes[5].kind, ElementKind::Footer);
    assert_eq!(attributes[5].frame, Rect::new(0.0, 130.0, 210.0, 10.0));

    // Section 1 header = section 0 end (140) + spacing (8)
    assert_eq!(attributes[6].kind, ElementKind::Header);
    assert_eq!(attributes[6].section, 1);
    assert_eq!(attributes[6].frame, Rect::new(0.0, 148.0, 210.0, 24.0));

    // Content height: 148 + 24 header + 1 row of 30
    let size = layout.content_size(&content, &viewport);
    assert_eq!(size.height, 202.0);
}

#[test]
fn test_offsets_strictly_increase() {
    let layout = make_layout((4.0, 4.0), false);
    let content = make_content(
        r#"{
            "sections": [
                {"items": 3, "itemHeight": 40, "headerHeight": 18, "columns": 2},
                {"items": 1, "itemHeight": 40, "headerHeight": 18},
                {"items": 6, "itemHeight": 40, "headerHeight": 18, "columns": 3}
            ]
        }"#,
    );
    let metrics = layout.measure(&content, 320.0);

    let mut previous_top = f32::MIN;
    for span in metrics.spans() {
        assert!(
            span.header_top > previous_top,
            "Section tops should strictly increase"
        );
        assert!(span.end > span.header_top);
        previous_top = span.header_top;
    }
}

#[test]
fn test_empty_sections_and_empty_grid() {
    let layout = make_layout((10.0, 10.0), false);
    let viewport = Viewport::with_size(210.0, 600.0);

    // A section with no items still stacks its header and footer
    let content = make_content(
        r#"{"sections":[
            {"items": 0, "itemHeight": 50, "headerHeight": 20, "footerHeight": 10},
            {"items": 1, "itemHeight": 50}
        ]}"#,
    );
    let attributes = layout.layout_attributes(&content, &viewport);
    assert_eq!(attributes.len(), 3);
    assert_eq!(attributes[0].kind, ElementKind::Header);
    assert_eq!(attributes[1].kind, ElementKind::Footer);
    assert_eq!(attributes[1].frame.y, 20.0);
    assert_eq!(attributes[2].frame.y, 30.0);

    // No sections at all: no attributes, zero-height content
    let empty = GridContent::default();
    assert!(layout.layout_attributes(&empty, &viewport).is_empty());
    assert_eq!(layout.content_size(&empty, &viewport).height, 0.0);
}

#[test]
fn test_negative_delegate_answers_degrade() {
    let layout = make_layout((-5.0, -5.0), false);
    let content =
        make_content(r#"{"sections":[{"items":2,"itemHeight":-40,"headerHeight":-10}]}"#);
    let viewport = Viewport::with_size(100.0, 600.0);

    // Negative heights and spacing clamp to zero: degenerate but not crashed
    let attributes = layout.layout_attributes(&content, &viewport);
    assert_eq!(attributes.len(), 2);
    for attrs in &attributes {
        assert_eq!(attrs.frame.height, 0.0);
        assert!(attrs.frame.width >= 0.0);
    }
    assert_eq!(layout.content_size(&content, &viewport).height, 0.0);
}

// =============================================================================
// ORDERING TESTS
// =============================================================================

#[test]
fn test_attribute_sequence_order() {
    let layout = make_layout((0.0, 0.0), false);
    let content = make_content(
        r#"{
            "sections": [
                {"items": 2, "itemHeight": 30, "headerHeight": 20, "footerHeight": 10},
                {"items": 2, "itemHeight": 30, "headerHeight": 20, "footerHeight": 10}
            ]
        }"#,
    );
    let viewport = Viewport::with_size(100.0, 600.0);

    let kinds: Vec<(usize, ElementKind, usize)> = layout
        .layout_attributes(&content, &viewport)
        .iter()
        .map(|a| (a.section, a.kind, a.index))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (0, ElementKind::Header, 0),
            (0, ElementKind::Item, 0),
            (0, ElementKind::Item, 1),
            (0, ElementKind::Footer, 0),
            (1, ElementKind::Header, 0),
            (1, ElementKind::Item, 0),
            (1, ElementKind::Item, 1),
            (1, ElementKind::Footer, 0),
        ]
    );
}

#[test]
fn test_headers_and_footers_span_full_width() {
    let layout = make_layout((12.0, 12.0), false);
    let content = make_content(
        r#"{"sections":[{"items":3,"itemHeight":40,"headerHeight":22,"footerHeight":14,"columns":3}]}"#,
    );
    let viewport = Viewport::with_size(390.0, 600.0);

    for attrs in layout.layout_attributes(&content, &viewport) {
        if attrs.kind != ElementKind::Item {
            assert_eq!(attrs.frame.x, 0.0);
            assert_eq!(attrs.frame.width, 390.0);
        }
    }
}
