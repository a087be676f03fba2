//! Integration tests for aggregate classification and pictograms.

use boxkit_style::{
    BoxStateMap, BoxType, Classification, CornerIcon, EdgeAgreement, Pictogram, SideIcon,
    StyleProperty, StyleSnapshot, classify, classify_edges, pictogram,
};

/// Helper: a snapshot with the four edges of `box_type` set to `values` (in px).
fn edges_snapshot(box_type: BoxType, values: [f64; 4]) -> StyleSnapshot {
    box_type
        .edge_properties()
        .into_iter()
        .zip(values)
        .fold(StyleSnapshot::new(), |snapshot, (property, value)| {
            snapshot.with_computed(property, &format!("{value}px"))
        })
}

/// Helper: classify the four edges of `box_type` with no aggregate set.
fn classify_values(box_type: BoxType, values: [f64; 4]) -> Classification {
    let snapshot = edges_snapshot(box_type, values);
    classify(&BoxStateMap::derive(&snapshot, box_type), &snapshot)
}

// ========== general rule ==========

#[test]
fn test_edge_agreement() {
    assert_eq!(classify_edges([4.0, 4.0, 4.0, 4.0]), EdgeAgreement::Uniform(4.0));
    assert_eq!(classify_edges([4.0, 0.0, 4.0, 4.0]), EdgeAgreement::Uniform(4.0));
    assert_eq!(classify_edges([4.0, 8.0, 4.0, 4.0]), EdgeAgreement::Mixed);
    assert_eq!(classify_edges([0.0, 0.0, 0.0, 0.0]), EdgeAgreement::Unset);
}

#[test]
fn test_uniform_px_shows_bare_number() {
    let result = classify_values(BoxType::Padding, [4.0, 4.0, 4.0, 4.0]);
    assert_eq!(result, Classification::Uniform("4".to_string()));
    assert_eq!(result.label(), Some("4"));
}

#[test]
fn test_zero_edges_are_excluded() {
    assert_eq!(
        classify_values(BoxType::Margin, [4.0, 0.0, 4.0, 4.0]),
        Classification::Uniform("4".to_string())
    );
}

#[test]
fn test_differing_edges_are_mixed() {
    let result = classify_values(BoxType::Border, [4.0, 8.0, 4.0, 4.0]);
    assert_eq!(result, Classification::Mixed);
    assert_eq!(result.label(), Some("Mixed"));
}

#[test]
fn test_all_zero_is_unset() {
    let result = classify_values(BoxType::Padding, [0.0; 4]);
    assert_eq!(result, Classification::Unset);
    assert_eq!(result.label(), None);
}

#[test]
fn test_no_margin_properties_shows_nothing() {
    let snapshot = StyleSnapshot::new();
    let state = BoxStateMap::derive(&snapshot, BoxType::Margin);
    assert!(state.edges().all(|(_, edge)| edge.display_value == "--"));
    assert_eq!(classify(&state, &snapshot).label(), None);
}

#[test]
fn test_non_px_uniform_reports_aggregate_display_value() {
    let snapshot = StyleSnapshot::new().with_computed(StyleProperty::Padding, "2rem");
    let state = BoxStateMap::derive(&snapshot, BoxType::Padding);
    assert_eq!(
        classify(&state, &snapshot),
        Classification::Uniform("2rem".to_string())
    );
}

#[test]
fn test_non_px_uniform_ignores_edge_value() {
    // The aggregate's own display value is reported, even when the agreeing
    // edges hold a different magnitude.
    let snapshot = StyleSnapshot::new()
        .with_computed(StyleProperty::Padding, "2rem")
        .with_computed(StyleProperty::PaddingTop, "3rem")
        .with_computed(StyleProperty::PaddingRight, "3rem")
        .with_computed(StyleProperty::PaddingBottom, "3rem")
        .with_computed(StyleProperty::PaddingLeft, "3rem");
    let state = BoxStateMap::derive(&snapshot, BoxType::Padding);
    assert_eq!(
        classify(&state, &snapshot),
        Classification::Uniform("2rem".to_string())
    );
}

#[test]
fn test_unset_aggregate_takes_unit_from_edges() {
    let snapshot = [
        StyleProperty::MarginTop,
        StyleProperty::MarginRight,
        StyleProperty::MarginBottom,
        StyleProperty::MarginLeft,
    ]
    .into_iter()
    .fold(StyleSnapshot::new(), |snapshot, property| {
        snapshot.with_computed(property, "2rem")
    });
    let state = BoxStateMap::derive(&snapshot, BoxType::Margin);
    assert_eq!(state.aggregate().magnitude, None);
    assert_eq!(
        classify(&state, &snapshot),
        Classification::Uniform("2rem".to_string())
    );
}

#[test]
fn test_px_aggregate_selects_bare_number_over_edge_units() {
    let snapshot = StyleSnapshot::new()
        .with_computed(StyleProperty::Padding, "2px")
        .with_computed(StyleProperty::PaddingTop, "2rem");
    let state = BoxStateMap::derive(&snapshot, BoxType::Padding);
    assert_eq!(
        classify(&state, &snapshot),
        Classification::Uniform("2".to_string())
    );
}

// ========== margin auto ==========

#[test]
fn test_margin_auto_with_consistent_axes() {
    let snapshot = edges_snapshot(BoxType::Margin, [0.0, 16.0, 0.0, 16.0])
        .with_defined(StyleProperty::MarginTop, "auto")
        .with_defined(StyleProperty::MarginBottom, "auto")
        .with_defined(StyleProperty::MarginLeft, "16px")
        .with_defined(StyleProperty::MarginRight, "16px");
    let state = BoxStateMap::derive(&snapshot, BoxType::Margin);

    let result = classify(&state, &snapshot);
    assert_eq!(result, Classification::Auto);
    assert_eq!(result.label(), Some("auto"));
}

#[test]
fn test_margin_auto_from_aggregate_keyword() {
    let snapshot = edges_snapshot(BoxType::Margin, [0.0, 24.0, 0.0, 24.0])
        .with_defined(StyleProperty::Margin, "auto");
    let state = BoxStateMap::derive(&snapshot, BoxType::Margin);
    assert_eq!(classify(&state, &snapshot), Classification::Auto);
}

#[test]
fn test_margin_auto_needs_consistent_axes() {
    let snapshot = edges_snapshot(BoxType::Margin, [0.0, 16.0, 8.0, 16.0])
        .with_defined(StyleProperty::MarginTop, "auto");
    let state = BoxStateMap::derive(&snapshot, BoxType::Margin);
    assert_eq!(classify(&state, &snapshot), Classification::Mixed);
}

#[test]
fn test_auto_keyword_only_applies_to_margin() {
    let snapshot = edges_snapshot(BoxType::Padding, [0.0, 16.0, 0.0, 16.0])
        .with_defined(StyleProperty::MarginTop, "auto");
    let state = BoxStateMap::derive(&snapshot, BoxType::Padding);
    assert_eq!(
        classify(&state, &snapshot),
        Classification::Uniform("16".to_string())
    );
}

// ========== radius full ==========

#[test]
fn test_radius_sentinel_is_full_despite_mixed_corners() {
    let snapshot = edges_snapshot(BoxType::Radius, [4.0, 8.0, 0.0, 12.0])
        .with_computed(StyleProperty::BorderRadius, "9999px");
    let state = BoxStateMap::derive(&snapshot, BoxType::Radius);

    let result = classify(&state, &snapshot);
    assert_eq!(result, Classification::Full);
    assert_eq!(result.label(), Some("Full"));
}

#[test]
fn test_radius_below_sentinel_uses_general_rule() {
    let snapshot = StyleSnapshot::new().with_computed(StyleProperty::BorderRadius, "9998px");
    let state = BoxStateMap::derive(&snapshot, BoxType::Radius);
    assert_eq!(
        classify(&state, &snapshot),
        Classification::Uniform("9998".to_string())
    );
}

// ========== pictograms ==========

/// Helper: magnitudes with a non-zero value at each `true` flag.
fn presence(flags: [bool; 4]) -> [f64; 4] {
    flags.map(|set| if set { 6.0 } else { 0.0 })
}

#[test]
fn test_side_pictograms_cover_every_combination() {
    let cases = [
        ([false, false, false, false], SideIcon::Empty),
        ([true, false, false, false], SideIcon::Top),
        ([false, true, false, false], SideIcon::Right),
        ([false, false, true, false], SideIcon::Bottom),
        ([false, false, false, true], SideIcon::Left),
        ([true, true, false, false], SideIcon::TopRight),
        ([true, false, true, false], SideIcon::TopBottom),
        ([true, false, false, true], SideIcon::TopLeft),
        ([false, true, true, false], SideIcon::RightBottom),
        ([false, true, false, true], SideIcon::RightLeft),
        ([false, false, true, true], SideIcon::BottomLeft),
        ([true, true, true, false], SideIcon::TopRightBottom),
        ([true, true, false, true], SideIcon::TopRightLeft),
        ([true, false, true, true], SideIcon::TopBottomLeft),
        ([false, true, true, true], SideIcon::RightBottomLeft),
        ([true, true, true, true], SideIcon::Full),
    ];

    for box_type in [BoxType::Margin, BoxType::Padding, BoxType::Border] {
        for (flags, icon) in cases {
            assert_eq!(
                pictogram(box_type, presence(flags)),
                Pictogram::Sides(icon),
                "{box_type} {flags:?}"
            );
        }
    }
}

#[test]
fn test_corner_pictograms_cover_every_combination() {
    let cases = [
        ([false, false, false, false], CornerIcon::Empty),
        ([true, false, false, false], CornerIcon::TopLeft),
        ([false, true, false, false], CornerIcon::TopRight),
        ([false, false, true, false], CornerIcon::BottomRight),
        ([false, false, false, true], CornerIcon::BottomLeft),
        ([true, true, false, false], CornerIcon::TopLeftTopRight),
        ([true, false, true, false], CornerIcon::TopLeftBottomRight),
        ([true, false, false, true], CornerIcon::TopLeftBottomLeft),
        ([false, true, true, false], CornerIcon::TopRightBottomRight),
        ([false, true, false, true], CornerIcon::TopRightBottomLeft),
        ([false, false, true, true], CornerIcon::BottomRightBottomLeft),
        ([true, true, true, false], CornerIcon::TopLeftTopRightBottomRight),
        ([true, true, false, true], CornerIcon::TopLeftTopRightBottomLeft),
        ([true, false, true, true], CornerIcon::TopLeftBottomRightBottomLeft),
        ([false, true, true, true], CornerIcon::TopRightBottomRightBottomLeft),
        ([true, true, true, true], CornerIcon::Full),
    ];

    for (flags, icon) in cases {
        assert_eq!(
            pictogram(BoxType::Radius, presence(flags)),
            Pictogram::Corners(icon),
            "{flags:?}"
        );
    }
}

#[test]
fn test_pictogram_identifiers_are_distinct() {
    let mut seen = std::collections::HashSet::new();
    for bits in 0u8..16 {
        let flags = [bits & 8 != 0, bits & 4 != 0, bits & 2 != 0, bits & 1 != 0];
        let id = pictogram(BoxType::Padding, presence(flags)).identifier();
        assert!(seen.insert(id), "duplicate identifier {id}");
    }
    assert_eq!(seen.len(), 16);
    assert_eq!(
        pictogram(BoxType::Radius, presence([true, false, true, false])).identifier(),
        "top-left-bottom-right"
    );
    assert_eq!(
        pictogram(BoxType::Margin, [0.0; 4]).identifier(),
        "empty"
    );
}
