//! Integration tests for width/height state derivation.

use boxkit_style::{Axis, DimensionStateMap, SizingMode, StyleProperty, StyleSnapshot};

#[test]
fn test_unset_width_is_hug() {
    let state = DimensionStateMap::derive(&StyleSnapshot::new(), Axis::Width);

    let width = state.primary().unwrap();
    assert_eq!(width.magnitude, None);
    assert_eq!(width.display_value, "--");
    assert_eq!(width.sizing_mode, SizingMode::Hug);
}

#[test]
fn test_numeric_width_is_fixed() {
    let snapshot = StyleSnapshot::new().with_computed(StyleProperty::Width, "240px");
    let state = DimensionStateMap::derive(&snapshot, Axis::Width);

    let width = state.get(StyleProperty::Width).unwrap();
    assert_eq!(width.magnitude, Some(240.0));
    assert_eq!(width.sizing_mode, SizingMode::Fixed);
}

#[test]
fn test_full_percentage_is_fill() {
    let snapshot = StyleSnapshot::new().with_defined(StyleProperty::Height, "100%");
    let state = DimensionStateMap::derive(&snapshot, Axis::Height);
    assert_eq!(state.primary().unwrap().sizing_mode, SizingMode::Fill);

    let half = StyleSnapshot::new().with_defined(StyleProperty::Height, "50%");
    let state = DimensionStateMap::derive(&half, Axis::Height);
    assert_eq!(state.primary().unwrap().sizing_mode, SizingMode::Fixed);
}

#[test]
fn test_defined_auto_wins_over_computed_pixels() {
    let snapshot = StyleSnapshot::new()
        .with_computed(StyleProperty::Width, "312px")
        .with_defined(StyleProperty::Width, "auto");
    let state = DimensionStateMap::derive(&snapshot, Axis::Width);
    assert_eq!(state.primary().unwrap().sizing_mode, SizingMode::Hug);
}

#[test]
fn test_bounds_are_always_fixed() {
    let snapshot = StyleSnapshot::new()
        .with_computed(StyleProperty::MinHeight, "40px")
        .with_computed(StyleProperty::MaxHeight, "none");
    let state = DimensionStateMap::derive(&snapshot, Axis::Height);

    let min = state.get(StyleProperty::MinHeight).unwrap();
    assert_eq!(min.magnitude, Some(40.0));
    assert_eq!(min.sizing_mode, SizingMode::Fixed);

    let max = state.get(StyleProperty::MaxHeight).unwrap();
    assert_eq!(max.magnitude, None);
    assert_eq!(max.display_value, "--");
    assert_eq!(max.sizing_mode, SizingMode::Fixed);
}

#[test]
fn test_axis_map_holds_only_its_properties() {
    let state = DimensionStateMap::derive(&StyleSnapshot::new(), Axis::Width);
    let properties: Vec<_> = state.iter().map(|(p, _)| p).collect();
    assert_eq!(
        properties,
        [StyleProperty::Width, StyleProperty::MinWidth, StyleProperty::MaxWidth]
    );
    assert!(!state.contains(StyleProperty::Height));
}

#[test]
fn test_sizing_mode_parses_case_insensitively() {
    assert_eq!("fill".parse::<SizingMode>(), Ok(SizingMode::Fill));
    assert_eq!("Hug".parse::<SizingMode>(), Ok(SizingMode::Hug));
    assert!("stretch".parse::<SizingMode>().is_err());
}
