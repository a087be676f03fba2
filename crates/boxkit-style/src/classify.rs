//! Uniform / mixed / unset classification of a box type's four edges.
//!
//! The classifier reads the edge magnitudes currently held in UI state (a
//! [`BoxStateMap`]), not the snapshot. Two narrow box-type exceptions run
//! before the general rule: `auto` margins and the "full" radius sentinel.

use serde::Serialize;
use strum_macros::IntoStaticStr;

use crate::box_state::BoxStateMap;
use crate::property::{BoxType, StyleProperty};
use crate::snapshot::StyleSnapshot;
use crate::value::DEFAULT_UNIT;

/// Aggregate radius magnitude that means "fully rounded".
pub const RADIUS_FULL: f64 = 9999.0;

/// Label shown when edges differ.
pub const MIXED_LABEL: &str = "Mixed";

/// Label shown for a fully rounded radius.
pub const FULL_LABEL: &str = "Full";

/// Label shown for `auto` margins.
pub const AUTO_LABEL: &str = "auto";

/// Margin properties whose author-defined value may be the `auto` keyword.
const MARGIN_KEYWORD_PROPERTIES: [StyleProperty; 5] = [
    StyleProperty::Margin,
    StyleProperty::MarginTop,
    StyleProperty::MarginRight,
    StyleProperty::MarginBottom,
    StyleProperty::MarginLeft,
];

/// Aggregate classification of four edge values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "label", rename_all = "camelCase")]
pub enum Classification {
    /// All four edges are zero or unset. No value is shown.
    Unset,
    /// Every non-zero edge agrees. Holds the label to display.
    Uniform(String),
    /// Non-zero edges differ.
    Mixed,
    /// [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
    ///
    /// Margins use the `auto` keyword with each axis pair consistent.
    Auto,
    /// [§ 5.1 'border-radius'](https://www.w3.org/TR/css-backgrounds-3/#border-radius)
    ///
    /// The aggregate radius is the [`RADIUS_FULL`] sentinel.
    Full,
}

impl Classification {
    /// The text for the aggregate control, or `None` when nothing is shown.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Unset => None,
            Self::Uniform(label) => Some(label.as_str()),
            Self::Mixed => Some(MIXED_LABEL),
            Self::Auto => Some(AUTO_LABEL),
            Self::Full => Some(FULL_LABEL),
        }
    }
}

/// Classify a derived box state, applying the box-type exceptions first.
///
/// `snapshot` supplies author-defined values for the margin `auto` check.
#[must_use]
pub fn classify(state: &BoxStateMap, snapshot: &StyleSnapshot) -> Classification {
    let edges = state.edge_magnitudes();
    let aggregate = state.aggregate();

    match state.box_type {
        BoxType::Margin if is_auto_margin(edges, snapshot) => return Classification::Auto,
        BoxType::Radius if aggregate.magnitude == Some(RADIUS_FULL) => {
            return Classification::Full;
        }
        _ => {}
    }

    let value = match classify_edges(edges) {
        EdgeAgreement::Unset => return Classification::Unset,
        EdgeAgreement::Mixed => return Classification::Mixed,
        EdgeAgreement::Uniform(value) => value,
    };

    // The aggregate's unit picks the label form. With no aggregate set, the
    // first non-zero edge stands in for it, so `2rem` edges keep their unit.
    let reference = if aggregate.magnitude.is_some() {
        aggregate
    } else {
        state
            .edges()
            .map(|(_, edge)| edge)
            .find(|edge| edge.magnitude_or_zero() != 0.0)
            .unwrap_or(aggregate)
    };

    // Pixel values show the bare number. Other units show the reference's own
    // display value rather than the agreeing edge value.
    if reference.unit == DEFAULT_UNIT {
        Classification::Uniform(format!("{value}"))
    } else {
        Classification::Uniform(reference.display_value.clone())
    }
}

/// [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
///
/// Some defined margin value is `auto`, top equals bottom, and left equals right.
fn is_auto_margin(edges: [f64; 4], snapshot: &StyleSnapshot) -> bool {
    let [top, right, bottom, left] = edges;
    let any_auto = MARGIN_KEYWORD_PROPERTIES.iter().any(|&p| {
        snapshot
            .defined(p)
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("auto"))
    });
    any_auto && top == bottom && left == right
}

/// The general rule over four magnitudes, without box-type exceptions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeAgreement {
    /// All four are zero.
    Unset,
    /// All non-zero values are equal to this value.
    Uniform(f64),
    /// Non-zero values differ.
    Mixed,
}

/// Compare four magnitudes, ignoring zeros.
#[must_use]
pub fn classify_edges(edges: [f64; 4]) -> EdgeAgreement {
    let mut non_zero = edges.into_iter().filter(|v| *v != 0.0);
    let Some(first) = non_zero.next() else {
        return EdgeAgreement::Unset;
    };
    if non_zero.all(|v| v == first) {
        EdgeAgreement::Uniform(first)
    } else {
        EdgeAgreement::Mixed
    }
}

/// Pictogram for the aggregate control of margin, padding, or border.
///
/// One variant per combination of non-zero sides (top, right, bottom, left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SideIcon {
    /// No side set.
    Empty,
    /// Top only.
    Top,
    /// Right only.
    Right,
    /// Bottom only.
    Bottom,
    /// Left only.
    Left,
    /// Top and right.
    TopRight,
    /// Top and bottom.
    TopBottom,
    /// Top and left.
    TopLeft,
    /// Right and bottom.
    RightBottom,
    /// Right and left.
    RightLeft,
    /// Bottom and left.
    BottomLeft,
    /// All but left.
    TopRightBottom,
    /// All but bottom.
    TopRightLeft,
    /// All but right.
    TopBottomLeft,
    /// All but top.
    RightBottomLeft,
    /// All four sides.
    Full,
}

/// Pictogram for the aggregate radius control.
///
/// One variant per combination of non-zero corners (top-left, top-right,
/// bottom-right, bottom-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum CornerIcon {
    /// No corner set.
    Empty,
    /// Top-left only.
    TopLeft,
    /// Top-right only.
    TopRight,
    /// Bottom-right only.
    BottomRight,
    /// Bottom-left only.
    BottomLeft,
    /// Both top corners.
    TopLeftTopRight,
    /// Top-left and bottom-right.
    TopLeftBottomRight,
    /// Both left corners.
    TopLeftBottomLeft,
    /// Both right corners.
    TopRightBottomRight,
    /// Top-right and bottom-left.
    TopRightBottomLeft,
    /// Both bottom corners.
    BottomRightBottomLeft,
    /// All but bottom-left.
    TopLeftTopRightBottomRight,
    /// All but bottom-right.
    TopLeftTopRightBottomLeft,
    /// All but top-right.
    TopLeftBottomRightBottomLeft,
    /// All but top-left.
    TopRightBottomRightBottomLeft,
    /// All four corners.
    Full,
}

/// Pictogram shown next to an aggregate control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Pictogram {
    /// Margin, padding, or border.
    Sides(SideIcon),
    /// Radius.
    Corners(CornerIcon),
}

impl Pictogram {
    /// Stable kebab-case identifier (`top-right`, `top-left-bottom-right`, ...).
    #[must_use]
    pub fn identifier(self) -> &'static str {
        match self {
            Self::Sides(icon) => icon.into(),
            Self::Corners(icon) => icon.into(),
        }
    }
}

/// Select the pictogram for a box type from its four edge magnitudes.
#[must_use]
pub fn pictogram(box_type: BoxType, edges: [f64; 4]) -> Pictogram {
    let present = edges.map(|v| v != 0.0);
    match box_type {
        BoxType::Margin | BoxType::Padding | BoxType::Border => {
            Pictogram::Sides(side_icon(present))
        }
        BoxType::Radius => Pictogram::Corners(corner_icon(present)),
    }
}

/// Presence flags in top/right/bottom/left order.
#[must_use]
pub const fn side_icon(present: [bool; 4]) -> SideIcon {
    match present {
        [false, false, false, false] => SideIcon::Empty,
        [true, false, false, false] => SideIcon::Top,
        [false, true, false, false] => SideIcon::Right,
        [false, false, true, false] => SideIcon::Bottom,
        [false, false, false, true] => SideIcon::Left,
        [true, true, false, false] => SideIcon::TopRight,
        [true, false, true, false] => SideIcon::TopBottom,
        [true, false, false, true] => SideIcon::TopLeft,
        [false, true, true, false] => SideIcon::RightBottom,
        [false, true, false, true] => SideIcon::RightLeft,
        [false, false, true, true] => SideIcon::BottomLeft,
        [true, true, true, false] => SideIcon::TopRightBottom,
        [true, true, false, true] => SideIcon::TopRightLeft,
        [true, false, true, true] => SideIcon::TopBottomLeft,
        [false, true, true, true] => SideIcon::RightBottomLeft,
        [true, true, true, true] => SideIcon::Full,
    }
}

/// Presence flags in top-left/top-right/bottom-right/bottom-left order.
#[must_use]
pub const fn corner_icon(present: [bool; 4]) -> CornerIcon {
    match present {
        [false, false, false, false] => CornerIcon::Empty,
        [true, false, false, false] => CornerIcon::TopLeft,
        [false, true, false, false] => CornerIcon::TopRight,
        [false, false, true, false] => CornerIcon::BottomRight,
        [false, false, false, true] => CornerIcon::BottomLeft,
        [true, true, false, false] => CornerIcon::TopLeftTopRight,
        [true, false, true, false] => CornerIcon::TopLeftBottomRight,
        [true, false, false, true] => CornerIcon::TopLeftBottomLeft,
        [false, true, true, false] => CornerIcon::TopRightBottomRight,
        [false, true, false, true] => CornerIcon::TopRightBottomLeft,
        [false, false, true, true] => CornerIcon::BottomRightBottomLeft,
        [true, true, true, false] => CornerIcon::TopLeftTopRightBottomRight,
        [true, true, false, true] => CornerIcon::TopLeftTopRightBottomLeft,
        [true, false, true, true] => CornerIcon::TopLeftBottomRightBottomLeft,
        [false, true, true, true] => CornerIcon::TopRightBottomRightBottomLeft,
        [true, true, true, true] => CornerIcon::Full,
    }
}
