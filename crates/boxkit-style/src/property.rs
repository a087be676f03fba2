//! The fixed table of style properties the engine reads and writes.
//!
//! [CSS Box Model Module Level 4](https://www.w3.org/TR/css-box-4/)
//! [CSS Backgrounds and Borders Level 3](https://www.w3.org/TR/css-backgrounds-3/)
//!
//! Every property name is an explicit enum variant. Names are never built by
//! concatenating a box type and a side at runtime.

use std::ops::RangeInclusive;

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Largest magnitude accepted by any box-model or dimension control.
pub const MAX_MAGNITUDE: f64 = 9999.0;

/// A style property handled by the box-model controls.
///
/// The string form is the camelCase key used by style snapshots and by the
/// style sink (`marginTop`, `borderTopLeftRadius`, ...).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum StyleProperty {
    /// [§ 6.1 'margin'](https://www.w3.org/TR/css-box-4/#margin-shorthand)
    Margin,
    /// [§ 6.1 'margin-top'](https://www.w3.org/TR/css-box-4/#margin-physical)
    MarginTop,
    /// [§ 6.1 'margin-right'](https://www.w3.org/TR/css-box-4/#margin-physical)
    MarginRight,
    /// [§ 6.1 'margin-bottom'](https://www.w3.org/TR/css-box-4/#margin-physical)
    MarginBottom,
    /// [§ 6.1 'margin-left'](https://www.w3.org/TR/css-box-4/#margin-physical)
    MarginLeft,

    /// [§ 6.2 'padding'](https://www.w3.org/TR/css-box-4/#padding-shorthand)
    Padding,
    /// [§ 6.2 'padding-top'](https://www.w3.org/TR/css-box-4/#padding-physical)
    PaddingTop,
    /// [§ 6.2 'padding-right'](https://www.w3.org/TR/css-box-4/#padding-physical)
    PaddingRight,
    /// [§ 6.2 'padding-bottom'](https://www.w3.org/TR/css-box-4/#padding-physical)
    PaddingBottom,
    /// [§ 6.2 'padding-left'](https://www.w3.org/TR/css-box-4/#padding-physical)
    PaddingLeft,

    /// [§ 3.3 'border-width'](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    BorderWidth,
    /// [§ 3.3 'border-top-width'](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    BorderTopWidth,
    /// [§ 3.3 'border-right-width'](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    BorderRightWidth,
    /// [§ 3.3 'border-bottom-width'](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    BorderBottomWidth,
    /// [§ 3.3 'border-left-width'](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    BorderLeftWidth,
    /// [§ 3.1 'border-top-color'](https://www.w3.org/TR/css-backgrounds-3/#border-color)
    BorderTopColor,
    /// [§ 3.1 'border-right-color'](https://www.w3.org/TR/css-backgrounds-3/#border-color)
    BorderRightColor,
    /// [§ 3.1 'border-bottom-color'](https://www.w3.org/TR/css-backgrounds-3/#border-color)
    BorderBottomColor,
    /// [§ 3.1 'border-left-color'](https://www.w3.org/TR/css-backgrounds-3/#border-color)
    BorderLeftColor,

    /// [§ 5.1 'border-radius'](https://www.w3.org/TR/css-backgrounds-3/#border-radius)
    BorderRadius,
    /// [§ 5.1 'border-top-left-radius'](https://www.w3.org/TR/css-backgrounds-3/#border-radius)
    BorderTopLeftRadius,
    /// [§ 5.1 'border-top-right-radius'](https://www.w3.org/TR/css-backgrounds-3/#border-radius)
    BorderTopRightRadius,
    /// [§ 5.1 'border-bottom-right-radius'](https://www.w3.org/TR/css-backgrounds-3/#border-radius)
    BorderBottomRightRadius,
    /// [§ 5.1 'border-bottom-left-radius'](https://www.w3.org/TR/css-backgrounds-3/#border-radius)
    BorderBottomLeftRadius,

    /// [§ 10.2 'width'](https://www.w3.org/TR/CSS2/visudet.html#the-width-property)
    Width,
    /// [§ 10.4 'min-width'](https://www.w3.org/TR/CSS2/visudet.html#min-max-widths)
    MinWidth,
    /// [§ 10.4 'max-width'](https://www.w3.org/TR/CSS2/visudet.html#min-max-widths)
    MaxWidth,
    /// [§ 10.5 'height'](https://www.w3.org/TR/CSS2/visudet.html#the-height-property)
    Height,
    /// [§ 10.7 'min-height'](https://www.w3.org/TR/CSS2/visudet.html#min-max-heights)
    MinHeight,
    /// [§ 10.7 'max-height'](https://www.w3.org/TR/CSS2/visudet.html#min-max-heights)
    MaxHeight,
}

impl StyleProperty {
    /// The camelCase style key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// The box type this property belongs to, if any.
    ///
    /// Border colors belong to [`BoxType::Border`] even though they are not numeric.
    #[must_use]
    pub const fn box_type(self) -> Option<BoxType> {
        match self {
            Self::Margin
            | Self::MarginTop
            | Self::MarginRight
            | Self::MarginBottom
            | Self::MarginLeft => Some(BoxType::Margin),
            Self::Padding
            | Self::PaddingTop
            | Self::PaddingRight
            | Self::PaddingBottom
            | Self::PaddingLeft => Some(BoxType::Padding),
            Self::BorderWidth
            | Self::BorderTopWidth
            | Self::BorderRightWidth
            | Self::BorderBottomWidth
            | Self::BorderLeftWidth
            | Self::BorderTopColor
            | Self::BorderRightColor
            | Self::BorderBottomColor
            | Self::BorderLeftColor => Some(BoxType::Border),
            Self::BorderRadius
            | Self::BorderTopLeftRadius
            | Self::BorderTopRightRadius
            | Self::BorderBottomRightRadius
            | Self::BorderBottomLeftRadius => Some(BoxType::Radius),
            Self::Width
            | Self::MinWidth
            | Self::MaxWidth
            | Self::Height
            | Self::MinHeight
            | Self::MaxHeight => None,
        }
    }

    /// The axis this property sizes, if it is a dimension property.
    #[must_use]
    pub const fn axis(self) -> Option<Axis> {
        match self {
            Self::Width | Self::MinWidth | Self::MaxWidth => Some(Axis::Width),
            Self::Height | Self::MinHeight | Self::MaxHeight => Some(Axis::Height),
            _ => None,
        }
    }

    /// Whether this is the aggregate (shorthand) property of a box type.
    #[must_use]
    pub const fn is_aggregate(self) -> bool {
        matches!(
            self,
            Self::Margin | Self::Padding | Self::BorderWidth | Self::BorderRadius
        )
    }

    /// Whether this property holds a color rather than a length.
    #[must_use]
    pub const fn is_color(self) -> bool {
        matches!(
            self,
            Self::BorderTopColor
                | Self::BorderRightColor
                | Self::BorderBottomColor
                | Self::BorderLeftColor
        )
    }

    /// Editing bounds for the numeric control bound to this property.
    ///
    /// Colors have no numeric range and report `0.0..=0.0`.
    #[must_use]
    pub const fn bounds(self) -> RangeInclusive<f64> {
        if self.is_color() {
            0.0..=0.0
        } else {
            0.0..=MAX_MAGNITUDE
        }
    }

    /// Clamp a magnitude into this property's editing bounds.
    ///
    /// NaN clamps to the lower bound.
    #[must_use]
    pub fn clamp_magnitude(self, magnitude: f64) -> f64 {
        let bounds = self.bounds();
        if magnitude.is_nan() {
            return *bounds.start();
        }
        magnitude.clamp(*bounds.start(), *bounds.end())
    }
}

/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
///
/// The four box-model areas edited through an aggregate-plus-four control.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter, Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BoxType {
    /// Margin area, edited per side.
    Margin,
    /// Padding area, edited per side.
    Padding,
    /// Border widths per side, with per-side colors.
    Border,
    /// Border radius, edited per corner.
    Radius,
}

impl BoxType {
    /// All box types in display order.
    pub const ALL: [Self; 4] = [Self::Margin, Self::Padding, Self::Border, Self::Radius];

    /// The aggregate (shorthand) property for this box type.
    #[must_use]
    pub const fn aggregate(self) -> StyleProperty {
        match self {
            Self::Margin => StyleProperty::Margin,
            Self::Padding => StyleProperty::Padding,
            Self::Border => StyleProperty::BorderWidth,
            Self::Radius => StyleProperty::BorderRadius,
        }
    }

    /// The four edges of this box type in canonical order.
    ///
    /// Sides run top, right, bottom, left. Corners run top-left, top-right,
    /// bottom-right, bottom-left.
    #[must_use]
    pub const fn edges(self) -> [BoxEdge; 4] {
        match self {
            Self::Margin | Self::Padding | Self::Border => [
                BoxEdge::Side(Side::Top),
                BoxEdge::Side(Side::Right),
                BoxEdge::Side(Side::Bottom),
                BoxEdge::Side(Side::Left),
            ],
            Self::Radius => [
                BoxEdge::Corner(Corner::TopLeft),
                BoxEdge::Corner(Corner::TopRight),
                BoxEdge::Corner(Corner::BottomRight),
                BoxEdge::Corner(Corner::BottomLeft),
            ],
        }
    }

    /// The four edge properties in canonical order.
    #[must_use]
    pub const fn edge_properties(self) -> [StyleProperty; 4] {
        match self {
            Self::Margin => [
                StyleProperty::MarginTop,
                StyleProperty::MarginRight,
                StyleProperty::MarginBottom,
                StyleProperty::MarginLeft,
            ],
            Self::Padding => [
                StyleProperty::PaddingTop,
                StyleProperty::PaddingRight,
                StyleProperty::PaddingBottom,
                StyleProperty::PaddingLeft,
            ],
            Self::Border => [
                StyleProperty::BorderTopWidth,
                StyleProperty::BorderRightWidth,
                StyleProperty::BorderBottomWidth,
                StyleProperty::BorderLeftWidth,
            ],
            Self::Radius => [
                StyleProperty::BorderTopLeftRadius,
                StyleProperty::BorderTopRightRadius,
                StyleProperty::BorderBottomRightRadius,
                StyleProperty::BorderBottomLeftRadius,
            ],
        }
    }

    /// The property for one edge of this box type.
    ///
    /// Returns `None` when the edge kind does not belong to this box type
    /// (a corner on margin, a side on radius).
    #[must_use]
    pub const fn edge_property(self, edge: BoxEdge) -> Option<StyleProperty> {
        let index = match (self, edge) {
            (Self::Radius, BoxEdge::Corner(corner)) => corner as usize,
            (Self::Margin | Self::Padding | Self::Border, BoxEdge::Side(side)) => side as usize,
            _ => return None,
        };
        Some(self.edge_properties()[index])
    }
}

/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
///
/// Physical side of a box, in canonical top/right/bottom/left order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter, Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Top edge of the box
    Top = 0,
    /// Right edge of the box
    Right = 1,
    /// Bottom edge of the box
    Bottom = 2,
    /// Left edge of the box
    Left = 3,
}

impl Side {
    /// The `border{Side}Color` property for this side.
    #[must_use]
    pub const fn border_color(self) -> StyleProperty {
        match self {
            Self::Top => StyleProperty::BorderTopColor,
            Self::Right => StyleProperty::BorderRightColor,
            Self::Bottom => StyleProperty::BorderBottomColor,
            Self::Left => StyleProperty::BorderLeftColor,
        }
    }
}

/// [§ 5.1 'border-radius'](https://www.w3.org/TR/css-backgrounds-3/#border-radius)
///
/// Corner of a box, in the clockwise order used by the `border-radius` shorthand.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter, Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    /// Top-left corner
    TopLeft = 0,
    /// Top-right corner
    TopRight = 1,
    /// Bottom-right corner
    BottomRight = 2,
    /// Bottom-left corner
    BottomLeft = 3,
}

/// One editable edge of a box: a side for margin/padding/border, a corner for radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum BoxEdge {
    /// A physical side.
    Side(Side),
    /// A corner.
    Corner(Corner),
}

/// A sizing axis with a primary value and min/max bounds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter, Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Horizontal axis (`width`, `minWidth`, `maxWidth`).
    Width,
    /// Vertical axis (`height`, `minHeight`, `maxHeight`).
    Height,
}

impl Axis {
    /// Both axes.
    pub const ALL: [Self; 2] = [Self::Width, Self::Height];

    /// The primary size property.
    #[must_use]
    pub const fn primary(self) -> StyleProperty {
        match self {
            Self::Width => StyleProperty::Width,
            Self::Height => StyleProperty::Height,
        }
    }

    /// The minimum bound property.
    #[must_use]
    pub const fn min(self) -> StyleProperty {
        match self {
            Self::Width => StyleProperty::MinWidth,
            Self::Height => StyleProperty::MinHeight,
        }
    }

    /// The maximum bound property.
    #[must_use]
    pub const fn max(self) -> StyleProperty {
        match self {
            Self::Width => StyleProperty::MaxWidth,
            Self::Height => StyleProperty::MaxHeight,
        }
    }

    /// Primary, min, and max properties, in that order.
    #[must_use]
    pub const fn properties(self) -> [StyleProperty; 3] {
        [self.primary(), self.min(), self.max()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_property_names_are_camel_case() {
        assert_eq!(StyleProperty::Margin.as_str(), "margin");
        assert_eq!(StyleProperty::BorderTopWidth.as_str(), "borderTopWidth");
        assert_eq!(
            StyleProperty::BorderBottomRightRadius.as_str(),
            "borderBottomRightRadius"
        );
        assert_eq!(StyleProperty::MinHeight.to_string(), "minHeight");
    }

    #[test]
    fn test_property_names_parse_back() {
        for property in StyleProperty::iter() {
            assert_eq!(StyleProperty::from_str(property.as_str()), Ok(property));
        }
    }

    #[test]
    fn test_edge_properties_belong_to_their_box_type() {
        for box_type in BoxType::ALL {
            assert_eq!(box_type.aggregate().box_type(), Some(box_type));
            assert!(box_type.aggregate().is_aggregate());
            for (edge, property) in box_type.edges().into_iter().zip(box_type.edge_properties()) {
                assert_eq!(box_type.edge_property(edge), Some(property));
                assert_eq!(property.box_type(), Some(box_type));
                assert!(!property.is_aggregate());
            }
        }
    }

    #[test]
    fn test_mismatched_edge_kind_has_no_property() {
        assert_eq!(
            BoxType::Margin.edge_property(BoxEdge::Corner(Corner::TopLeft)),
            None
        );
        assert_eq!(BoxType::Radius.edge_property(BoxEdge::Side(Side::Top)), None);
    }

    #[test]
    fn test_clamp_magnitude() {
        assert_eq!(StyleProperty::Padding.clamp_magnitude(-4.0), 0.0);
        assert_eq!(StyleProperty::Width.clamp_magnitude(20_000.0), MAX_MAGNITUDE);
        assert_eq!(StyleProperty::MarginTop.clamp_magnitude(12.5), 12.5);
        assert_eq!(StyleProperty::Height.clamp_magnitude(f64::NAN), 0.0);
    }
}
