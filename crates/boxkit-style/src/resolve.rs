//! Sizing-mode resolution for width, height, and their bounds.
//!
//! [§ 10.2 Content width](https://www.w3.org/TR/CSS2/visudet.html#the-width-property)
//!
//! A pure function of (mode, property, geometry). It never touches layout
//! state; the dispatcher normalizes and writes the result.

use crate::dimension::SizingMode;
use crate::geometry::Geometry;
use crate::property::{Axis, StyleProperty};
use crate::value::format;

/// Value assigned for [`SizingMode::Hug`].
pub const HUG_VALUE: &str = "auto";

/// Value assigned for [`SizingMode::Fill`] when percentages resolve.
pub const FILL_PERCENT_VALUE: &str = "100%";

/// Compute the concrete value for switching `property` to `mode`.
///
/// - Hug resolves to `auto`.
/// - Fixed freezes the element's measured size on the property's axis, in
///   whole pixels. A size that rounds to zero means the element was not laid
///   out, so nothing is resolved rather than a degenerate `0px`.
/// - Fill resolves to `100%` when the containing block supports percentage
///   sizing (or no parent was measured), else to the parent's measured size
///   in pixels.
///
/// Returns `None` when `property` is not a dimension property, or when Fixed
/// has no non-zero measured size to freeze.
#[must_use]
pub fn resolve_sizing_mode(
    mode: SizingMode,
    property: StyleProperty,
    geometry: &Geometry,
) -> Option<String> {
    let axis = property.axis()?;
    let value = match mode {
        SizingMode::Hug => HUG_VALUE.to_string(),
        SizingMode::Fixed => {
            let extent = geometry.element.extent(axis).round();
            if extent.is_nan() || extent <= 0.0 {
                return None;
            }
            pixels(extent)
        }
        SizingMode::Fill => fill_value(axis, geometry),
    };
    Some(value)
}

/// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
///
/// "Percentages are always relative to another quantity." Without a
/// percentage-capable containing block, fall back to the parent's own size.
fn fill_value(axis: Axis, geometry: &Geometry) -> String {
    match geometry.parent {
        Some(parent) if !geometry.percent_sizing => pixels(parent.extent(axis)),
        _ => FILL_PERCENT_VALUE.to_string(),
    }
}

fn pixels(extent: f32) -> String {
    format(Some(f64::from(extent.round())), "px")
}
