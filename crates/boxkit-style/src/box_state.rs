//! Per-side and per-corner editable state for one box type.
//!
//! [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
//!
//! A [`BoxStateMap`] is a pure projection of a [`StyleSnapshot`]. It is
//! rebuilt from scratch on every snapshot change and never patched.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::property::{BoxType, Side, StyleProperty};
use crate::snapshot::StyleSnapshot;
use crate::value::{ParsedValue, parse};

/// Color shown for a border side with no computed color.
pub const DEFAULT_BORDER_COLOR: &str = "#000000";

/// Editable state of one numeric box-model property.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxState {
    /// Numeric magnitude, or `None` when unset.
    pub magnitude: Option<f64>,
    /// Unit suffix.
    pub unit: String,
    /// `"--"` when unset, else `"{magnitude}{unit}"`.
    pub display_value: String,
}

impl BoxState {
    /// The magnitude, with unset treated as zero.
    #[must_use]
    pub fn magnitude_or_zero(&self) -> f64 {
        self.magnitude.unwrap_or(0.0)
    }
}

impl From<ParsedValue> for BoxState {
    fn from(parsed: ParsedValue) -> Self {
        let display_value = parsed.display();
        Self {
            magnitude: parsed.magnitude,
            unit: parsed.unit,
            display_value,
        }
    }
}

/// The aggregate plus decomposed state for one box type.
///
/// Margin, padding, and radius maps hold five entries. Border maps hold
/// nine: the aggregate width, four side widths, and four side colors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxStateMap {
    /// The box type this map describes.
    pub box_type: BoxType,
    aggregate: BoxState,
    edges: BTreeMap<StyleProperty, BoxState>,
    colors: BTreeMap<StyleProperty, String>,
}

impl BoxStateMap {
    /// Derive the state map for `box_type` from `snapshot`.
    ///
    /// Each side or corner reads its own computed value and falls back to the
    /// aggregate when absent, so `margin: 8px` alone shows `8px` on every side.
    #[must_use]
    pub fn derive(snapshot: &StyleSnapshot, box_type: BoxType) -> Self {
        let aggregate = snapshot
            .computed(box_type.aggregate())
            .map(parse)
            .unwrap_or_default();

        let mut edges = BTreeMap::new();
        for property in box_type.edge_properties() {
            let state = snapshot
                .computed(property)
                .map_or_else(|| aggregate.clone(), parse);
            let _ = edges.insert(property, BoxState::from(state));
        }

        let mut colors = BTreeMap::new();
        if box_type == BoxType::Border {
            for side in [Side::Top, Side::Right, Side::Bottom, Side::Left] {
                let property = side.border_color();
                let color = snapshot
                    .computed(property)
                    .unwrap_or(DEFAULT_BORDER_COLOR)
                    .to_string();
                let _ = colors.insert(property, color);
            }
        }

        Self {
            box_type,
            aggregate: aggregate.into(),
            edges,
            colors,
        }
    }

    /// Number of entries (5, or 9 for border).
    #[must_use]
    pub fn len(&self) -> usize {
        1 + self.edges.len() + self.colors.len()
    }

    /// Always `false`; a derived map holds at least its aggregate.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Whether `property` is represented in this map.
    #[must_use]
    pub fn contains(&self, property: StyleProperty) -> bool {
        property == self.box_type.aggregate()
            || self.edges.contains_key(&property)
            || self.colors.contains_key(&property)
    }

    /// The numeric state for `property` (aggregate, side, or corner).
    #[must_use]
    pub fn length(&self, property: StyleProperty) -> Option<&BoxState> {
        if property == self.box_type.aggregate() {
            Some(&self.aggregate)
        } else {
            self.edges.get(&property)
        }
    }

    /// The color for a border side property.
    #[must_use]
    pub fn color(&self, property: StyleProperty) -> Option<&str> {
        self.colors.get(&property).map(String::as_str)
    }

    /// The aggregate property's state.
    #[must_use]
    pub const fn aggregate(&self) -> &BoxState {
        &self.aggregate
    }

    /// The four side/corner magnitudes in canonical order, unset as zero.
    #[must_use]
    pub fn edge_magnitudes(&self) -> [f64; 4] {
        self.box_type
            .edge_properties()
            .map(|p| self.edges.get(&p).map_or(0.0, BoxState::magnitude_or_zero))
    }

    /// Side/corner states in canonical order.
    pub fn edges(&self) -> impl Iterator<Item = (StyleProperty, &BoxState)> {
        self.box_type
            .edge_properties()
            .into_iter()
            .filter_map(|p| self.edges.get(&p).map(|state| (p, state)))
    }

    /// Border side colors in property order (empty unless border).
    pub fn colors(&self) -> impl Iterator<Item = (StyleProperty, &str)> {
        self.colors.iter().map(|(p, c)| (*p, c.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_state_display_value() {
        let state = BoxState::from(parse("12px"));
        assert_eq!(state.display_value, "12px");
        let unset = BoxState::from(parse(""));
        assert_eq!(unset.display_value, "--");
        assert_eq!(unset.magnitude_or_zero(), 0.0);
    }
}
