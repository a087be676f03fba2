//! Width/height state with min/max bounds and sizing modes.
//!
//! [§ 10.2 Content width](https://www.w3.org/TR/CSS2/visudet.html#the-width-property)
//! [§ 10.4 Minimum and maximum widths](https://www.w3.org/TR/CSS2/visudet.html#min-max-widths)

use std::collections::BTreeMap;

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

use crate::property::{Axis, StyleProperty};
use crate::snapshot::StyleSnapshot;
use crate::value::{ParsedValue, parse};

/// How an element is sized along one axis.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize,
)]
#[strum(ascii_case_insensitive)]
pub enum SizingMode {
    /// Size to content (`auto`).
    Hug,
    /// An explicit length.
    Fixed,
    /// Match the containing space.
    Fill,
}

/// Editable state of one dimension property.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionState {
    /// Numeric magnitude, or `None` when unset.
    pub magnitude: Option<f64>,
    /// Unit suffix.
    pub unit: String,
    /// `"--"` when unset, else `"{magnitude}{unit}"`.
    pub display_value: String,
    /// Sizing mode inferred from the value.
    pub sizing_mode: SizingMode,
}

impl DimensionState {
    /// Build the state for the primary axis value.
    ///
    /// Unset is Hug; exactly `100%` is Fill; any other length is Fixed.
    #[must_use]
    pub fn primary(parsed: ParsedValue) -> Self {
        let sizing_mode = match parsed.magnitude {
            None => SizingMode::Hug,
            Some(m) if m == 100.0 && parsed.unit == "%" => SizingMode::Fill,
            Some(_) => SizingMode::Fixed,
        };
        Self::with_mode(parsed, sizing_mode)
    }

    /// Build the state for a min/max bound. Bounds are always Fixed.
    #[must_use]
    pub fn bound(parsed: ParsedValue) -> Self {
        Self::with_mode(parsed, SizingMode::Fixed)
    }

    fn with_mode(parsed: ParsedValue, sizing_mode: SizingMode) -> Self {
        let display_value = parsed.display();
        Self {
            magnitude: parsed.magnitude,
            unit: parsed.unit,
            display_value,
            sizing_mode,
        }
    }
}

/// State for one axis: the primary value plus its min and max bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionStateMap {
    /// The axis this map describes.
    pub axis: Axis,
    entries: BTreeMap<StyleProperty, DimensionState>,
}

impl DimensionStateMap {
    /// Derive the state for `axis` from `snapshot`.
    ///
    /// The author-defined value wins over the computed one, so a literal
    /// `width: auto` reads as Hug even though its computed width is in pixels.
    #[must_use]
    pub fn derive(snapshot: &StyleSnapshot, axis: Axis) -> Self {
        let read = |property| {
            snapshot
                .defined(property)
                .or_else(|| snapshot.computed(property))
                .map(parse)
                .unwrap_or_default()
        };

        let mut entries = BTreeMap::new();
        let _ = entries.insert(axis.primary(), DimensionState::primary(read(axis.primary())));
        let _ = entries.insert(axis.min(), DimensionState::bound(read(axis.min())));
        let _ = entries.insert(axis.max(), DimensionState::bound(read(axis.max())));
        Self { axis, entries }
    }

    /// Whether `property` is represented in this map.
    #[must_use]
    pub fn contains(&self, property: StyleProperty) -> bool {
        self.entries.contains_key(&property)
    }

    /// The state for `property`.
    #[must_use]
    pub fn get(&self, property: StyleProperty) -> Option<&DimensionState> {
        self.entries.get(&property)
    }

    /// The primary axis value's state.
    #[must_use]
    pub fn primary(&self) -> Option<&DimensionState> {
        self.entries.get(&self.axis.primary())
    }

    /// Entries as primary, min, max.
    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &DimensionState)> {
        self.axis
            .properties()
            .into_iter()
            .filter_map(|p| self.entries.get(&p).map(|state| (p, state)))
    }
}
