//! Turns logical edits into style writes with the correct cascade.
//!
//! The dispatcher owns the derived state for the current selection and a
//! [`StyleSink`] that applies writes. State is rebuilt wholesale from each
//! new snapshot. Edits that target a property the live state does not hold
//! are dropped silently; they are late updates racing a selection change.

use std::collections::BTreeMap;

use serde::Serialize;

use boxkit_common::warning::clear_warnings;

use crate::box_state::BoxStateMap;
use crate::classify::{Classification, Pictogram, classify, pictogram};
use crate::dimension::{DimensionStateMap, SizingMode};
use crate::geometry::Geometry;
use crate::property::{Axis, BoxEdge, BoxType, StyleProperty};
use crate::resolve::resolve_sizing_mode;
use crate::snapshot::{StyleSnapshot, StyleUpdate};
use crate::value::{format, normalize};

/// The external collaborator that applies style writes.
pub trait StyleSink {
    /// Write a single property.
    fn update(&mut self, property: StyleProperty, value: &str);

    /// Write a batch of properties as one atomic unit.
    fn update_multiple(&mut self, update: &StyleUpdate);
}

/// One write emitted by the dispatcher, as seen by an [`UpdateLog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "properties", rename_all = "camelCase")]
pub enum EmittedUpdate {
    /// A single-property write.
    Single(StyleUpdate),
    /// An atomic batch.
    Batch(StyleUpdate),
}

impl EmittedUpdate {
    /// The written properties and values.
    #[must_use]
    pub const fn properties(&self) -> &StyleUpdate {
        match self {
            Self::Single(update) | Self::Batch(update) => update,
        }
    }
}

/// A [`StyleSink`] that records every write in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateLog {
    /// Writes in emission order.
    pub updates: Vec<EmittedUpdate>,
}

impl UpdateLog {
    /// An empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return all recorded writes.
    pub fn drain(&mut self) -> Vec<EmittedUpdate> {
        std::mem::take(&mut self.updates)
    }

    /// Apply every recorded write to `snapshot`, in order.
    #[must_use]
    pub fn replay(&self, snapshot: &StyleSnapshot) -> StyleSnapshot {
        self.updates
            .iter()
            .fold(snapshot.clone(), |next, update| {
                next.with_updates(update.properties())
            })
    }
}

impl StyleSink for UpdateLog {
    fn update(&mut self, property: StyleProperty, value: &str) {
        let mut update = StyleUpdate::new();
        let _ = update.insert(property, value.to_string());
        self.updates.push(EmittedUpdate::Single(update));
    }

    fn update_multiple(&mut self, update: &StyleUpdate) {
        self.updates.push(EmittedUpdate::Batch(update.clone()));
    }
}

/// A logical edit, as produced by a control.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    /// Set the aggregate and all four edges of a box type.
    Aggregate {
        /// Box type being edited.
        box_type: BoxType,
        /// New value for every edge.
        value: String,
    },
    /// Set one side or corner.
    Individual {
        /// Box type being edited.
        box_type: BoxType,
        /// Edge being edited.
        edge: BoxEdge,
        /// New value.
        value: String,
    },
    /// Re-emit a property's magnitude under a new unit.
    Unit {
        /// Property being edited.
        property: StyleProperty,
        /// New unit suffix.
        unit: String,
    },
    /// Set one dimension property.
    Dimension {
        /// Width, height, or one of their bounds.
        property: StyleProperty,
        /// New value.
        value: String,
    },
    /// Switch a dimension property's sizing mode.
    SizingMode {
        /// Width, height, or one of their bounds.
        property: StyleProperty,
        /// Requested mode.
        mode: SizingMode,
    },
}

/// Owns derived state for the current selection and dispatches edits.
#[derive(Debug)]
pub struct UpdateDispatcher<S: StyleSink> {
    sink: S,
    snapshot: StyleSnapshot,
    geometry: Option<Geometry>,
    boxes: BTreeMap<BoxType, BoxStateMap>,
    dimensions: BTreeMap<Axis, DimensionStateMap>,
}

impl<S: StyleSink> UpdateDispatcher<S> {
    /// A dispatcher with no selection. Every edit is dropped until
    /// [`UpdateDispatcher::set_snapshot`] is called.
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            snapshot: StyleSnapshot::default(),
            geometry: None,
            boxes: BTreeMap::new(),
            dimensions: BTreeMap::new(),
        }
    }

    /// Replace the current snapshot and rebuild every state map from it.
    pub fn set_snapshot(&mut self, snapshot: StyleSnapshot) {
        self.boxes = BoxType::ALL
            .into_iter()
            .map(|box_type| (box_type, BoxStateMap::derive(&snapshot, box_type)))
            .collect();
        self.dimensions = Axis::ALL
            .into_iter()
            .map(|axis| (axis, DimensionStateMap::derive(&snapshot, axis)))
            .collect();
        self.snapshot = snapshot;
        tracing::trace!("rebuilt style state from new snapshot");
    }

    /// Replace the measured geometry used for sizing-mode changes.
    pub const fn set_geometry(&mut self, geometry: Geometry) {
        self.geometry = Some(geometry);
    }

    /// Discard all state for the current selection.
    pub fn clear_selection(&mut self) {
        self.snapshot = StyleSnapshot::default();
        self.geometry = None;
        self.boxes.clear();
        self.dimensions.clear();
        clear_warnings();
    }

    /// The current snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> &StyleSnapshot {
        &self.snapshot
    }

    /// The sink receiving writes.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the sink.
    pub const fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the dispatcher, returning its sink.
    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// The derived state for `box_type`, if a selection is active.
    #[must_use]
    pub fn box_state(&self, box_type: BoxType) -> Option<&BoxStateMap> {
        self.boxes.get(&box_type)
    }

    /// The derived state for `axis`, if a selection is active.
    #[must_use]
    pub fn dimension_state(&self, axis: Axis) -> Option<&DimensionStateMap> {
        self.dimensions.get(&axis)
    }

    /// The aggregate classification for `box_type`.
    #[must_use]
    pub fn classification(&self, box_type: BoxType) -> Option<Classification> {
        self.box_state(box_type)
            .map(|state| classify(state, &self.snapshot))
    }

    /// The aggregate pictogram for `box_type`.
    #[must_use]
    pub fn pictogram(&self, box_type: BoxType) -> Option<Pictogram> {
        self.box_state(box_type)
            .map(|state| pictogram(box_type, state.edge_magnitudes()))
    }

    /// Dispatch a logical edit.
    pub fn apply(&mut self, edit: &Edit) {
        match edit {
            Edit::Aggregate { box_type, value } => self.apply_aggregate_change(*box_type, value),
            Edit::Individual {
                box_type,
                edge,
                value,
            } => self.apply_individual_change(*box_type, *edge, value),
            Edit::Unit { property, unit } => self.apply_unit_change(*property, unit),
            Edit::Dimension { property, value } => self.apply_dimension_change(*property, value),
            Edit::SizingMode { property, mode } => self.apply_sizing_mode_change(*property, *mode),
        }
    }

    /// Set the aggregate and all four edges of `box_type` to `value` in one batch.
    ///
    /// This overwrites any mixed per-edge values.
    pub fn apply_aggregate_change(&mut self, box_type: BoxType, value: &str) {
        if !self.boxes.contains_key(&box_type) {
            drop_update(box_type.aggregate(), "no live state for box type");
            return;
        }

        let value = normalize(value);
        let update: StyleUpdate = std::iter::once(box_type.aggregate())
            .chain(box_type.edge_properties())
            .map(|property| (property, value.clone()))
            .collect();

        tracing::trace!(box_type = %box_type, value = %value, "cascading aggregate change");
        self.sink.update_multiple(&update);
    }

    /// Set one side or corner. The aggregate is not written; its label is
    /// recomputed by the classifier once the snapshot reflects the change.
    pub fn apply_individual_change(&mut self, box_type: BoxType, edge: BoxEdge, value: &str) {
        let Some(property) = box_type.edge_property(edge) else {
            drop_update(box_type.aggregate(), "edge does not belong to box type");
            return;
        };
        let live = self
            .boxes
            .get(&box_type)
            .is_some_and(|state| state.contains(property));
        if !live {
            drop_update(property, "no live state for property");
            return;
        }
        self.write(property, &normalize(value));
    }

    /// Re-emit `property`'s current magnitude under `unit`.
    ///
    /// No-op when the property has no numeric magnitude or `unit` is not a
    /// unit suffix. The result is normalized like any other write, so an
    /// unsupported unit is warned about once and still written.
    pub fn apply_unit_change(&mut self, property: StyleProperty, unit: &str) {
        let unit = unit.trim();
        if unit.is_empty() || !unit.chars().all(|c| c.is_ascii_alphabetic() || c == '%') {
            drop_update(property, "not a unit suffix");
            return;
        }
        let Some(magnitude) = self.live_magnitude(property) else {
            drop_update(property, "no numeric magnitude to re-unit");
            return;
        };
        self.write(property, &normalize(&format(Some(magnitude), unit)));
    }

    /// Set one width/height or min/max property. Dimensions never cascade.
    pub fn apply_dimension_change(&mut self, property: StyleProperty, value: &str) {
        if !self.has_dimension(property) {
            drop_update(property, "no live dimension state for property");
            return;
        }
        self.write(property, &normalize(value));
    }

    /// Switch `property` to `mode`, writing the resolved value.
    ///
    /// Fixed and Fill need measured geometry; without it, or when Fixed finds a
    /// zero measured size, the edit is dropped.
    pub fn apply_sizing_mode_change(&mut self, property: StyleProperty, mode: SizingMode) {
        if !self.has_dimension(property) {
            drop_update(property, "no live dimension state for property");
            return;
        }
        let geometry = match (mode, self.geometry) {
            (_, Some(geometry)) => geometry,
            (SizingMode::Hug, None) => Geometry::default(),
            (SizingMode::Fixed | SizingMode::Fill, None) => {
                drop_update(property, "no measured geometry");
                return;
            }
        };
        let Some(value) = resolve_sizing_mode(mode, property, &geometry) else {
            drop_update(property, "no measured size to resolve");
            return;
        };
        tracing::trace!(property = %property, mode = %mode, value = %value, "resolved sizing mode");
        self.write(property, &normalize(&value));
    }

    fn write(&mut self, property: StyleProperty, value: &str) {
        tracing::trace!(property = %property, value, "dispatching style update");
        self.sink.update(property, value);
    }

    fn has_dimension(&self, property: StyleProperty) -> bool {
        property
            .axis()
            .and_then(|axis| self.dimensions.get(&axis))
            .is_some_and(|state| state.contains(property))
    }

    fn live_magnitude(&self, property: StyleProperty) -> Option<f64> {
        if let Some(axis) = property.axis() {
            return self.dimensions.get(&axis)?.get(property)?.magnitude;
        }
        let box_type = property.box_type()?;
        self.boxes.get(&box_type)?.length(property)?.magnitude
    }
}

fn drop_update(property: StyleProperty, reason: &str) {
    tracing::debug!(property = %property, reason, "dropping style update");
}
