//! Point-in-time style snapshot of the current selection.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::property::StyleProperty;

/// Errors from loading snapshot or geometry input.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The JSON document could not be decoded.
    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A batch of property writes, applied atomically by the style sink.
pub type StyleUpdate = BTreeMap<StyleProperty, String>;

/// Computed and author-defined style values for one selected element.
///
/// Snapshots are replaced wholesale when the selection or its styles change.
/// They are never mutated in place; [`StyleSnapshot::with_updates`] returns a
/// new snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSnapshot {
    /// Computed values keyed by camelCase property name.
    #[serde(default)]
    pub computed: HashMap<String, String>,
    /// Author-set values, where they differ from computed ones (e.g. a literal `auto`).
    #[serde(default)]
    pub defined: HashMap<String, String>,
}

impl StyleSnapshot {
    /// An empty snapshot (no properties set).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] if the document is not a valid snapshot.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builder: set a computed value.
    #[must_use]
    pub fn with_computed(mut self, property: StyleProperty, value: &str) -> Self {
        let _ = self
            .computed
            .insert(property.as_str().to_string(), value.to_string());
        self
    }

    /// Builder: set an author-defined value.
    #[must_use]
    pub fn with_defined(mut self, property: StyleProperty, value: &str) -> Self {
        let _ = self
            .defined
            .insert(property.as_str().to_string(), value.to_string());
        self
    }

    /// The computed value of `property`, treating an empty string as absent.
    #[must_use]
    pub fn computed(&self, property: StyleProperty) -> Option<&str> {
        self.computed
            .get(property.as_str())
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// The author-defined value of `property`, treating an empty string as absent.
    #[must_use]
    pub fn defined(&self, property: StyleProperty) -> Option<&str> {
        self.defined
            .get(property.as_str())
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// A new snapshot with `update` written to both the computed and defined maps.
    #[must_use]
    pub fn with_updates(&self, update: &StyleUpdate) -> Self {
        let mut next = self.clone();
        for (property, value) in update {
            let key = property.as_str().to_string();
            let _ = next.computed.insert(key.clone(), value.clone());
            let _ = next.defined.insert(key, value.clone());
        }
        next
    }
}
