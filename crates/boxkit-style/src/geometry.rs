//! Measured rectangles for the selected element and its parent.
//!
//! [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)

use serde::{Deserialize, Serialize};

use crate::property::Axis;
use crate::snapshot::SnapshotError;

/// A rectangle positioned in 2D space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Horizontal position of the top-left corner.
    pub x: f32,
    /// Vertical position of the top-left corner.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// A rectangle at the origin with the given size.
    #[must_use]
    pub const fn sized(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    /// The extent of this rectangle along `axis`.
    #[must_use]
    pub const fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Width => self.width,
            Axis::Height => self.height,
        }
    }
}

/// Layout facts the sizing-mode resolver needs, refreshed on layout change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// The element's measured border box.
    pub element: Rect,
    /// The parent's measured border box, if the element has a parent.
    #[serde(default)]
    pub parent: Option<Rect>,
    /// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
    ///
    /// Whether the containing block gives percentage sizes a definite basis.
    #[serde(default)]
    pub percent_sizing: bool,
}

impl Geometry {
    /// Geometry for an element with no known parent.
    #[must_use]
    pub const fn element(element: Rect) -> Self {
        Self {
            element,
            parent: None,
            percent_sizing: false,
        }
    }

    /// Builder: set the parent rectangle.
    #[must_use]
    pub const fn with_parent(mut self, parent: Rect) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Builder: mark the containing block as percentage-capable.
    #[must_use]
    pub const fn with_percent_sizing(mut self, percent_sizing: bool) -> Self {
        self.percent_sizing = percent_sizing;
        self
    }

    /// Decode geometry from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] if the document is not valid geometry.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}
