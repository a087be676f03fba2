//! Box-model style synchronization for visual design editors.
//!
//! # Scope
//!
//! This crate keeps numeric box-model controls consistent with one
//! authoritative style snapshot of the selected element:
//! - **Values** ([CSS Values Level 4](https://www.w3.org/TR/css-values-4/))
//!   - `<number><unit>` parsing and formatting, unset fallbacks
//!
//! - **Derived state**
//!   - Margin, padding, border, and radius maps with aggregate fallback
//!   - Width and height with min/max bounds and Hug/Fixed/Fill modes
//!
//! - **Classification**
//!   - Unset / Uniform / Mixed aggregate labels
//!   - `auto` margins and the full-radius sentinel
//!   - Edge-presence pictograms
//!
//! - **Dispatch**
//!   - Aggregate-to-edge cascades as atomic batches
//!   - Per-edge, unit, dimension, and sizing-mode writes
//!   - Silent drop of edits that race a selection change
//!
//! # Not In Scope
//!
//! - Cascade and specificity resolution
//! - Applying writes to a document, undo history
//! - Non-box-model properties (color, typography)

/// Aggregate and per-edge state per box type.
pub mod box_state;
/// Uniform/mixed classification and pictograms.
pub mod classify;
/// Width/height state and sizing modes.
pub mod dimension;
/// Edit dispatch and the style sink seam.
pub mod dispatch;
/// Measured element and parent rectangles.
pub mod geometry;
/// The fixed table of box-model and dimension properties.
pub mod property;
/// Sizing-mode resolution against measured geometry.
pub mod resolve;
/// Style snapshots and update batches.
pub mod snapshot;
/// Numeric value parsing and formatting.
pub mod value;

// Re-exports for convenience
pub use box_state::{BoxState, BoxStateMap, DEFAULT_BORDER_COLOR};
pub use classify::{
    Classification, CornerIcon, EdgeAgreement, MIXED_LABEL, Pictogram, RADIUS_FULL, SideIcon,
    classify, classify_edges, pictogram,
};
pub use dimension::{DimensionState, DimensionStateMap, SizingMode};
pub use dispatch::{Edit, EmittedUpdate, StyleSink, UpdateDispatcher, UpdateLog};
pub use geometry::{Geometry, Rect};
pub use property::{Axis, BoxEdge, BoxType, Corner, Side, StyleProperty};
pub use resolve::resolve_sizing_mode;
pub use snapshot::{SnapshotError, StyleSnapshot, StyleUpdate};
pub use value::{
    CLEARED_VALUE, DEFAULT_UNIT, ParsedValue, STYLE_UNITS, UNSET_DISPLAY, format, normalize, parse,
};
