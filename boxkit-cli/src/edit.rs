//! Command-line edit syntax.
//!
//! ```text
//! padding=12px            aggregate change
//! paddingTop=4px          individual change
//! width=120px             dimension change
//! marginLeft:unit=rem     unit change
//! maxWidth:mode=fill      sizing-mode change
//! ```

use std::str::FromStr;

use boxkit_style::{Edit, SizingMode, StyleProperty};

/// Errors from parsing one edit argument.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditParseError {
    /// No `=` separating the target from the value.
    #[error("expected <property>=<value>, got '{0}'")]
    MissingValue(String),
    /// The property name is not in the box-model table.
    #[error("unknown property '{0}'")]
    UnknownProperty(String),
    /// The text after `:` is neither `unit` nor `mode`.
    #[error("unknown qualifier '{qualifier}' on '{property}' (expected 'unit' or 'mode')")]
    UnknownQualifier {
        /// Property the qualifier was attached to.
        property: StyleProperty,
        /// The unrecognized qualifier.
        qualifier: String,
    },
    /// Colors are shown but never edited by these controls.
    #[error("'{0}' is a color property and cannot be edited here")]
    ColorProperty(StyleProperty),
    /// Sizing modes only apply to width, height, and their bounds.
    #[error("'{0}' is not a dimension property")]
    NotADimension(StyleProperty),
    /// The requested sizing mode is not hug, fixed, or fill.
    #[error("unknown sizing mode '{0}' (expected hug, fixed, or fill)")]
    UnknownSizingMode(String),
    /// A unit change with nothing after `=`.
    #[error("empty unit for '{0}'")]
    EmptyUnit(StyleProperty),
}

/// Parse one edit argument into a dispatcher [`Edit`].
///
/// # Errors
///
/// Returns an [`EditParseError`] describing the first malformed part.
pub fn parse_edit(arg: &str) -> Result<Edit, EditParseError> {
    let Some((target, value)) = arg.split_once('=') else {
        return Err(EditParseError::MissingValue(arg.to_string()));
    };
    let value = value.trim();

    let (name, qualifier) = match target.split_once(':') {
        Some((name, qualifier)) => (name.trim(), Some(qualifier.trim())),
        None => (target.trim(), None),
    };
    let property = StyleProperty::from_str(name)
        .map_err(|_| EditParseError::UnknownProperty(name.to_string()))?;
    if property.is_color() {
        return Err(EditParseError::ColorProperty(property));
    }

    match qualifier {
        None => value_edit(property, value),
        Some("unit") if value.is_empty() => Err(EditParseError::EmptyUnit(property)),
        Some("unit") => Ok(Edit::Unit {
            property,
            unit: value.to_string(),
        }),
        Some("mode") => {
            if property.axis().is_none() {
                return Err(EditParseError::NotADimension(property));
            }
            let mode = SizingMode::from_str(value)
                .map_err(|_| EditParseError::UnknownSizingMode(value.to_string()))?;
            Ok(Edit::SizingMode { property, mode })
        }
        Some(other) => Err(EditParseError::UnknownQualifier {
            property,
            qualifier: other.to_string(),
        }),
    }
}

/// Route `property=value` by the kind of property named.
fn value_edit(property: StyleProperty, value: &str) -> Result<Edit, EditParseError> {
    let value = value.to_string();
    if property.axis().is_some() {
        return Ok(Edit::Dimension { property, value });
    }

    let box_type = property
        .box_type()
        .ok_or_else(|| EditParseError::UnknownProperty(property.to_string()))?;
    if property.is_aggregate() {
        return Ok(Edit::Aggregate { box_type, value });
    }

    box_type
        .edge_properties()
        .into_iter()
        .zip(box_type.edges())
        .find_map(|(candidate, edge)| (candidate == property).then_some(edge))
        .map(|edge| Edit::Individual {
            box_type,
            edge,
            value,
        })
        .ok_or_else(|| EditParseError::UnknownProperty(property.to_string()))
}
