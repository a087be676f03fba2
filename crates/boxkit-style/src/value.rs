//! Numeric style values and their units
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//!
//! The box-model controls only deal in `<number><unit>` pairs. Anything else
//! (keywords, empty strings, the `--` placeholder) parses as an unset
//! magnitude. Callers that care about a keyword such as `auto` read it from
//! the snapshot directly.

use serde::Serialize;

use boxkit_common::warning::warn_once;

/// Unit assumed when a value has no unit suffix, or no value at all.
pub const DEFAULT_UNIT: &str = "px";

/// Display text for a property with no numeric magnitude.
pub const UNSET_DISPLAY: &str = "--";

/// Value written to clear a property. The unset placeholder is never written.
pub const CLEARED_VALUE: &str = "";

/// Units offered by the numeric controls.
///
/// [§ 5 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
/// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
pub const STYLE_UNITS: [&str; 6] = ["px", "%", "rem", "em", "vh", "vw"];

/// A style value split into magnitude and unit.
///
/// `unit` carries no meaning when `magnitude` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedValue {
    /// The numeric prefix, or `None` when the value is unset or a keyword.
    pub magnitude: Option<f64>,
    /// The unit suffix, lowercased. Defaults to [`DEFAULT_UNIT`].
    pub unit: String,
}

impl ParsedValue {
    /// An unset value with the default unit.
    #[must_use]
    pub fn unset() -> Self {
        Self {
            magnitude: None,
            unit: DEFAULT_UNIT.to_string(),
        }
    }

    /// A numeric value.
    #[must_use]
    pub fn new(magnitude: f64, unit: &str) -> Self {
        Self {
            magnitude: Some(magnitude),
            unit: unit.to_string(),
        }
    }

    /// Whether a numeric magnitude is present.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.magnitude.is_some()
    }

    /// Format back into a style value string (`"--"` when unset).
    #[must_use]
    pub fn display(&self) -> String {
        format(self.magnitude, &self.unit)
    }
}

impl Default for ParsedValue {
    fn default() -> Self {
        Self::unset()
    }
}

/// Parse a raw style value into a magnitude and unit.
///
/// Never fails. A value with no numeric prefix (`""`, `"--"`, `"auto"`,
/// `"none"`) yields an unset magnitude and [`DEFAULT_UNIT`]. Only the first
/// component is read, so the shorthand `"8px 16px"` parses as `8px`.
#[must_use]
pub fn parse(raw: &str) -> ParsedValue {
    let trimmed = raw.trim();
    let number_len = numeric_prefix_len(trimmed);
    if number_len == 0 {
        return ParsedValue::unset();
    }

    let Ok(magnitude) = trimmed[..number_len].parse::<f64>() else {
        return ParsedValue::unset();
    };
    if !magnitude.is_finite() {
        return ParsedValue::unset();
    }

    let rest = &trimmed[number_len..];
    let unit_len = rest
        .find(|c: char| !(c.is_ascii_alphabetic() || c == '%'))
        .unwrap_or(rest.len());
    let unit = rest[..unit_len].to_ascii_lowercase();

    if unit.is_empty() {
        return ParsedValue::new(magnitude, DEFAULT_UNIT);
    }
    if !is_supported_unit(&unit) {
        warn_once("value", &format!("unsupported unit '{unit}' in '{trimmed}'"));
    }
    ParsedValue {
        magnitude: Some(magnitude),
        unit,
    }
}

/// Format a magnitude and unit as a style value.
///
/// Returns [`UNSET_DISPLAY`] when the magnitude is unset, else `"{magnitude}{unit}"`.
#[must_use]
pub fn format(magnitude: Option<f64>, unit: &str) -> String {
    magnitude.map_or_else(
        || UNSET_DISPLAY.to_string(),
        |m| format!("{m}{unit}"),
    )
}

/// Normalize a value to the representation the engine writes.
///
/// Numeric values are re-formatted (`" 12PX "` becomes `"12px"`). Keywords
/// pass through trimmed and unchanged, so `auto` stays `auto`. The unset
/// placeholder and empty input become [`CLEARED_VALUE`].
#[must_use]
pub fn normalize(raw: &str) -> String {
    let parsed = parse(raw);
    if parsed.is_set() {
        return parsed.display();
    }
    match raw.trim() {
        UNSET_DISPLAY => CLEARED_VALUE.to_string(),
        keyword => keyword.to_string(),
    }
}

/// Whether `unit` is one of [`STYLE_UNITS`].
#[must_use]
pub fn is_supported_unit(unit: &str) -> bool {
    STYLE_UNITS.iter().any(|u| u.eq_ignore_ascii_case(unit))
}

/// [§ 4.3.3 Consume a number](https://www.w3.org/TR/css-syntax-3/#consume-number)
///
/// Byte length of the leading `[+-]?(digits[.digits]|.digits)([eE][+-]?digits)?`
/// run. The exponent is only taken when a digit follows it, so the `e` of
/// `1em` stays part of the unit. Returns 0 when there is no digit.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut i = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(i);
    i += int_digits;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_digits = digits_from(i + 1);
        if frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(i + 1), Some(b'+' | b'-')));
        let exp_digits = digits_from(i + 1 + sign);
        if exp_digits > 0 {
            i += 1 + sign + exp_digits;
        }
    }
    i
}
