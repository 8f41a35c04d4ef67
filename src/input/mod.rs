//! Validation of raw panel records.
//!
//! Accepts a JSON list of `{ "x": number, "y": number }` objects and turns
//! it into [`Panel`]s of the run-wide size. Shape problems are reported as
//! [`InputError`]s before any calculation runs; the calculators never
//! re-validate what they are given.

use serde_json::Value;

use crate::config::PanelSize;
use crate::error::{InputError, Result};
use crate::geometry::Panel;

/// Parses and validates panel records from JSON text.
///
/// # Errors
///
/// Returns `InputError::Malformed` for unparsable text, otherwise the
/// errors of [`panels_from_value`]. Returns a `ConfigError` if `size` is
/// invalid.
pub fn panels_from_json(json: &str, size: PanelSize) -> Result<Vec<Panel>> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| InputError::Malformed(e.to_string()))?;
    panels_from_value(&value, size)
}

/// Validates a JSON value holding panel records.
///
/// # Errors
///
/// Returns `InputError::NotAList` if `value` is not an array, and a
/// per-record error for the first record that is not an object or lacks a
/// finite numeric `x` or `y`. Returns a `ConfigError` if `size` is invalid.
pub fn panels_from_value(value: &Value, size: PanelSize) -> Result<Vec<Panel>> {
    size.validate()?;
    let records = value.as_array().ok_or(InputError::NotAList)?;

    records
        .iter()
        .enumerate()
        .map(|(index, record)| -> Result<Panel> {
            let object = record.as_object().ok_or(InputError::NotAnObject { index })?;
            let x = coordinate(object.get("x"), index, "x")?;
            let y = coordinate(object.get("y"), index, "y")?;
            Ok(Panel::new(x, y, size))
        })
        .collect()
}

fn coordinate(
    value: Option<&Value>,
    index: usize,
    field: &'static str,
) -> std::result::Result<f64, InputError> {
    let value = value.ok_or(InputError::MissingCoordinate { index, field })?;
    value
        .as_f64()
        .filter(|v| v.is_finite())
        .ok_or(InputError::NonNumeric { index, field })
}
