//! Resolution of nested `place` / `coordinates` values into scalar strings.
//!
//! Structured JSON objects are read through their typed fields. Some sources
//! deliver these values as a stringified dump of the upstream object instead;
//! [`extract_place`] and [`extract_coordinates`] recover the scalar from that
//! dump by its fixed textual layout. Every path reports [`ExtractionFailure`]
//! rather than panicking so a single bad geo value never aborts a batch.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::types::{PlaceObject, PointObject};

/// Position of `full_name` in the comma-separated `Place(...)` dump:
/// `Place(id=.., url=.., place_type=.., name=.., country_code=.., full_name=.., ...)`.
const PLACE_FULL_NAME_INDEX: usize = 5;

/// Label in front of the `full_name` value, including the separator space.
const PLACE_FULL_NAME_LABEL: &str = " full_name='";

/// Everything in front of the bracketed pair in a `Coordinates(...)` dump.
const COORDINATES_PREFIX: &str = "Coordinates(type='Point', coordinates=";

/// A nested value did not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionFailure {
    #[error("expected a field at position {index}, dump has {found} fields")]
    FieldOutOfRange { index: usize, found: usize },

    #[error("expected label {0:?}")]
    MissingLabel(&'static str),

    #[error("malformed value: {0}")]
    Malformed(String),
}

/// Extracts the place name from a stringified `Place(...)` dump.
///
/// Takes the comma-separated token at the `full_name` position and strips its
/// label. A `full_name` that itself contains a comma (`'Austin, TX'`) yields
/// only the part before the comma.
///
/// # Errors
///
/// Returns [`ExtractionFailure`] if the dump has too few fields, the token at
/// the expected position is not `full_name`, or the value is empty.
pub fn extract_place(text: &str) -> Result<String, ExtractionFailure> {
    let token = text
        .split(',')
        .nth(PLACE_FULL_NAME_INDEX)
        .ok_or_else(|| ExtractionFailure::FieldOutOfRange {
            index: PLACE_FULL_NAME_INDEX,
            found: text.split(',').count(),
        })?;

    let value = token
        .strip_prefix(PLACE_FULL_NAME_LABEL)
        .ok_or(ExtractionFailure::MissingLabel(PLACE_FULL_NAME_LABEL))?;
    let value = value.trim_end_matches(')').trim_end_matches('\'');

    if value.is_empty() {
        return Err(ExtractionFailure::Malformed("empty full_name".to_string()));
    }
    Ok(value.to_string())
}

/// Extracts the bracketed `[lon, lat]` pair from a stringified
/// `Coordinates(type='Point', coordinates=[...])` dump.
///
/// # Errors
///
/// Returns [`ExtractionFailure`] if the prefix or closing parenthesis is
/// missing, or what remains is not a bracketed list.
pub fn extract_coordinates(text: &str) -> Result<String, ExtractionFailure> {
    let rest = text
        .strip_prefix(COORDINATES_PREFIX)
        .ok_or(ExtractionFailure::MissingLabel(COORDINATES_PREFIX))?;
    let pair = rest
        .strip_suffix(')')
        .ok_or_else(|| ExtractionFailure::Malformed("missing closing ')'".to_string()))?;

    if pair.len() < 2 || !pair.starts_with('[') || !pair.ends_with(']') {
        return Err(ExtractionFailure::Malformed(format!(
            "expected a bracketed pair, got {pair:?}"
        )));
    }
    Ok(pair.to_string())
}

/// Resolves a nested `place` value: typed object first, textual dump second.
pub(crate) fn resolve_place(value: &Value) -> Result<String, ExtractionFailure> {
    match value {
        Value::Object(_) => {
            let place = PlaceObject::deserialize(value)
                .map_err(|e| ExtractionFailure::Malformed(e.to_string()))?;
            if place.full_name.trim().is_empty() {
                return Err(ExtractionFailure::Malformed("empty full_name".to_string()));
            }
            Ok(place.full_name)
        }
        Value::String(dump) => extract_place(dump),
        other => Err(ExtractionFailure::Malformed(format!(
            "unexpected place value {other}"
        ))),
    }
}

/// Resolves a nested `coordinates` value into `"[lon, lat]"`: GeoJSON point
/// first, textual dump second.
pub(crate) fn resolve_coordinates(value: &Value) -> Result<String, ExtractionFailure> {
    match value {
        Value::Object(_) => {
            let point = PointObject::deserialize(value)
                .map_err(|e| ExtractionFailure::Malformed(e.to_string()))?;
            if point.kind != "Point" {
                return Err(ExtractionFailure::Malformed(format!(
                    "unsupported geometry {}",
                    point.kind
                )));
            }
            match point.coordinates.as_slice() {
                [lon, lat] => Ok(format!("[{lon}, {lat}]")),
                other => Err(ExtractionFailure::Malformed(format!(
                    "expected 2 coordinates, got {}",
                    other.len()
                ))),
            }
        }
        Value::String(dump) => extract_coordinates(dump),
        other => Err(ExtractionFailure::Malformed(format!(
            "unexpected coordinates value {other}"
        ))),
    }
}
