//! Normalization of raw search results into [`CanonicalRecord`]s.
//!
//! Optional fields never fail: absence maps to a `NO_*` sentinel and an
//! unresolvable nested value maps to a `*_INVALID` sentinel. Only a broken
//! schema contract (missing id or timestamp, non-numeric counts) is an error.

use chrono::{DateTime, Utc};
use serde_json::Value;
use tweetpipe_core::{sentinel, CanonicalRecord};

use crate::error::NormalizeError;
use crate::extract::{resolve_coordinates, resolve_place};
use crate::sanitize::sanitize;
use crate::types::RawItem;

/// Timestamp layout used by the search API, e.g. `Fri Nov 16 12:00:00 +0000 2018`.
const SOURCE_TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Language code used when the source does not report one.
const UNDETERMINED_LANG: &str = "und";

/// Converts one [`RawItem`] into a [`CanonicalRecord`].
///
/// # Errors
///
/// - [`NormalizeError::MissingField`] if the item has no id or no `created_at`.
/// - [`NormalizeError::InvalidCount`] if `favorite_count` or `retweet_count`
///   is absent or not a non-negative integer.
pub fn normalize(raw: &RawItem) -> Result<CanonicalRecord, NormalizeError> {
    let post_id = post_id(raw)?;
    let created_at = raw
        .created_at
        .as_deref()
        .map(render_created_at)
        .ok_or(NormalizeError::MissingField {
            field: "created_at",
        })?;

    let favorite_count = coerce_count(raw.favorite_count.as_ref(), "favorite_count", &post_id)?;
    let retweet_count = coerce_count(raw.retweet_count.as_ref(), "retweet_count", &post_id)?;

    let body = raw
        .full_text
        .as_deref()
        .or(raw.text.as_deref())
        .unwrap_or_default();

    let place = match raw.place.as_ref() {
        None => sentinel::NO_PLACE.to_string(),
        Some(value) => resolve_place(value).unwrap_or_else(|failure| {
            tracing::debug!(post_id = %post_id, %failure, "place data could not be resolved");
            sentinel::PLACE_INVALID.to_string()
        }),
    };

    let coordinates = match raw.coordinates.as_ref() {
        None => sentinel::NO_COORDINATES.to_string(),
        Some(value) => resolve_coordinates(value).unwrap_or_else(|failure| {
            tracing::debug!(post_id = %post_id, %failure, "coordinate data could not be resolved");
            sentinel::COORDINATES_INVALID.to_string()
        }),
    };

    Ok(CanonicalRecord {
        created_at,
        text: clean_text(body),
        favorite_count,
        retweet_count,
        post_id,
        self_favorited: raw.favorited.unwrap_or(false),
        self_retweeted: raw.retweeted.unwrap_or(false),
        lang: raw
            .lang
            .clone()
            .unwrap_or_else(|| UNDETERMINED_LANG.to_string()),
        place,
        coordinates,
        in_reply_to_user_id: reply_reference(
            raw.in_reply_to_user_id_str.as_deref(),
            raw.in_reply_to_user_id.as_ref(),
            sentinel::NO_IN_REPLY_TO_USER_ID,
        ),
        in_reply_to_status_id: reply_reference(
            raw.in_reply_to_status_id_str.as_deref(),
            raw.in_reply_to_status_id.as_ref(),
            sentinel::NO_IN_REPLY_TO_STATUS_ID,
        ),
    })
}

/// Re-encodes the body as an escaped byte literal (`b'...'`), drops the
/// leading `b` marker, and sanitizes the result.
///
/// Non-ASCII bytes therefore survive as their `\xNN` escape letters rather
/// than vanishing outright. If the marker is not where it is expected the
/// raw body is returned as-is.
pub(crate) fn clean_text(raw: &str) -> String {
    let encoded = format!("b'{}'", raw.as_bytes().escape_ascii());
    match encoded.strip_prefix('b') {
        Some(literal) => sanitize(literal),
        None => {
            tracing::warn!("byte re-encoding produced no marker; keeping raw text");
            raw.to_string()
        }
    }
}

/// Renders the source timestamp as `YYYY-MM-DD HH:MM:SS+00:00`, or keeps the
/// source text when it is not in the expected layout.
fn render_created_at(raw: &str) -> String {
    match DateTime::parse_from_str(raw, SOURCE_TIMESTAMP_FORMAT) {
        Ok(ts) => ts
            .with_timezone(&Utc)
            .format("%Y-%m-%d %H:%M:%S%:z")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

fn post_id(raw: &RawItem) -> Result<String, NormalizeError> {
    if let Some(id) = raw.id_str.as_deref().filter(|s| !s.is_empty()) {
        return Ok(id.to_string());
    }
    match raw.id.as_ref() {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(NormalizeError::MissingField { field: "id" }),
    }
}

/// Coerces a count to `u64`. Integers and digit strings are accepted;
/// anything else is a contract violation.
fn coerce_count(
    value: Option<&Value>,
    field: &'static str,
    post_id: &str,
) -> Result<u64, NormalizeError> {
    let invalid = |shown: String| NormalizeError::InvalidCount {
        post_id: post_id.to_string(),
        field,
        value: shown,
    };
    match value {
        Some(Value::Number(n)) => n.as_u64().ok_or_else(|| invalid(n.to_string())),
        Some(Value::String(s)) => s.trim().parse::<u64>().map_err(|_| invalid(s.clone())),
        Some(other) => Err(invalid(other.to_string())),
        None => Err(invalid("null".to_string())),
    }
}

/// Uses the string form of a reply reference when present, otherwise the
/// scalar form coerced to text, otherwise the sentinel.
fn reply_reference(str_form: Option<&str>, value: Option<&Value>, sentinel: &str) -> String {
    if let Some(s) = str_form.filter(|s| !s.is_empty()) {
        return s.to_string();
    }
    match value {
        None => sentinel.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
