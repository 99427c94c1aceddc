//! Cursor handling for the search endpoint.
//!
//! Each response's `search_metadata.next_results` holds the query string for
//! the next, older page:
//!
//! ```text
//! ?max_id=1063442069893951487&q=cats%20-filter%3Aretweets&count=100&include_entities=1&result_type=recent
//! ```
//!
//! The cursor is the `max_id` value; it is absent on the last page.

/// Extracts the `max_id` cursor from a `next_results` query string.
///
/// Returns `None` if `next_results` is `None`, empty, or carries no
/// non-empty `max_id` parameter.
#[must_use]
pub fn extract_next_cursor(next_results: Option<&str>) -> Option<String> {
    let query = next_results?.trim();
    let query = query.strip_prefix('?').unwrap_or(query);
    extract_query_param(query, "max_id")
}

/// Extracts the value of a named parameter from a bare query string.
///
/// `max_id` values are decimal ids, so no percent-decoding is applied.
fn extract_query_param(query: &str, param: &str) -> Option<String> {
    let needle = format!("{param}=");
    for pair in query.split('&') {
        if let Some(value) = pair.strip_prefix(needle.as_str()) {
            let value = value.split('#').next().unwrap_or(value);
            if !value.is_empty() {
                return Some(value.to_owned());
            }
        }
    }
    None
}
