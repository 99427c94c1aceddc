//! Search API response types.
//!
//! Models the JSON returned by the v1.1 `search/tweets.json` endpoint. Only
//! the fields the normalizer reads are declared; everything else is ignored.

use serde::Deserialize;
use serde_json::Value;

/// Top-level body of a search response.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub statuses: Vec<RawItem>,
    #[serde(default)]
    pub search_metadata: Option<SearchMetadata>,
}

/// Paging metadata attached to every search response.
#[derive(Debug, Deserialize)]
pub struct SearchMetadata {
    /// Query string for the next (older) page, e.g.
    /// `?max_id=1063442069893951487&q=cats&count=100&include_entities=1`.
    /// Absent on the last page.
    #[serde(default)]
    pub next_results: Option<String>,
}

/// One search result as delivered by the API.
///
/// Optional sub-fields may be absent, `null`, a nested object, or (from some
/// proxies and archives) a pre-stringified dump of that object. Counts and ids
/// are kept as untyped JSON so that coercion problems are reported per item.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawItem {
    #[serde(default)]
    pub created_at: Option<String>,
    /// Untruncated body, present when `tweet_mode=extended` is requested.
    #[serde(default)]
    pub full_text: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub id_str: Option<String>,
    #[serde(default)]
    pub favorite_count: Option<Value>,
    #[serde(default)]
    pub retweet_count: Option<Value>,
    #[serde(default)]
    pub favorited: Option<bool>,
    #[serde(default)]
    pub retweeted: Option<bool>,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub place: Option<Value>,
    #[serde(default)]
    pub coordinates: Option<Value>,
    #[serde(default)]
    pub in_reply_to_user_id: Option<Value>,
    #[serde(default)]
    pub in_reply_to_user_id_str: Option<String>,
    #[serde(default)]
    pub in_reply_to_status_id: Option<Value>,
    #[serde(default)]
    pub in_reply_to_status_id_str: Option<String>,
}

/// Structured `place` object.
#[derive(Debug, Deserialize)]
pub struct PlaceObject {
    pub full_name: String,
}

/// GeoJSON `coordinates` object: `{"type": "Point", "coordinates": [lon, lat]}`.
#[derive(Debug, Deserialize)]
pub struct PointObject {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<serde_json::Number>,
}
