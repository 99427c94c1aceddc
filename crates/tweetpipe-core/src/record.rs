use serde::Serialize;

/// A fixed-schema, sentinel-complete post record produced by normalization.
///
/// Field declaration order is the column order used by every writer
/// (CSV header, JSON object keys). Optional source fields are never `null`
/// here; see [`crate::sentinel`] for the values used in their place.
///
/// Records are built once, from exactly one raw search result, and are not
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalRecord {
    pub created_at: String,
    pub text: String,
    pub favorite_count: u64,
    pub retweet_count: u64,
    pub post_id: String,
    pub self_favorited: bool,
    pub self_retweeted: bool,
    pub lang: String,
    pub place: String,
    pub coordinates: String,
    pub in_reply_to_user_id: String,
    pub in_reply_to_status_id: String,
}

impl CanonicalRecord {
    /// Column names in serialization order.
    pub const FIELD_NAMES: [&'static str; 12] = [
        "created_at",
        "text",
        "favorite_count",
        "retweet_count",
        "post_id",
        "self_favorited",
        "self_retweeted",
        "lang",
        "place",
        "coordinates",
        "in_reply_to_user_id",
        "in_reply_to_status_id",
    ];
}
