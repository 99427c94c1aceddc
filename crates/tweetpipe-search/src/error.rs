use thiserror::Error;

/// A raw item violated the source's schema contract and cannot be normalized.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// A count field was absent or not a non-negative integer.
    #[error("post {post_id}: `{field}` is not a non-negative integer (got {value})")]
    InvalidCount {
        post_id: String,
        field: &'static str,
        value: String,
    },

    /// A field every search result must carry was absent.
    #[error("raw item is missing required field `{field}`")]
    MissingField { field: &'static str },
}

/// Errors returned by the search session and the paginated fetcher.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Credentials were blank, malformed, or rejected by the API.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The API answered with a non-success status other than 401/403/429.
    #[error("search API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// HTTP 429. Consumed by the session's rate-limit wait; never returned
    /// from [`crate::Session`] methods.
    #[error("rate limited (window resets at {reset_epoch:?})")]
    RateLimited { reset_epoch: Option<u64> },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("OAuth signing error: {0}")]
    OAuth(String),

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// A result item broke the schema contract; the fetch is aborted.
    #[error("normalization failed: {0}")]
    Normalization(#[from] NormalizeError),
}
