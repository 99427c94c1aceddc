use std::path::PathBuf;

/// Runtime settings for a fetch run. Secrets are not held here; see
/// [`crate::Credentials`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: String,
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    /// Results requested per search page (the API caps this at 100).
    pub page_size: u32,
    /// Language filter passed to the search endpoint.
    pub lang: String,
    /// Extra seconds to wait past the advertised rate-limit reset.
    pub rate_limit_buffer_secs: u64,
    pub output_dir: PathBuf,
    pub table_rows: usize,
    pub credentials_path: PathBuf,
}
