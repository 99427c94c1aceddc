//! Authenticated session against the v1.1 search API.
//!
//! A [`Session`] is created once per run by [`Session::authenticate`], which
//! rejects blank credentials locally and then verifies them with a signed call
//! before any search is issued. Every request is signed with OAuth 1.0a and
//! goes through the rate-limit wait in [`crate::rate_limit`].

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use tweetpipe_core::{AppConfig, Credentials};

use crate::error::SearchError;
use crate::fetch::{SearchPage, SearchSource};
use crate::oauth::{percent_encode, OAuthSigner};
use crate::pagination::extract_next_cursor;
use crate::rate_limit::{reset_from_headers, wait_on_rate_limit, RateLimitPolicy};
use crate::types::SearchResponse;

const DEFAULT_BASE_URL: &str = "https://api.twitter.com/";
const VERIFY_CREDENTIALS_PATH: &str = "1.1/account/verify_credentials.json";
const SEARCH_PATH: &str = "1.1/search/tweets.json";

/// Connection settings for a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Results per search page, sent as `count`.
    pub page_size: u32,
    /// Language filter; `None` searches all languages.
    pub lang: Option<String>,
    pub rate_limit_buffer_secs: u64,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_secs: 30,
            page_size: 100,
            lang: Some("en".to_owned()),
            rate_limit_buffer_secs: 5,
        }
    }
}

impl SessionOptions {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        let lang = config.lang.trim();
        Self {
            base_url: config.api_base_url.clone(),
            timeout_secs: config.request_timeout_secs,
            page_size: config.page_size,
            lang: (!lang.is_empty()).then(|| lang.to_owned()),
            rate_limit_buffer_secs: config.rate_limit_buffer_secs,
        }
    }
}

/// A verified connection to the search API.
pub struct Session {
    client: Client,
    signer: OAuthSigner,
    base_url: Url,
    page_size: u32,
    lang: Option<String>,
    rate_limit: RateLimitPolicy,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url.as_str())
            .field("page_size", &self.page_size)
            .field("lang", &self.lang)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Builds a session and verifies `credentials` against the API.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Auth`] if any credential is blank (no request is
    ///   made) or the API rejects them with 401/403.
    /// - [`SearchError::InvalidBaseUrl`] if `options.base_url` does not parse.
    /// - [`SearchError::Http`] on network failure.
    pub async fn authenticate(
        credentials: Credentials,
        options: SessionOptions,
    ) -> Result<Self, SearchError> {
        let blank = credentials.blank_fields();
        if !blank.is_empty() {
            return Err(SearchError::Auth(format!(
                "credentials are blank: {}",
                blank.join(", ")
            )));
        }

        let session = Self::build(credentials, &options)?;
        let account = session
            .signed_get(
                VERIFY_CREDENTIALS_PATH,
                &[("include_entities", "false"), ("skip_status", "true")],
            )
            .await?;

        let screen_name = account
            .get("screen_name")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("unknown");
        tracing::info!(screen_name, base_url = %session.base_url, "search API session verified");

        Ok(session)
    }

    fn build(credentials: Credentials, options: &SessionOptions) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("tweetpipe/0.1")
            .build()?;

        // A trailing slash keeps `Url::join` appending below the base path.
        let normalised = format!("{}/", options.base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| SearchError::InvalidBaseUrl {
            url: options.base_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            signer: OAuthSigner::new(credentials),
            base_url,
            page_size: options.page_size,
            lang: options.lang.clone(),
            rate_limit: RateLimitPolicy::new(options.rate_limit_buffer_secs),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, SearchError> {
        self.base_url
            .join(path)
            .map_err(|e| SearchError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: format!("cannot join '{path}': {e}"),
            })
    }

    /// Issues a signed GET, waiting out any rate limit, and returns the JSON body.
    async fn signed_get(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<serde_json::Value, SearchError> {
        let endpoint = self.endpoint(path)?;
        let params: Vec<(String, String)> = params
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();

        wait_on_rate_limit(self.rate_limit, || self.send_signed(&endpoint, &params)).await
    }

    /// One signed attempt. A 429 surfaces as [`SearchError::RateLimited`] for
    /// the caller's wait loop.
    async fn send_signed(
        &self,
        endpoint: &Url,
        params: &[(String, String)],
    ) -> Result<serde_json::Value, SearchError> {
        // Fresh timestamp and nonce on every attempt, including retries.
        let authorization = self.signer.sign("GET", endpoint.as_str(), params)?;

        // The query is encoded with the signer's rules so the server sees the
        // same bytes that were signed.
        let mut url = endpoint.clone();
        if !params.is_empty() {
            let query = params
                .iter()
                .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
                .collect::<Vec<_>>()
                .join("&");
            url.set_query(Some(&query));
        }

        let response = self
            .client
            .get(url)
            .header(reqwest::header::AUTHORIZATION, authorization)
            .send()
            .await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(SearchError::RateLimited {
                reset_epoch: reset_from_headers(response.headers()),
            });
        }

        let body = response.text().await?;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(SearchError::Auth(format!(
                "HTTP {}: {}",
                status.as_u16(),
                api_message(&body)
            )));
        }
        if !status.is_success() {
            return Err(SearchError::Api {
                status: status.as_u16(),
                message: api_message(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| SearchError::Deserialize {
            context: endpoint.path().to_owned(),
            source: e,
        })
    }
}

impl SearchSource for Session {
    async fn search_page(
        &self,
        query: &str,
        cursor: Option<&str>,
    ) -> Result<SearchPage, SearchError> {
        let count = self.page_size.to_string();
        let mut params = vec![
            ("q", query),
            ("count", count.as_str()),
            ("tweet_mode", "extended"),
            ("include_entities", "true"),
        ];
        if let Some(lang) = self.lang.as_deref() {
            params.push(("lang", lang));
        }
        if let Some(max_id) = cursor {
            params.push(("max_id", max_id));
        }

        let body = self.signed_get(SEARCH_PATH, &params).await?;
        let response: SearchResponse =
            serde_json::from_value(body).map_err(|e| SearchError::Deserialize {
                context: format!("search(q={query}, max_id={cursor:?})"),
                source: e,
            })?;

        let next_cursor = extract_next_cursor(
            response
                .search_metadata
                .as_ref()
                .and_then(|m| m.next_results.as_deref()),
        );
        tracing::debug!(
            items = response.statuses.len(),
            next_cursor = next_cursor.as_deref(),
            "fetched search page"
        );

        Ok(SearchPage {
            items: response.statuses,
            next_cursor,
        })
    }
}

/// Pulls the first `errors[].message` out of an API error body, falling back
/// to the raw body.
fn api_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("errors")
                .and_then(serde_json::Value::as_array)
                .and_then(|errors| errors.first())
                .and_then(|e| e.get("message"))
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned)
        })
        .unwrap_or_else(|| body.trim().to_owned())
}
