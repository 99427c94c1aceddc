//! OAuth 1.0a credentials for the remote search API.
//!
//! Credentials come from a JSON file (the git-ignored `credentials.json`) with
//! optional per-key environment overrides. The resulting [`Credentials`] value
//! is immutable and is handed to the search session at construction time.

use std::path::Path;

use serde::Deserialize;

use crate::ConfigError;

/// Environment variables that override the matching key in the credentials file.
pub const CONSUMER_KEY_VAR: &str = "TWEETPIPE_CONSUMER_KEY";
pub const CONSUMER_SECRET_VAR: &str = "TWEETPIPE_CONSUMER_SECRET";
pub const ACCESS_TOKEN_VAR: &str = "TWEETPIPE_ACCESS_TOKEN";
pub const ACCESS_SECRET_VAR: &str = "TWEETPIPE_ACCESS_SECRET";

/// The four opaque secrets needed to sign user-context requests.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &"[redacted]")
            .field("consumer_secret", &"[redacted]")
            .field("access_token", &"[redacted]")
            .field("access_secret", &"[redacted]")
            .finish()
    }
}

impl Credentials {
    #[must_use]
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_secret: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            access_token: access_token.into(),
            access_secret: access_secret.into(),
        }
    }

    /// Returns the names of any credential fields that are empty or whitespace.
    #[must_use]
    pub fn blank_fields(&self) -> Vec<&'static str> {
        let mut blank = Vec::new();
        if self.consumer_key.trim().is_empty() {
            blank.push("consumer_key");
        }
        if self.consumer_secret.trim().is_empty() {
            blank.push("consumer_secret");
        }
        if self.access_token.trim().is_empty() {
            blank.push("access_token");
        }
        if self.access_secret.trim().is_empty() {
            blank.push("access_secret");
        }
        blank
    }
}

/// On-disk shape of `credentials.json`. Every key is optional so that the
/// environment can supply the rest.
#[derive(Debug, Default, Deserialize)]
struct CredentialsFile {
    #[serde(default)]
    consumer_key: Option<String>,
    #[serde(default)]
    consumer_secret: Option<String>,
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    access_secret: Option<String>,
}

/// Reads credentials from `path` (if it exists) and applies environment overrides.
///
/// # Errors
///
/// Returns [`ConfigError::Credentials`] if the file exists but cannot be read
/// or parsed, or if any of the four secrets is missing after overrides.
pub fn read_credentials<F>(path: &Path, lookup: F) -> Result<Credentials, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let contents = if path.exists() {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::Credentials(format!("cannot read {}: {e}", path.display()))
        })?;
        Some(raw)
    } else {
        tracing::debug!(path = %path.display(), "credentials file not found; using environment only");
        None
    };
    build_credentials(contents.as_deref(), lookup)
}

/// Merges an optional credentials-file body with environment overrides.
///
/// Environment values win over file values.
fn build_credentials<F>(contents: Option<&str>, lookup: F) -> Result<Credentials, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let file: CredentialsFile = match contents {
        Some(raw) => serde_json::from_str(raw)
            .map_err(|e| ConfigError::Credentials(format!("malformed credentials file: {e}")))?,
        None => CredentialsFile::default(),
    };

    let pick = |var: &str, from_file: Option<String>| lookup(var).ok().or(from_file);

    let consumer_key = pick(CONSUMER_KEY_VAR, file.consumer_key);
    let consumer_secret = pick(CONSUMER_SECRET_VAR, file.consumer_secret);
    let access_token = pick(ACCESS_TOKEN_VAR, file.access_token);
    let access_secret = pick(ACCESS_SECRET_VAR, file.access_secret);

    match (consumer_key, consumer_secret, access_token, access_secret) {
        (Some(ck), Some(cs), Some(at), Some(asec)) => Ok(Credentials::new(ck, cs, at, asec)),
        (ck, cs, at, asec) => {
            let missing: Vec<&str> = [
                ("consumer_key", ck.is_none()),
                ("consumer_secret", cs.is_none()),
                ("access_token", at.is_none()),
                ("access_secret", asec.is_none()),
            ]
            .into_iter()
            .filter_map(|(name, absent)| absent.then_some(name))
            .collect();
            Err(ConfigError::Credentials(format!(
                "missing credentials: {}",
                missing.join(", ")
            )))
        }
    }
}
