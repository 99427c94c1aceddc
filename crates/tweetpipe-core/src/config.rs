use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::credentials::{read_credentials, Credentials};
use crate::ConfigError;

/// Upper bound the search endpoint accepts for `count`.
const MAX_PAGE_SIZE: u32 = 100;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Load the search API credentials named by `config.credentials_path`,
/// with per-key environment overrides.
///
/// # Errors
///
/// Returns [`ConfigError::Credentials`] if the file is unreadable or malformed,
/// or if any secret is missing.
pub fn load_credentials(config: &AppConfig) -> Result<Credentials, ConfigError> {
    read_credentials(&config.credentials_path, |key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can pass a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let log_level = or_default("TWEETPIPE_LOG_LEVEL", "info");
    let api_base_url = or_default("TWEETPIPE_API_BASE_URL", "https://api.twitter.com/");
    let request_timeout_secs = parse_u64("TWEETPIPE_REQUEST_TIMEOUT_SECS", "30")?;
    let page_size = parse_page_size(&or_default("TWEETPIPE_PAGE_SIZE", "100"))?;
    let lang = or_default("TWEETPIPE_LANG", "en");
    let rate_limit_buffer_secs = parse_u64("TWEETPIPE_RATE_LIMIT_BUFFER_SECS", "5")?;
    let output_dir = PathBuf::from(or_default("TWEETPIPE_OUTPUT_DIR", "."));
    let table_rows = parse_usize("TWEETPIPE_TABLE_ROWS", "10")?;
    let credentials_path = PathBuf::from(or_default(
        "TWEETPIPE_CREDENTIALS_PATH",
        "./credentials.json",
    ));

    Ok(AppConfig {
        log_level,
        api_base_url,
        request_timeout_secs,
        page_size,
        lang,
        rate_limit_buffer_secs,
        output_dir,
        table_rows,
        credentials_path,
    })
}

/// Parse a page size, rejecting zero and anything above [`MAX_PAGE_SIZE`].
fn parse_page_size(raw: &str) -> Result<u32, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        var: "TWEETPIPE_PAGE_SIZE".to_string(),
        reason,
    };
    let size = raw.parse::<u32>().map_err(|e| invalid(e.to_string()))?;
    if size == 0 || size > MAX_PAGE_SIZE {
        return Err(invalid(format!("must be between 1 and {MAX_PAGE_SIZE}, got {size}")));
    }
    Ok(size)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
