//! Waiting out the search API's rate limit.
//!
//! The API answers HTTP 429 once the request quota for the current window is
//! spent, and advertises the window's end in `x-rate-limit-reset` (Unix
//! seconds). [`wait_on_rate_limit`] turns that condition into an explicit
//! `tokio::time::sleep` followed by a re-issue of the same request. No other
//! error is retried here.
//!
//! The wait is an ordinary `.await`, so callers that need a deadline or
//! cancellation wrap the fetch in `tokio::time::timeout` or drop it.

use std::future::Future;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::error::SearchError;

/// Length of the API's rate-limit window, used when no reset time is given.
const DEFAULT_WINDOW: Duration = Duration::from_secs(15 * 60);

/// Upper bound on the wait derived from a reset header, before the buffer.
const MAX_RESET_WAIT: Duration = Duration::from_secs(4 * 15 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RateLimitPolicy {
    /// Added to every computed wait to absorb clock skew.
    pub(crate) buffer: Duration,
    /// Wait used when the response carried no reset time.
    pub(crate) fallback_window: Duration,
}

impl RateLimitPolicy {
    pub(crate) fn new(buffer_secs: u64) -> Self {
        Self {
            buffer: Duration::from_secs(buffer_secs),
            fallback_window: DEFAULT_WINDOW,
        }
    }

    /// How long to sleep given the advertised reset time and the current time,
    /// both in Unix seconds. A reset time in the past waits only the buffer;
    /// one implausibly far ahead is capped at [`MAX_RESET_WAIT`].
    pub(crate) fn delay_until(&self, reset_epoch: Option<u64>, now_epoch: u64) -> Duration {
        let base = match reset_epoch {
            Some(reset) => {
                Duration::from_secs(reset.saturating_sub(now_epoch)).min(MAX_RESET_WAIT)
            }
            None => self.fallback_window,
        };
        base.saturating_add(self.buffer)
    }
}

pub(crate) fn now_epoch() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}

/// Parses the `x-rate-limit-reset` header, if present and numeric.
pub(crate) fn reset_from_headers(headers: &reqwest::header::HeaderMap) -> Option<u64> {
    headers
        .get("x-rate-limit-reset")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

/// Runs `operation`, sleeping and re-running it for as long as it reports
/// [`SearchError::RateLimited`]. Any other outcome is returned unchanged.
pub(crate) async fn wait_on_rate_limit<T, F, Fut>(
    policy: RateLimitPolicy,
    mut operation: F,
) -> Result<T, SearchError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, SearchError>>,
{
    let mut waits = 0u32;
    loop {
        match operation().await {
            Err(SearchError::RateLimited { reset_epoch }) => {
                waits += 1;
                let delay = policy.delay_until(reset_epoch, now_epoch());
                tracing::warn!(
                    waits,
                    delay_secs = delay.as_secs(),
                    reset_epoch,
                    "search API rate limit reached, waiting for the window to reset"
                );
                tokio::time::sleep(delay).await;
            }
            other => return other,
        }
    }
}
