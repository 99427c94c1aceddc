//! Paginated acquisition of search results.

use std::collections::HashSet;
use std::future::Future;

use tweetpipe_core::{sentinel, CanonicalRecord};

use crate::error::SearchError;
use crate::normalize::normalize;
use crate::types::RawItem;

/// Query operator that drops retweets from search results.
pub const RETWEET_EXCLUSION: &str = "-filter:retweets";

/// One page of raw results and the cursor for the page after it.
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    pub items: Vec<RawItem>,
    /// `None` when the source has nothing further.
    pub next_cursor: Option<String>,
}

/// A remote search capability that can be paged through with an opaque cursor.
///
/// [`crate::Session`] implements this against the live API; tests supply
/// in-memory fakes.
pub trait SearchSource {
    /// Fetches the page identified by `cursor`, or the first page when `None`.
    fn search_page(
        &self,
        query: &str,
        cursor: Option<&str>,
    ) -> impl Future<Output = Result<SearchPage, SearchError>> + Send;
}

/// Builds the query actually sent to the source.
#[must_use]
pub fn effective_query(search_term: &str, exclude_retweets: bool) -> String {
    if exclude_retweets {
        format!("{search_term} {RETWEET_EXCLUSION}")
    } else {
        search_term.to_owned()
    }
}

/// Pages through `source` until `target_count` records have been normalized
/// or the source runs dry, returning the records in source order.
///
/// Paging stops at an empty page, a missing cursor, or a cursor the source
/// has already handed out. Running dry is not an error: the caller receives
/// however many records were available.
///
/// # Errors
///
/// Propagates any [`SearchError`] from the source, and aborts with
/// [`SearchError::Normalization`] on the first item that breaks the schema
/// contract.
pub async fn fetch<S: SearchSource>(
    source: &S,
    search_term: &str,
    target_count: usize,
    exclude_retweets: bool,
) -> Result<Vec<CanonicalRecord>, SearchError> {
    let query = effective_query(search_term, exclude_retweets);
    tracing::info!(query = %query, target_count, "fetching search results");

    let mut records = Vec::new();
    if target_count == 0 {
        return Ok(records);
    }

    let mut cursor: Option<String> = None;
    let mut seen_cursors = HashSet::new();
    let mut pages = 0u32;

    loop {
        let page = source.search_page(&query, cursor.as_deref()).await?;
        pages += 1;

        if page.items.is_empty() {
            tracing::debug!(pages, "source returned an empty page");
            break;
        }

        for raw in &page.items {
            records.push(normalize(raw)?);
            if records.len() == target_count {
                break;
            }
        }

        if records.len() >= target_count {
            break;
        }

        match page.next_cursor {
            Some(next) if seen_cursors.insert(next.clone()) => cursor = Some(next),
            Some(next) => {
                tracing::warn!(cursor = %next, "source repeated a cursor, stopping");
                break;
            }
            None => break,
        }
    }

    let geotagged = records
        .iter()
        .filter(|r| !sentinel::is_sentinel(&r.coordinates))
        .count();
    tracing::info!(
        query = %query,
        fetched = records.len(),
        geotagged,
        pages,
        "search fetch complete"
    );
    Ok(records)
}
