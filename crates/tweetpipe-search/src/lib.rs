//! Acquisition and normalization of search results.
//!
//! [`Session`] authenticates against the remote search API and waits out its
//! rate limit; [`fetch`] drives any [`SearchSource`] page by page and turns
//! each [`RawItem`] into a [`tweetpipe_core::CanonicalRecord`] via
//! [`normalize`].

pub mod error;
pub mod extract;
pub mod fetch;
pub mod normalize;
pub mod pagination;
pub mod sanitize;
pub mod session;
pub mod types;

mod oauth;
mod rate_limit;

pub use error::{NormalizeError, SearchError};
pub use extract::{extract_coordinates, extract_place, ExtractionFailure};
pub use fetch::{effective_query, fetch, SearchPage, SearchSource};
pub use normalize::normalize;
pub use sanitize::sanitize;
pub use session::{Session, SessionOptions};
pub use types::RawItem;
