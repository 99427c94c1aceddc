//! Lexicon sentiment for normalized post text.
//!
//! [`lexicon_score`] maps a text to `[-1.0, 1.0]`, [`classify`] buckets it into
//! a [`Polarity`], and [`SentimentBreakdown`] summarizes a whole result set.

pub mod polarity;
pub mod scorer;

pub use polarity::{classify, Polarity, SentimentBreakdown};
pub use scorer::lexicon_score;
