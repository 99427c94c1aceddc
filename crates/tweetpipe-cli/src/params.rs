//! Positional run parameters: search term, target count, retweet exclusion.

use thiserror::Error;

pub(crate) const DEFAULT_SEARCH_TERM: &str = "Automation";
pub(crate) const DEFAULT_TARGET_COUNT: usize = 500;
pub(crate) const DEFAULT_EXCLUDE_RETWEETS: bool = true;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ParamsError {
    #[error("expected 3 parameters (term, count, exclude-retweets), got {0}")]
    WrongArity(usize),

    #[error("count must be a positive integer, got '{0}'")]
    InvalidCount(String),

    #[error("exclude-retweets must be an integer, got '{0}'")]
    InvalidFlag(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RunParams {
    pub(crate) search_term: String,
    pub(crate) target_count: usize,
    pub(crate) exclude_retweets: bool,
}

impl Default for RunParams {
    fn default() -> Self {
        Self {
            search_term: DEFAULT_SEARCH_TERM.to_owned(),
            target_count: DEFAULT_TARGET_COUNT,
            exclude_retweets: DEFAULT_EXCLUDE_RETWEETS,
        }
    }
}

impl RunParams {
    /// Parses exactly three positional values. Any non-zero flag excludes
    /// retweets.
    pub(crate) fn parse(args: &[String]) -> Result<Self, ParamsError> {
        let [term, count, flag] = args else {
            return Err(ParamsError::WrongArity(args.len()));
        };

        let target_count = count
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| ParamsError::InvalidCount(count.clone()))?;
        let flag_value = flag
            .trim()
            .parse::<i64>()
            .map_err(|_| ParamsError::InvalidFlag(flag.clone()))?;

        Ok(Self {
            search_term: term.clone(),
            target_count,
            exclude_retweets: flag_value != 0,
        })
    }

    /// No parameters selects the defaults. Anything unparseable is reported
    /// and also falls back to the defaults as a whole.
    pub(crate) fn resolve(args: &[String]) -> Self {
        if args.is_empty() {
            return Self::default();
        }
        Self::parse(args).unwrap_or_else(|error| {
            let defaults = Self::default();
            tracing::warn!(
                %error,
                search_term = %defaults.search_term,
                target_count = defaults.target_count,
                exclude_retweets = defaults.exclude_retweets,
                "invalid parameters, using presets"
            );
            defaults
        })
    }
}
