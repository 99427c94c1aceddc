use std::fmt;

use serde::Serialize;

use crate::scorer::lexicon_score;

/// Coarse sentiment class of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Neutral,
    Negative,
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        };
        f.write_str(label)
    }
}

/// Classifies `text` by the sign of its [`lexicon_score`].
#[must_use]
pub fn classify(text: &str) -> Polarity {
    let score = lexicon_score(text);
    if score > 0.0 {
        Polarity::Positive
    } else if score < 0.0 {
        Polarity::Negative
    } else {
        Polarity::Neutral
    }
}

/// Per-class counts over a set of texts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentBreakdown {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentBreakdown {
    /// Classifies every text and tallies the results.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut breakdown = Self::default();
        for text in texts {
            match classify(text.as_ref()) {
                Polarity::Positive => breakdown.positive += 1,
                Polarity::Neutral => breakdown.neutral += 1,
                Polarity::Negative => breakdown.negative += 1,
            }
        }
        tracing::debug!(
            positive = breakdown.positive,
            neutral = breakdown.neutral,
            negative = breakdown.negative,
            "classified texts"
        );
        breakdown
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    #[must_use]
    pub fn count(&self, polarity: Polarity) -> usize {
        match polarity {
            Polarity::Positive => self.positive,
            Polarity::Neutral => self.neutral,
            Polarity::Negative => self.negative,
        }
    }

    /// Share of `polarity` in the whole set, in percent. `0.0` for an empty set.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self, polarity: Polarity) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(polarity) as f64 * 100.0 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_follows_score_sign() {
        assert_eq!(classify("what a great release"), Polarity::Positive);
        assert_eq!(classify("release notes are out"), Polarity::Neutral);
        assert_eq!(classify("this release is terrible"), Polarity::Negative);
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(Polarity::Positive.to_string(), "positive");
        assert_eq!(Polarity::Neutral.to_string(), "neutral");
        assert_eq!(Polarity::Negative.to_string(), "negative");
    }

    #[test]
    fn breakdown_counts_each_class() {
        let texts = ["love it", "hate it", "it exists", "so good", "meh"];
        let b = SentimentBreakdown::from_texts(texts);
        assert_eq!(b.positive, 2);
        assert_eq!(b.negative, 1);
        assert_eq!(b.neutral, 2);
        assert_eq!(b.total(), 5);
    }

    #[test]
    fn percentages_are_over_the_full_set() {
        let texts: Vec<String> = ["great", "bad", "ok then", "nice"]
            .iter()
            .map(|s| (*s).to_owned())
            .collect();
        let b = SentimentBreakdown::from_texts(&texts);
        assert!((b.percentage(Polarity::Positive) - 50.0).abs() < f64::EPSILON);
        assert!((b.percentage(Polarity::Negative) - 25.0).abs() < f64::EPSILON);
        assert!((b.percentage(Polarity::Neutral) - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_set_is_zero_percent_everywhere() {
        let b = SentimentBreakdown::from_texts(Vec::<String>::new());
        assert_eq!(b.total(), 0);
        assert_eq!(b.percentage(Polarity::Positive), 0.0);
        assert_eq!(b.percentage(Polarity::Neutral), 0.0);
        assert_eq!(b.percentage(Polarity::Negative), 0.0);
    }

    #[test]
    fn breakdown_serializes_with_lowercase_keys() {
        let b = SentimentBreakdown {
            positive: 1,
            neutral: 2,
            negative: 3,
        };
        let json = serde_json::to_value(b).unwrap();
        assert_eq!(json["positive"], 1);
        assert_eq!(json["negative"], 3);
        assert_eq!(serde_json::to_value(Polarity::Neutral).unwrap(), "neutral");
    }
}
