//! Terminal output: sentiment percentages and the top-rows table.

use comfy_table::{Cell, Color, ContentArrangement, Table};
use tweetpipe_core::CanonicalRecord;
use tweetpipe_sentiment::{Polarity, SentimentBreakdown};

/// Records ordered for display, most favorited first, ties broken by retweets.
/// Each entry keeps its position in the fetched set. The sort is stable.
pub(crate) fn sort_for_display(records: &[CanonicalRecord]) -> Vec<(usize, &CanonicalRecord)> {
    let mut rows: Vec<(usize, &CanonicalRecord)> = records.iter().enumerate().collect();
    rows.sort_by(|(_, a), (_, b)| {
        b.favorite_count
            .cmp(&a.favorite_count)
            .then_with(|| b.retweet_count.cmp(&a.retweet_count))
    });
    rows
}

/// Builds a table of the first `limit` rows with an index column.
pub(crate) fn build_table(rows: &[(usize, &CanonicalRecord)], limit: usize) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Index").fg(Color::Cyan),
        Cell::new("favorite_count").fg(Color::Cyan),
        Cell::new("retweet_count").fg(Color::Cyan),
        Cell::new("text").fg(Color::Cyan),
    ]);

    for (index, record) in rows.iter().take(limit) {
        table.add_row(vec![
            Cell::new(index),
            Cell::new(record.favorite_count),
            Cell::new(record.retweet_count),
            Cell::new(&record.text),
        ]);
    }

    table
}

pub(crate) fn sentiment_lines(breakdown: &SentimentBreakdown) -> Vec<String> {
    [Polarity::Positive, Polarity::Neutral, Polarity::Negative]
        .into_iter()
        .map(|polarity| {
            format!(
                "Percentage of {polarity} posts: {:.2}%",
                breakdown.percentage(polarity)
            )
        })
        .collect()
}
