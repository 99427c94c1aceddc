//! Post-body cleanup ahead of polarity classification.

use std::sync::LazyLock;

use regex::Regex;

/// Mentions, anything outside ASCII alphanumerics/space/tab, and `scheme://…`
/// tokens. Alternation order matters: a URL starting with a letter is matched
/// whole by the third branch before its punctuation can be removed piecemeal.
static NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(@[A-Za-z0-9]+)|([^0-9A-Za-z \t])|(\w+://\S+)").expect("valid regex")
});

/// Strips mentions, URLs and non-alphanumeric characters from `text`, then
/// collapses whitespace runs to single spaces and trims both ends.
///
/// Total and idempotent: the output only ever contains ASCII alphanumerics
/// separated by single spaces.
#[must_use]
pub fn sanitize(text: &str) -> String {
    let replaced = NOISE.replace_all(text, " ");
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}
