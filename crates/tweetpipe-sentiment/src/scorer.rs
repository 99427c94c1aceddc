//! General-purpose English lexicon scorer.

/// Word weights.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative. The final score is clamped to `[-1.0, 1.0]`.
pub(crate) const LEXICON: &[(&str, f32)] = &[
    // Positive signals
    ("amazing", 0.6),
    ("awesome", 0.6),
    ("beautiful", 0.5),
    ("best", 0.5),
    ("better", 0.3),
    ("brilliant", 0.5),
    ("cool", 0.3),
    ("easy", 0.3),
    ("effective", 0.3),
    ("efficient", 0.3),
    ("excellent", 0.6),
    ("excited", 0.4),
    ("exciting", 0.4),
    ("fantastic", 0.6),
    ("fast", 0.2),
    ("fun", 0.4),
    ("good", 0.4),
    ("great", 0.5),
    ("happy", 0.5),
    ("helpful", 0.4),
    ("impressive", 0.5),
    ("improved", 0.3),
    ("innovative", 0.4),
    ("interesting", 0.3),
    ("love", 0.5),
    ("loved", 0.5),
    ("nice", 0.4),
    ("perfect", 0.6),
    ("powerful", 0.3),
    ("recommend", 0.4),
    ("reliable", 0.4),
    ("smart", 0.3),
    ("success", 0.4),
    ("successful", 0.4),
    ("thanks", 0.3),
    ("useful", 0.3),
    ("win", 0.4),
    ("wonderful", 0.6),
    // Negative signals
    ("angry", -0.5),
    ("annoying", -0.4),
    ("awful", -0.6),
    ("bad", -0.5),
    ("boring", -0.4),
    ("broken", -0.5),
    ("bug", -0.3),
    ("crash", -0.5),
    ("dangerous", -0.5),
    ("difficult", -0.3),
    ("disappointed", -0.5),
    ("disappointing", -0.5),
    ("error", -0.3),
    ("fail", -0.4),
    ("failed", -0.4),
    ("failure", -0.5),
    ("fear", -0.4),
    ("hate", -0.6),
    ("horrible", -0.6),
    ("lose", -0.4),
    ("lost", -0.3),
    ("poor", -0.4),
    ("problem", -0.3),
    ("sad", -0.5),
    ("scary", -0.4),
    ("slow", -0.3),
    ("terrible", -0.6),
    ("threat", -0.4),
    ("ugly", -0.5),
    ("useless", -0.5),
    ("worse", -0.5),
    ("worst", -0.6),
    ("wrong", -0.4),
];

/// Score a text string using the lexicon.
///
/// Splits text into lowercase words, sums matching weights, and clamps
/// the result to `[-1.0, 1.0]`. Returns `0.0` for empty or unknown text.
#[must_use]
pub fn lexicon_score(text: &str) -> f32 {
    let mut score = 0.0_f32;
    for word in text.split_whitespace() {
        let w = word
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase();
        if let Some(&(_, weight)) = LEXICON.iter().find(|(lex_word, _)| *lex_word == w) {
            score += weight;
        }
    }
    score.clamp(-1.0, 1.0)
}
