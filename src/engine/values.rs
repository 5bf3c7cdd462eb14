//! Value-word frequency scoring.
//!
//! Counts literal occurrences of each lexicon word in the pooled answer text
//! and merges the result with the user's manual picks. Deliberately a plain
//! substring scan: no word boundaries, no case folding, no stemming.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// One lexicon word and how often it occurred in the text pool
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ValueScore {
    pub word: String,
    pub count: usize,
}

/// Score every lexicon word against `text_pool` and build the combined value
/// list: manual selections first (selection order, deduplicated), then all
/// lexicon words that occurred at least once, highest count first.
///
/// Sorting is stable, so equal counts keep lexicon declaration order.
pub fn score(
    text_pool: &str,
    lexicon: &[String],
    manual_selections: &[String],
) -> (Vec<ValueScore>, Vec<String>) {
    let mut scores: Vec<ValueScore> = lexicon
        .iter()
        .map(|word| ValueScore {
            word: word.clone(),
            count: count_occurrences(text_pool, word),
        })
        .collect();
    scores.sort_by(|a, b| b.count.cmp(&a.count));

    let mut combined: Vec<String> = Vec::new();
    for word in manual_selections
        .iter()
        .chain(scores.iter().filter(|s| s.count > 0).map(|s| &s.word))
    {
        if !combined.iter().any(|seen| seen == word) {
            combined.push(word.clone());
        }
    }

    (scores, combined)
}

/// Non-overlapping, case-sensitive occurrence count of `word` in `pool`,
/// the same global literal scan the questionnaire has always used.
fn count_occurrences(pool: &str, word: &str) -> usize {
    if pool.is_empty() || word.is_empty() {
        return 0;
    }
    let re = Regex::new(&regex::escape(word)).expect("escaped literal should compile");
    re.find_iter(pool).count()
}
