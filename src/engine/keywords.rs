//! Talent-keyword extraction: a frequency-count heuristic, not a tokenizer.
//!
//! The talent/asset answers are split on a fixed set of punctuation and
//! whitespace, short fragments are dropped, and the most frequent fragments
//! win. Fragments are never split further, so multi-character words survive
//! as the user wrote them.

use crate::config::ExtractionConfig;
use regex::Regex;

/// Return the `top_k` most frequent fragments of `text_pool`, ties broken by
/// first appearance in the input. Fragments shorter than `min_token_chars`
/// are discarded. An empty pool yields an empty vec.
pub fn extract(text_pool: &str, cfg: &ExtractionConfig) -> Vec<String> {
    if text_pool.trim().is_empty() {
        return Vec::new();
    }

    let splitter = Regex::new(&format!("[{}\\s]+", regex::escape(&cfg.delimiters)))
        .expect("escaped delimiter class should compile");

    // Frequency in first-seen order so the later sort can tie-break stably
    let mut order: Vec<String> = Vec::new();
    let mut counts: std::collections::HashMap<String, usize> = std::collections::HashMap::new();
    for token in splitter.split(text_pool) {
        if token.chars().count() < cfg.min_token_chars {
            continue;
        }
        let entry = counts.entry(token.to_string()).or_insert(0);
        if *entry == 0 {
            order.push(token.to_string());
        }
        *entry += 1;
    }

    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|token| {
            let count = counts[&token];
            (token, count)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(cfg.top_k)
        .map(|(token, _)| token)
        .collect()
}
