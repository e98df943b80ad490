//! Word-frequency sentence scoring

use crate::hybrid::ordered_sum;
use crate::types::{ScoreVector, Sentence};
use std::collections::HashMap;

/// Count every token across the document
pub fn word_frequencies(sentences: &[Sentence]) -> HashMap<&str, usize> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for sentence in sentences {
        for token in &sentence.tokens {
            *counts.entry(token.as_str()).or_insert(0) += 1;
        }
    }
    counts
}

/// Mean max-normalized frequency of each sentence's tokens
pub fn score(sentences: &[Sentence]) -> ScoreVector {
    let counts = word_frequencies(sentences);
    let max_count = counts.values().copied().max().unwrap_or(0);
    if max_count == 0 {
        return vec![0.0; sentences.len()];
    }
    let max_count = max_count as f64;

    sentences
        .iter()
        .map(|sentence| {
            if sentence.tokens.is_empty() {
                return 0.0;
            }
            let mass = ordered_sum(
                sentence
                    .tokens
                    .iter()
                    .map(|t| counts.get(t.as_str()).copied().unwrap_or(0) as f64 / max_count)
                    .collect(),
            );
            mass / sentence.tokens.len() as f64
        })
        .collect()
}
