//! TF-ISF scoring: each sentence is a pseudo-document

use crate::hybrid::ordered_sum;
use crate::types::{ScoreVector, Sentence};
use std::collections::HashMap;

/// Per-sentence term frequencies plus document-wide sentence frequencies
#[derive(Debug, Clone)]
pub struct TermStats<'a> {
    /// word -> count / token count, one map per sentence
    pub term_freqs: Vec<HashMap<&'a str, f64>>,
    /// word -> number of sentences containing it
    pub sentence_freqs: HashMap<&'a str, usize>,
    pub sentence_count: usize,
}

impl<'a> TermStats<'a> {
    pub fn build(sentences: &'a [Sentence]) -> Self {
        let mut term_freqs = Vec::with_capacity(sentences.len());
        let mut sentence_freqs: HashMap<&str, usize> = HashMap::new();

        for sentence in sentences {
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for token in &sentence.tokens {
                *counts.entry(token.as_str()).or_insert(0) += 1;
            }

            for &word in counts.keys() {
                *sentence_freqs.entry(word).or_insert(0) += 1;
            }

            let total = sentence.tokens.len() as f64;
            term_freqs.push(
                counts
                    .into_iter()
                    .map(|(word, count)| (word, count as f64 / total))
                    .collect(),
            );
        }

        Self {
            term_freqs,
            sentence_freqs,
            sentence_count: sentences.len(),
        }
    }

    /// ln(N / sf); zero for words found in every sentence or never seen
    pub fn inverse_sentence_frequency(&self, word: &str) -> f64 {
        match self.sentence_freqs.get(word) {
            Some(&sf) if sf > 0 => (self.sentence_count as f64 / sf as f64).ln(),
            _ => 0.0,
        }
    }
}

/// Sum of tf * isf over each sentence's distinct words
///
/// Because tf is already divided by the token count this is the mean isf of
/// the sentence's tokens. Terms are summed in sorted order, never map order,
/// so tied sentences stay bit-identical.
pub fn score(sentences: &[Sentence]) -> ScoreVector {
    let stats = TermStats::build(sentences);
    stats
        .term_freqs
        .iter()
        .map(|tf| {
            ordered_sum(
                tf.iter()
                    .map(|(word, freq)| freq * stats.inverse_sentence_frequency(word))
                    .collect(),
            )
        })
        .collect()
}
