//! Summary statistics

use crate::text::split_sentences;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Word and sentence counts for an (original, summary) pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub original_words: usize,
    pub summary_words: usize,
    pub original_sentences: usize,
    pub summary_sentences: usize,
    /// 1 - summary_words / original_words, or 0 for an empty original
    pub compression_ratio: f64,
}

impl SummaryStats {
    /// Compression ratio as a percentage with one decimal, e.g. `70.0%`
    pub fn compression_percent(&self) -> String {
        format!("{:.1}%", self.compression_ratio * 100.0)
    }
}

impl fmt::Display for SummaryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Original: {} words, {} sentences",
            self.original_words, self.original_sentences
        )?;
        writeln!(
            f,
            "Summary: {} words, {} sentences",
            self.summary_words, self.summary_sentences
        )?;
        write!(f, "Compression: {}", self.compression_percent())
    }
}

/// Literal whitespace word counts, so stop words count too
pub fn summary_stats(original: &str, summary: &str) -> SummaryStats {
    let original_words = original.split_whitespace().count();
    let summary_words = summary.split_whitespace().count();

    let compression_ratio = if original_words > 0 {
        1.0 - summary_words as f64 / original_words as f64
    } else {
        0.0
    };

    SummaryStats {
        original_words,
        summary_words,
        original_sentences: split_sentences(original).len(),
        summary_sentences: split_sentences(summary).len(),
        compression_ratio,
    }
}
