//! Configuration for sentence scoring

use crate::stopwords::StopWords;
use serde::{Deserialize, Serialize};

/// Weights applied to max-normalized scores in hybrid mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HybridWeights {
    pub tfidf: f64,
    pub frequency: f64,
    pub position: f64,
}

impl HybridWeights {
    pub fn new() -> Self {
        Self {
            tfidf: 0.5,
            frequency: 0.3,
            position: 0.2,
        }
    }
}

impl Default for HybridWeights {
    fn default() -> Self {
        Self::new()
    }
}

/// Positional bands, measured inward from the nearer end of the document
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionWeights {
    /// Fraction of sentences at each end receiving `lead`
    pub lead_fraction: f64,
    /// Fraction (cumulative) at each end receiving at least `medium`
    pub medium_fraction: f64,
    pub lead: f64,
    pub medium: f64,
    pub baseline: f64,
    /// Documents this short weight every sentence as `lead`
    pub short_document: usize,
}

impl PositionWeights {
    pub fn new() -> Self {
        Self {
            lead_fraction: 0.1,
            medium_fraction: 0.2,
            lead: 1.0,
            medium: 0.7,
            baseline: 0.3,
            short_document: 3,
        }
    }
}

impl Default for PositionWeights {
    fn default() -> Self {
        Self::new()
    }
}

/// Summarizer configuration, fixed once the engine is built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Hybrid combination weights
    pub hybrid: HybridWeights,

    /// Position scorer bands
    pub position: PositionWeights,

    /// Tokens shorter than this many characters are dropped
    pub min_token_chars: usize,

    /// Replacement stop-word list (built-in English list when absent)
    pub stop_words: Option<Vec<String>>,

    /// Words added on top of the stop-word list
    pub extra_stop_words: Vec<String>,
}

impl SummarizerConfig {
    pub fn new() -> Self {
        Self {
            hybrid: HybridWeights::new(),
            position: PositionWeights::new(),
            min_token_chars: 1,
            stop_words: None,
            extra_stop_words: Vec::new(),
        }
    }

    /// Parse a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Resolve the stop-word set this config describes
    pub fn build_stop_words(&self) -> StopWords {
        let mut stop_words = match &self.stop_words {
            Some(list) => StopWords::from_list(list),
            None => StopWords::new(),
        };
        stop_words.extend(&self.extra_stop_words);
        stop_words
    }
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SummarizerConfig::new();
        assert_eq!(config.hybrid.tfidf, 0.5);
        assert_eq!(config.hybrid.frequency, 0.3);
        assert_eq!(config.hybrid.position, 0.2);
        assert_eq!(config.position.lead, 1.0);
        assert_eq!(config.position.medium, 0.7);
        assert_eq!(config.position.baseline, 0.3);
        assert_eq!(config.min_token_chars, 1);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            SummarizerConfig::from_json(r#"{"min_token_chars": 3, "hybrid": {"tfidf": 0.6}}"#)
                .unwrap();
        assert_eq!(config.min_token_chars, 3);
        assert_eq!(config.hybrid.tfidf, 0.6);
        assert_eq!(config.hybrid.frequency, 0.3);
        assert_eq!(config.position, PositionWeights::new());
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = SummarizerConfig::from_json("{}").unwrap();
        assert_eq!(config, SummarizerConfig::default());
    }

    #[test]
    fn test_build_stop_words() {
        let config = SummarizerConfig {
            stop_words: Some(vec!["alpha".to_string()]),
            extra_stop_words: vec!["Beta".to_string()],
            ..SummarizerConfig::new()
        };
        let stop_words = config.build_stop_words();
        assert_eq!(stop_words.len(), 2);
        assert!(stop_words.contains("alpha"));
        assert!(stop_words.contains("beta"));
        assert!(!stop_words.contains("the"));

        let defaults = SummarizerConfig::new().build_stop_words();
        assert!(defaults.contains("the"));
    }
}
