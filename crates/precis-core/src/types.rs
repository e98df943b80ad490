//! Core types for sentence scoring and selection

use crate::error::SummarizeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentence scoring strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Normalized word-frequency mass
    Frequency,
    /// Term frequency times inverse sentence frequency
    TfIdf,
    /// Lead/tail structural weight
    Position,
    /// Weighted blend of the other three
    #[default]
    Hybrid,
}

impl Method {
    pub const ALL: [Method; 4] = [
        Method::Frequency,
        Method::TfIdf,
        Method::Position,
        Method::Hybrid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Frequency => "frequency",
            Method::TfIdf => "tfidf",
            Method::Position => "position",
            Method::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = SummarizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "frequency" => Ok(Method::Frequency),
            "tfidf" => Ok(Method::TfIdf),
            "position" => Ok(Method::Position),
            "hybrid" => Ok(Method::Hybrid),
            other => Err(SummarizeError::InvalidMethod(other.to_string())),
        }
    }
}

/// A sentence of the input document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Position in the document, never reassigned
    pub index: usize,
    /// Verbatim normalized text including terminal punctuation
    pub text: String,
    /// Lower-cased content words, stop words removed, duplicates kept
    pub tokens: Vec<String>,
}

/// One score per sentence, indexed by `Sentence::index`
pub type ScoreVector = Vec<f64>;

/// A sentence paired with the score it received
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSentence {
    pub index: usize,
    pub text: String,
    pub score: f64,
}

/// Result of a summarization call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub method: Method,
    /// Total sentences in the source document
    pub total_sentences: usize,
    /// Selected sentences in ascending document order
    pub sentences: Vec<ScoredSentence>,
}

impl Summary {
    /// Selected sentences joined by a single space
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }
}
