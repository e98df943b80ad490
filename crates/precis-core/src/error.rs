//! Error types for the summarization engine

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummarizeError {
    /// Method name is not one of frequency, tfidf, position, hybrid
    #[error("unknown summarization method: {0:?} (expected frequency, tfidf, position or hybrid)")]
    InvalidMethod(String),

    /// Input has no extractable sentences
    #[error("input text contains no sentences")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, SummarizeError>;
