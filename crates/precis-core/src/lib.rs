//! Extractive summarization engine
//!
//! Scores the sentences of a single document with one of four strategies and
//! returns the top-ranked ones, verbatim, in their original order.

mod config;
mod error;
mod frequency;
mod hybrid;
mod position;
mod selector;
mod stats;
mod stopwords;
mod summarizer;
mod text;
mod tfidf;
mod types;

pub use config::{HybridWeights, PositionWeights, SummarizerConfig};
pub use error::{Result, SummarizeError};
pub use selector::clamp_count;
pub use stats::{summary_stats, SummaryStats};
pub use stopwords::{StopWords, DEFAULT_STOP_WORDS};
pub use summarizer::Summarizer;
pub use text::{preprocess, split_sentences, Tokenizer};
pub use types::{Method, ScoreVector, ScoredSentence, Sentence, Summary};
