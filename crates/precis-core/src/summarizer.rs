//! Summarization entry point: tokenize, score, select

use crate::config::SummarizerConfig;
use crate::error::{Result, SummarizeError};
use crate::stats::{summary_stats, SummaryStats};
use crate::text::Tokenizer;
use crate::types::{Method, ScoreVector, ScoredSentence, Sentence, Summary};
use crate::{frequency, hybrid, position, selector, tfidf};
use tracing::debug;

/// Extractive summarizer holding an immutable configuration
///
/// Every call builds its own frequency tables, so one instance can be shared
/// across threads.
#[derive(Debug, Clone)]
pub struct Summarizer {
    config: SummarizerConfig,
    tokenizer: Tokenizer,
}

impl Summarizer {
    pub fn new(config: SummarizerConfig) -> Self {
        let tokenizer = Tokenizer::from_config(&config);
        Self { config, tokenizer }
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summary text: the selected sentences in document order, space-joined
    pub fn summarize(&self, text: &str, num_sentences: usize, method: Method) -> Result<String> {
        self.summarize_detailed(text, num_sentences, method)
            .map(|summary| summary.text())
    }

    /// Like [`Summarizer::summarize`] with the method given by name
    pub fn summarize_by_name(
        &self,
        text: &str,
        num_sentences: usize,
        method: &str,
    ) -> Result<String> {
        let method: Method = method.parse()?;
        self.summarize(text, num_sentences, method)
    }

    /// Selected sentences with their scores
    pub fn summarize_detailed(
        &self,
        text: &str,
        num_sentences: usize,
        method: Method,
    ) -> Result<Summary> {
        let sentences = self.sentences(text)?;
        let scores = self.score_sentences(&sentences, method);

        let k = num_sentences.min(sentences.len());
        let selected = selector::select_top(&scores, k);
        debug!(
            method = %method,
            total = sentences.len(),
            requested = num_sentences,
            selected = selected.len(),
            "selected sentences"
        );

        let total_sentences = sentences.len();
        let mut sentences: Vec<Option<Sentence>> = sentences.into_iter().map(Some).collect();
        let chosen = selected
            .into_iter()
            .filter_map(|index| {
                sentences[index].take().map(|sentence| ScoredSentence {
                    index,
                    text: sentence.text,
                    score: scores[index],
                })
            })
            .collect();

        Ok(Summary {
            method,
            total_sentences,
            sentences: chosen,
        })
    }

    /// Every sentence with its score, in document order
    pub fn score(&self, text: &str, method: Method) -> Result<Vec<ScoredSentence>> {
        let sentences = self.sentences(text)?;
        let scores = self.score_sentences(&sentences, method);
        Ok(sentences
            .into_iter()
            .zip(scores)
            .map(|(sentence, score)| ScoredSentence {
                index: sentence.index,
                text: sentence.text,
                score,
            })
            .collect())
    }

    pub fn summary_stats(&self, original: &str, summary: &str) -> SummaryStats {
        summary_stats(original, summary)
    }

    fn sentences(&self, text: &str) -> Result<Vec<Sentence>> {
        let sentences = self.tokenizer.sentences(text);
        if sentences.is_empty() {
            return Err(SummarizeError::EmptyInput);
        }
        debug!(count = sentences.len(), "tokenized sentences");
        Ok(sentences)
    }

    fn score_sentences(&self, sentences: &[Sentence], method: Method) -> ScoreVector {
        match method {
            Method::Frequency => frequency::score(sentences),
            Method::TfIdf => tfidf::score(sentences),
            Method::Position => position::score(sentences.len(), &self.config.position),
            Method::Hybrid => hybrid::combine(
                &tfidf::score(sentences),
                &frequency::score(sentences),
                &position::score(sentences.len(), &self.config.position),
                &self.config.hybrid,
            ),
        }
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new(SummarizerConfig::default())
    }
}
