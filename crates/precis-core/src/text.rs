//! Text normalization and sentence/word tokenization

use crate::config::SummarizerConfig;
use crate::stopwords::StopWords;
use crate::types::Sentence;
use regex::Regex;
use std::sync::OnceLock;

static BOUNDARY_RE: OnceLock<Regex> = OnceLock::new();

/// Collapse whitespace runs to a single space and trim both ends
pub fn preprocess(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split text into sentences, keeping terminal punctuation attached
///
/// A run of `.`, `!` or `?` ends a sentence when it is followed by whitespace
/// or the end of input, so `3.5` and `node.js` stay whole. Fragments with no
/// alphanumeric content are dropped. Input is normalized first.
pub fn split_sentences(text: &str) -> Vec<String> {
    let normalized = preprocess(text);
    let re = BOUNDARY_RE.get_or_init(|| Regex::new(r"[.!?]+(?:\s+|$)").unwrap());

    let mut sentences = Vec::new();
    let mut start = 0;
    for m in re.find_iter(&normalized) {
        push_fragment(&mut sentences, &normalized[start..m.end()]);
        start = m.end();
    }
    push_fragment(&mut sentences, &normalized[start..]);
    sentences
}

fn push_fragment(sentences: &mut Vec<String>, fragment: &str) {
    let fragment = fragment.trim();
    if fragment.chars().any(char::is_alphanumeric) {
        sentences.push(fragment.to_string());
    }
}

/// Word tokenizer bound to a stop-word set
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stop_words: StopWords,
    min_token_chars: usize,
}

impl Tokenizer {
    pub fn new(stop_words: StopWords, min_token_chars: usize) -> Self {
        Self {
            stop_words,
            min_token_chars,
        }
    }

    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self::new(config.build_stop_words(), config.min_token_chars)
    }

    /// Lower-cased content words of a sentence, in order, duplicates kept
    pub fn tokenize(&self, sentence: &str) -> Vec<String> {
        sentence
            .split_whitespace()
            .filter_map(|raw| {
                let word = raw
                    .to_lowercase()
                    .trim_matches(|c: char| !c.is_alphanumeric())
                    .to_string();
                let keep = !word.is_empty()
                    && word.chars().count() >= self.min_token_chars
                    && !self.stop_words.contains(&word);
                keep.then_some(word)
            })
            .collect()
    }

    /// Full pipeline: normalize, split into sentences, tokenize each
    pub fn sentences(&self, text: &str) -> Vec<Sentence> {
        split_sentences(text)
            .into_iter()
            .enumerate()
            .map(|(index, text)| Sentence {
                index,
                tokens: self.tokenize(&text),
                text,
            })
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(StopWords::new(), 1)
    }
}
