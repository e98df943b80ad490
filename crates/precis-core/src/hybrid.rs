//! Weighted combination of the frequency, TF-ISF and position scorers

use crate::config::HybridWeights;
use crate::types::ScoreVector;

/// Sum in ascending order so equal multisets of terms give identical bits
pub fn ordered_sum(mut terms: Vec<f64>) -> f64 {
    terms.sort_by(f64::total_cmp);
    terms.into_iter().sum()
}

/// Divide by the vector's maximum; an all-zero vector stays zero
pub fn max_normalize(scores: &[f64]) -> ScoreVector {
    let max = scores.iter().copied().fold(0.0f64, f64::max);
    if max > 0.0 {
        scores.iter().map(|s| s / max).collect()
    } else {
        vec![0.0; scores.len()]
    }
}

pub fn combine(
    tfidf: &[f64],
    frequency: &[f64],
    position: &[f64],
    weights: &HybridWeights,
) -> ScoreVector {
    let tfidf = max_normalize(tfidf);
    let frequency = max_normalize(frequency);
    let position = max_normalize(position);

    tfidf
        .iter()
        .zip(&frequency)
        .zip(&position)
        .map(|((t, f), p)| weights.tfidf * t + weights.frequency * f + weights.position * p)
        .collect()
}
