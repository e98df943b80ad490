//! Top-k sentence selection

use std::cmp::Ordering;

/// Clamp a caller-supplied sentence count into `0..=total`
///
/// Negative counts select nothing and oversized counts select everything;
/// neither is an error.
pub fn clamp_count(requested: i64, total: usize) -> usize {
    if requested <= 0 {
        0
    } else {
        usize::try_from(requested).map_or(total, |n| n.min(total))
    }
}

/// Indices of the `k` highest scores, returned in ascending index order
///
/// Equal scores prefer the earlier sentence.
pub fn select_top(scores: &[f64], k: usize) -> Vec<usize> {
    let mut ranked: Vec<usize> = (0..scores.len()).collect();
    ranked.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b))
    });
    ranked.truncate(k);
    ranked.sort_unstable();
    ranked
}
