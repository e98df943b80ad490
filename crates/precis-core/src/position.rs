//! Structural position scoring

use crate::config::PositionWeights;
use crate::types::ScoreVector;

/// Weight each of `count` sentences by distance from the nearer document edge
pub fn score(count: usize, weights: &PositionWeights) -> ScoreVector {
    if count <= weights.short_document {
        return vec![weights.lead; count];
    }

    let lead_band = band(count, weights.lead_fraction).max(1);
    let medium_band = band(count, weights.medium_fraction).max(lead_band);

    (0..count)
        .map(|index| {
            let distance = index.min(count - 1 - index);
            if distance < lead_band {
                weights.lead
            } else if distance < medium_band {
                weights.medium
            } else {
                weights.baseline
            }
        })
        .collect()
}

fn band(count: usize, fraction: f64) -> usize {
    (count as f64 * fraction).round().max(0.0) as usize
}
