//! Weighted random selection
//!
//! Draws an index from a discrete distribution given as a slice of
//! non-negative weights.

use rand::Rng;

/// Pick an index with probability `weights[i] / sum(weights)`.
///
/// A uniform value in `[0, sum)` is drawn and the weights are subtracted in
/// order until the remainder reaches zero. Zero-weight entries are never
/// returned. When the weights sum to zero (or below) the last index is
/// returned; an empty slice yields 0.
pub fn weighted_index<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> usize {
    let last = weights.len().saturating_sub(1);
    let total: f64 = weights.iter().sum();

    if !(total > 0.0) {
        return last;
    }

    let mut remaining = rng.gen_range(0.0..total);
    for (index, weight) in weights.iter().enumerate() {
        remaining -= weight;
        if remaining <= 0.0 && *weight > 0.0 {
            return index;
        }
    }

    last
}
