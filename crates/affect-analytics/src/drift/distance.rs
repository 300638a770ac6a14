//! Distances between emotion distributions.
//!
//! All sums iterate the label union in first-seen order (left operand
//! first), so identical inputs give bit-identical results.

use affect_core::models::EmotionDistribution;

/// `0.5 * Σ |p(l) - q(l)|` over the label union. Range [0, 1].
pub fn total_variation_distance(p: &EmotionDistribution, q: &EmotionDistribution) -> f64 {
    let sum: f64 = p
        .union_labels(q)
        .into_iter()
        .map(|label| (p.get(label) - q.get(label)).abs())
        .sum();
    sum / 2.0
}

/// `Σ min(p(l), q(l))` over the label union. 1.0 for identical
/// distributions, 0.0 for disjoint support.
pub fn overlap_coefficient(p: &EmotionDistribution, q: &EmotionDistribution) -> f64 {
    p.union_labels(q)
        .into_iter()
        .map(|label| p.get(label).min(q.get(label)))
        .sum()
}

/// Square root of the base-2 Jensen-Shannon divergence. Range [0, 1].
pub fn jensen_shannon_distance(p: &EmotionDistribution, q: &EmotionDistribution) -> f64 {
    let mut divergence = 0.0;
    for label in p.union_labels(q) {
        let (pl, ql) = (p.get(label), q.get(label));
        let m = (pl + ql) / 2.0;
        divergence += 0.5 * kl_term(pl, m) + 0.5 * kl_term(ql, m);
    }
    divergence.max(0.0).sqrt().min(1.0)
}

fn kl_term(x: f64, m: f64) -> f64 {
    if x <= 0.0 || m <= 0.0 {
        0.0
    } else {
        x * (x / m).log2()
    }
}
