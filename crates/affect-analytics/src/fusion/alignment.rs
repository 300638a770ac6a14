//! Working sets for alignment scoring.

use affect_core::models::CanonicalLabel;

/// Labels used for alignment: `neutral` excluded.
///
/// A channel that was entirely neutral becomes a single synthetic
/// `neutral` entry so its distribution is never empty.
pub fn working_set(labels: &[CanonicalLabel]) -> Vec<CanonicalLabel> {
    let non_neutral: Vec<CanonicalLabel> = labels
        .iter()
        .filter(|l| **l != CanonicalLabel::Neutral)
        .cloned()
        .collect();
    if non_neutral.is_empty() {
        return vec![CanonicalLabel::Neutral];
    }
    non_neutral
}
