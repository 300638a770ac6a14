//! Descriptive statistics over a batch of observations.

use affect_core::constants::CONFIDENCE_DECIMALS;
use affect_core::models::{EmotionObservation, EmotionStats, LabelCount};
use affect_core::numeric::round_to;

use crate::distribution::{count_labels, most_common};
use crate::normalize::Normalizer;

/// Counts, dominant label and mean confidence. Empty input yields zeroed stats.
pub fn summarize(observations: &[EmotionObservation], normalizer: &Normalizer) -> EmotionStats {
    let labels = normalizer.normalize_all(observations);
    let counts = count_labels(&labels);
    let dominant = most_common(&counts);

    let average_confidence = if observations.is_empty() {
        0.0
    } else {
        let sum: f64 = observations.iter().map(|o| o.confidence).sum();
        round_to(sum / observations.len() as f64, CONFIDENCE_DECIMALS)
    };

    EmotionStats {
        distribution: counts
            .into_iter()
            .map(|(label, count)| LabelCount { label, count })
            .collect(),
        dominant,
        total: observations.len(),
        average_confidence,
    }
}
