//! Distribution builder: label counts to probabilities.

use std::collections::HashMap;

use affect_core::models::{CanonicalLabel, EmotionDistribution};

/// Count labels, keeping first-seen order.
pub fn count_labels(labels: &[CanonicalLabel]) -> Vec<(CanonicalLabel, usize)> {
    let mut index: HashMap<&CanonicalLabel, usize> = HashMap::new();
    let mut counts: Vec<(CanonicalLabel, usize)> = Vec::new();
    for label in labels {
        match index.get(label) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(label, counts.len());
                counts.push((label.clone(), 1));
            }
        }
    }
    counts
}

/// Probability of each label = count / total.
///
/// Empty input yields an empty distribution; callers treat that as
/// "no data" and never divide by its total.
pub fn build_distribution(labels: &[CanonicalLabel]) -> EmotionDistribution {
    if labels.is_empty() {
        return EmotionDistribution::default();
    }
    let total = labels.len() as f64;
    EmotionDistribution::from_entries(
        count_labels(labels)
            .into_iter()
            .map(|(label, count)| (label, count as f64 / total))
            .collect(),
    )
}

/// Label with the highest probability. Ties go to the first-inserted label.
pub fn dominant(distribution: &EmotionDistribution) -> Option<CanonicalLabel> {
    let mut best: Option<(&CanonicalLabel, f64)> = None;
    for (label, probability) in distribution.iter() {
        match best {
            Some((_, p)) if probability <= p => {}
            _ => best = Some((label, probability)),
        }
    }
    best.map(|(label, _)| label.clone())
}

/// Most frequent label in a count list. Ties go to the first-seen label.
pub fn most_common(counts: &[(CanonicalLabel, usize)]) -> Option<CanonicalLabel> {
    let mut best: Option<&(CanonicalLabel, usize)> = None;
    for entry in counts {
        match best {
            Some((_, c)) if entry.1 <= *c => {}
            _ => best = Some(entry),
        }
    }
    best.map(|(label, _)| label.clone())
}
