use serde::{Deserialize, Serialize};

use super::CanonicalLabel;

/// Occurrences of one label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCount {
    pub label: CanonicalLabel,
    pub count: usize,
}

/// Descriptive statistics over one batch of observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionStats {
    /// Raw counts in first-seen order.
    pub distribution: Vec<LabelCount>,
    /// Most frequent label; `None` for an empty batch.
    pub dominant: Option<CanonicalLabel>,
    pub total: usize,
    /// Mean classifier confidence, 2 decimals; 0.0 for an empty batch.
    pub average_confidence: f64,
}
