use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Channel an observation was classified from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    /// Self-reported or text-derived emotion.
    Text,
    /// Facial-image-derived emotion.
    Face,
}

/// A time-stamped classifier output. Read-only input to every analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionObservation {
    pub timestamp: DateTime<Utc>,
    /// Label exactly as the classifier produced it.
    pub raw_label: Option<String>,
    /// Classifier confidence in [0.0, 1.0].
    pub confidence: f64,
    pub modality: Modality,
}

impl EmotionObservation {
    pub fn new(
        timestamp: DateTime<Utc>,
        raw_label: Option<&str>,
        confidence: f64,
        modality: Modality,
    ) -> Self {
        Self {
            timestamp,
            raw_label: raw_label.map(str::to_string),
            confidence: confidence.clamp(0.0, 1.0),
            modality,
        }
    }

    pub fn text(timestamp: DateTime<Utc>, raw_label: &str, confidence: f64) -> Self {
        Self::new(timestamp, Some(raw_label), confidence, Modality::Text)
    }

    pub fn face(timestamp: DateTime<Utc>, raw_label: &str, confidence: f64) -> Self {
        Self::new(timestamp, Some(raw_label), confidence, Modality::Face)
    }
}
