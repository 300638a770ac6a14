//! Cross-modal fusion results.

use serde::{Deserialize, Serialize};

use super::{Modality, SeverityAssessment};

/// Full fusion analysis over both channels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusionResult {
    /// Overlap coefficient of the text and face distributions, 2 decimals.
    pub alignment_score: f64,
    pub masking_detected: bool,
    pub masking_details: Vec<String>,
    /// `1 - switch_rate` over the merged stream, 2 decimals.
    pub stability_score: f64,
    pub dominant_modality: Modality,
    pub severity: SeverityAssessment,
}

/// Terminal result when either channel has no observations in the window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsufficientData {
    pub alignment_score: f64,
    pub masking_detected: bool,
    pub stability_score: f64,
    pub message: String,
}

/// Either a complete analysis or the insufficient-data result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FusionOutcome {
    Analyzed(FusionResult),
    InsufficientData(InsufficientData),
}

impl FusionOutcome {
    pub fn insufficient(message: &str) -> Self {
        Self::InsufficientData(InsufficientData {
            alignment_score: 0.0,
            masking_detected: false,
            stability_score: 0.0,
            message: message.to_string(),
        })
    }

    pub fn is_analyzed(&self) -> bool {
        matches!(self, Self::Analyzed(_))
    }

    /// The full result, if both channels had data.
    pub fn result(&self) -> Option<&FusionResult> {
        match self {
            Self::Analyzed(result) => Some(result),
            Self::InsufficientData(_) => None,
        }
    }

    pub fn alignment_score(&self) -> f64 {
        match self {
            Self::Analyzed(r) => r.alignment_score,
            Self::InsufficientData(r) => r.alignment_score,
        }
    }

    pub fn stability_score(&self) -> f64 {
        match self {
            Self::Analyzed(r) => r.stability_score,
            Self::InsufficientData(r) => r.stability_score,
        }
    }

    pub fn masking_detected(&self) -> bool {
        match self {
            Self::Analyzed(r) => r.masking_detected,
            Self::InsufficientData(r) => r.masking_detected,
        }
    }
}
