//! Fusion analyzer: cross-references the text and face channels.
//!
//! Pipeline: window filter → normalize → neutral-excluded distributions →
//! alignment + masking → chronological merge → stability → midpoint drift
//! → severity.

pub mod alignment;
pub mod masking;
pub mod stability;
pub mod window;

use chrono::{DateTime, Utc};

use affect_core::config::AffectConfig;
use affect_core::constants::{FUSION_SCORE_DECIMALS, INSUFFICIENT_DATA_MESSAGE};
use affect_core::models::{EmotionObservation, FusionOutcome, FusionResult, Modality};
use affect_core::numeric::round_to;
use affect_observability::tracing_setup::events;

use crate::distribution::build_distribution;
use crate::drift::{detect_drift, overlap_coefficient};
use crate::normalize::Normalizer;
use crate::severity;

pub use masking::MaskingVerdict;
pub use stability::TimedLabel;

/// Fusion outcome plus whether the embedded severity was dampened.
#[derive(Debug, Clone, PartialEq)]
pub struct FusionEvaluation {
    pub outcome: FusionOutcome,
    pub severity_dampened: bool,
}

/// Analyze both channels over the `window_days` ending at `now`.
pub fn analyze_fusion_at(
    text: &[EmotionObservation],
    face: &[EmotionObservation],
    window_days: u32,
    now: DateTime<Utc>,
    normalizer: &Normalizer,
    config: &AffectConfig,
) -> FusionOutcome {
    evaluate(text, face, window_days, now, normalizer, config).outcome
}

/// [`analyze_fusion_at`] with the severity dampening flag kept.
pub fn evaluate(
    text: &[EmotionObservation],
    face: &[EmotionObservation],
    window_days: u32,
    now: DateTime<Utc>,
    normalizer: &Normalizer,
    config: &AffectConfig,
) -> FusionEvaluation {
    let recent_text = window::within_window(text, window_days, now);
    let recent_face = window::within_window(face, window_days, now);

    if recent_text.is_empty() || recent_face.is_empty() {
        events::insufficient_data(recent_text.len(), recent_face.len(), window_days);
        return FusionEvaluation {
            outcome: FusionOutcome::insufficient(INSUFFICIENT_DATA_MESSAGE),
            severity_dampened: false,
        };
    }

    let text_labels = normalizer.normalize_all(recent_text.iter().copied());
    let face_labels = normalizer.normalize_all(recent_face.iter().copied());

    let text_dist = build_distribution(&alignment::working_set(&text_labels));
    let face_dist = build_distribution(&alignment::working_set(&face_labels));
    let alignment_score = overlap_coefficient(&text_dist, &face_dist);

    let masking = masking::detect_masking(&text_dist, &face_dist, &config.fusion);

    let stream = stability::merge_chronological(
        recent_text.iter().map(|o| o.timestamp).zip(text_labels),
        recent_face.iter().map(|o| o.timestamp).zip(face_labels),
    );
    let stability_score = stability::stability_score(&stream);

    let dominant_modality = if recent_face.len() > recent_text.len() {
        Modality::Face
    } else {
        Modality::Text
    };

    let labels: Vec<_> = stream.into_iter().map(|e| e.label).collect();
    let (old, new) = labels.split_at(labels.len() / 2);
    let drift = detect_drift(old, new, &config.drift);
    let volatility = 1.0 - stability_score;
    let severity = severity::evaluate(&drift, volatility, window_days, &config.severity);

    tracing::debug!(
        text_count = recent_text.len(),
        face_count = recent_face.len(),
        alignment = alignment_score,
        stability = stability_score,
        masking = masking.detected,
        level = %severity.assessment.level,
        "fusion analyzed"
    );

    FusionEvaluation {
        outcome: FusionOutcome::Analyzed(FusionResult {
            alignment_score: round_to(alignment_score, FUSION_SCORE_DECIMALS),
            masking_detected: masking.detected,
            masking_details: masking.details,
            stability_score: round_to(stability_score, FUSION_SCORE_DECIMALS),
            dominant_modality,
            severity: severity.assessment,
        }),
        severity_dampened: severity.dampened,
    }
}
