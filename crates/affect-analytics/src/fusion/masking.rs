//! Masking: negative facial affect behind positive/neutral text.

use affect_core::config::FusionConfig;
use affect_core::constants::{MASKING_DETAIL, NEGATIVE_LABELS, POSITIVE_OR_NEUTRAL_LABELS};
use affect_core::models::EmotionDistribution;
use affect_observability::tracing_setup::events;

/// Masking decision with the shares that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskingVerdict {
    pub detected: bool,
    pub face_negative_share: f64,
    pub text_positive_share: f64,
    pub details: Vec<String>,
}

/// Fires when the face negative share exceeds
/// `masking_face_negative_threshold` and the text positive/neutral share
/// exceeds `masking_text_positive_threshold`. Both comparisons are strict.
pub fn detect_masking(
    text: &EmotionDistribution,
    face: &EmotionDistribution,
    config: &FusionConfig,
) -> MaskingVerdict {
    let face_negative_share = face.mass_of(&NEGATIVE_LABELS);
    let text_positive_share = text.mass_of(&POSITIVE_OR_NEUTRAL_LABELS);

    let detected = face_negative_share > config.masking_face_negative_threshold
        && text_positive_share > config.masking_text_positive_threshold;

    let mut details = Vec::new();
    if detected {
        details.push(MASKING_DETAIL.to_string());
        events::masking_detected(face_negative_share, text_positive_share);
    }

    MaskingVerdict {
        detected,
        face_negative_share,
        text_positive_share,
        details,
    }
}
