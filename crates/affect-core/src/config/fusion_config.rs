use serde::{Deserialize, Serialize};

use super::defaults;

/// Fusion analyzer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    /// Face negative share that must be exceeded for masking.
    pub masking_face_negative_threshold: f64,
    /// Text positive/neutral share that must be exceeded for masking.
    pub masking_text_positive_threshold: f64,
    /// Window used when a caller does not pass one.
    pub default_window_days: u32,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            masking_face_negative_threshold: defaults::DEFAULT_MASKING_FACE_NEGATIVE_THRESHOLD,
            masking_text_positive_threshold: defaults::DEFAULT_MASKING_TEXT_POSITIVE_THRESHOLD,
            default_window_days: defaults::DEFAULT_FUSION_WINDOW_DAYS,
        }
    }
}
