use chrono::{DateTime, Utc};

use crate::models::{
    CanonicalLabel, DriftResult, EmotionObservation, FusionOutcome, SeverityAssessment,
};

/// Distributional drift between an old and a new label window.
pub trait IDriftDetector: Send + Sync {
    fn detect_drift(&self, old: &[CanonicalLabel], new: &[CanonicalLabel]) -> DriftResult;
}

/// Folds drift and volatility into a leveled risk verdict.
pub trait ISeverityScorer: Send + Sync {
    fn assess_severity(
        &self,
        drift: &DriftResult,
        volatility: f64,
        window_days: u32,
    ) -> SeverityAssessment;
}

/// Cross-references the text and face channels.
pub trait IFusionAnalyzer: Send + Sync {
    /// Analyze observations from the `window_days` ending at `now`.
    fn analyze_fusion_at(
        &self,
        text: &[EmotionObservation],
        face: &[EmotionObservation],
        window_days: u32,
        now: DateTime<Utc>,
    ) -> FusionOutcome;

    /// Analyze observations from the `window_days` ending now.
    fn analyze_fusion(
        &self,
        text: &[EmotionObservation],
        face: &[EmotionObservation],
        window_days: u32,
    ) -> FusionOutcome {
        self.analyze_fusion_at(text, face, window_days, Utc::now())
    }
}
