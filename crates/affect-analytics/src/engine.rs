//! [`AffectEngine`]: validated config, normalizer and counters behind one facade.

use chrono::{DateTime, Utc};
use rayon::prelude::*;

use affect_core::config::AffectConfig;
use affect_core::errors::AffectResult;
use affect_core::models::{
    Advice, CanonicalLabel, ConversationSummary, DriftResult, EmotionDistribution,
    EmotionObservation, EmotionStats, FusionOutcome, SeverityAssessment, TimelineDrift,
    TimelineWindow,
};
use affect_core::traits::{IDriftDetector, IFusionAnalyzer, ISeverityScorer};
use affect_observability::{AnalyticsMetrics, MetricsSnapshot};

use crate::normalize::Normalizer;
use crate::{advice, distribution, drift, fusion, severity, stats, timeline};

/// One subject's observations for batch fusion analysis.
#[derive(Debug, Clone)]
pub struct FusionRequest {
    pub text: Vec<EmotionObservation>,
    pub face: Vec<EmotionObservation>,
    pub window_days: u32,
}

/// Stateless analytics over caller-supplied observations.
///
/// Holds no per-request state; one engine can serve concurrent requests.
#[derive(Debug)]
pub struct AffectEngine {
    config: AffectConfig,
    normalizer: Normalizer,
    metrics: AnalyticsMetrics,
}

impl AffectEngine {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        let config = AffectConfig::default();
        Self {
            normalizer: Normalizer::from_config(&config.normalizer),
            config,
            metrics: AnalyticsMetrics::new(),
        }
    }

    /// Create an engine from a configuration, validating it first.
    pub fn with_config(config: AffectConfig) -> AffectResult<Self> {
        config.validate()?;
        Ok(Self {
            normalizer: Normalizer::from_config(&config.normalizer),
            config,
            metrics: AnalyticsMetrics::new(),
        })
    }

    /// Create an engine from a TOML document.
    pub fn from_toml(source: &str) -> AffectResult<Self> {
        Self::with_config(AffectConfig::from_toml(source)?)
    }

    pub fn config(&self) -> &AffectConfig {
        &self.config
    }

    pub fn normalize(&self, raw: Option<&str>) -> CanonicalLabel {
        self.normalizer.normalize(raw)
    }

    pub fn build_distribution(&self, labels: &[CanonicalLabel]) -> EmotionDistribution {
        distribution::build_distribution(labels)
    }

    pub fn dominant(&self, distribution: &EmotionDistribution) -> Option<CanonicalLabel> {
        distribution::dominant(distribution)
    }

    /// Fusion over the configured default window ending now.
    pub fn analyze_fusion_default(
        &self,
        text: &[EmotionObservation],
        face: &[EmotionObservation],
    ) -> FusionOutcome {
        self.analyze_fusion(text, face, self.config.fusion.default_window_days)
    }

    /// Fusion for many independent subjects, evaluated in parallel.
    /// Results come back in request order.
    pub fn analyze_fusion_batch(
        &self,
        requests: &[FusionRequest],
        now: DateTime<Utc>,
    ) -> Vec<FusionOutcome> {
        requests
            .par_iter()
            .map(|r| self.analyze_fusion_at(&r.text, &r.face, r.window_days, now))
            .collect()
    }

    /// Bucket observations with the configured timeline width.
    pub fn build_timeline(&self, observations: &[EmotionObservation]) -> Vec<TimelineWindow> {
        timeline::build_timeline(observations, self.config.timeline.bucket, &self.normalizer)
    }

    /// Bucket observations and scan consecutive windows for drift.
    pub fn scan_timeline(&self, observations: &[EmotionObservation]) -> TimelineDrift {
        let windows = self.build_timeline(observations);
        timeline::scan_drift(&windows, self.config.timeline.sigma)
    }

    pub fn summarize(&self, observations: &[EmotionObservation]) -> EmotionStats {
        stats::summarize(observations, &self.normalizer)
    }

    /// Summary and advice for a conversation's raw classifier labels, in
    /// message order. `None` when no message carried a usable label.
    pub fn advise(&self, raw_labels: &[Option<&str>]) -> Option<(ConversationSummary, Advice)> {
        let labels: Vec<CanonicalLabel> = raw_labels
            .iter()
            .map(|raw| self.normalizer.normalize(*raw))
            .collect();
        advice::advise(&labels)
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

impl Default for AffectEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IDriftDetector for AffectEngine {
    fn detect_drift(&self, old: &[CanonicalLabel], new: &[CanonicalLabel]) -> DriftResult {
        let result = drift::detect_drift(old, new, &self.config.drift);
        self.metrics.record_drift_check(result.drift);
        result
    }
}

impl ISeverityScorer for AffectEngine {
    fn assess_severity(
        &self,
        drift: &DriftResult,
        volatility: f64,
        window_days: u32,
    ) -> SeverityAssessment {
        let evaluation = severity::evaluate(drift, volatility, window_days, &self.config.severity);
        self.metrics
            .record_severity(evaluation.dampened, evaluation.assessment.recommend_support);
        evaluation.assessment
    }
}

impl IFusionAnalyzer for AffectEngine {
    fn analyze_fusion_at(
        &self,
        text: &[EmotionObservation],
        face: &[EmotionObservation],
        window_days: u32,
        now: DateTime<Utc>,
    ) -> FusionOutcome {
        let evaluation =
            fusion::evaluate(text, face, window_days, now, &self.normalizer, &self.config);
        match evaluation.outcome.result() {
            Some(result) => {
                self.metrics.record_fusion(Some(result.masking_detected));
                self.metrics.record_severity(
                    evaluation.severity_dampened,
                    result.severity.recommend_support,
                );
            }
            None => self.metrics.record_fusion(None),
        }
        evaluation.outcome
    }
}
