//! Analysis counters.
//!
//! [`AnalyticsMetrics`] is shared by `&self` analytics calls, so every
//! counter is an atomic; [`MetricsSnapshot`] is the serializable view.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Lock-free counters owned by an analytics engine.
#[derive(Debug, Default)]
pub struct AnalyticsMetrics {
    drift_checks: AtomicU64,
    drifts_flagged: AtomicU64,
    fusion_analyses: AtomicU64,
    insufficient_data: AtomicU64,
    masking_detections: AtomicU64,
    severity_assessments: AtomicU64,
    dampened_assessments: AtomicU64,
    support_recommendations: AtomicU64,
}

/// Point-in-time copy of [`AnalyticsMetrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub drift_checks: u64,
    pub drifts_flagged: u64,
    pub fusion_analyses: u64,
    pub insufficient_data: u64,
    pub masking_detections: u64,
    pub severity_assessments: u64,
    pub dampened_assessments: u64,
    pub support_recommendations: u64,
}

impl AnalyticsMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_drift_check(&self, flagged: bool) {
        self.drift_checks.fetch_add(1, Ordering::Relaxed);
        if flagged {
            self.drifts_flagged.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a fusion request. `masking` is `None` for insufficient data.
    pub fn record_fusion(&self, masking: Option<bool>) {
        self.fusion_analyses.fetch_add(1, Ordering::Relaxed);
        match masking {
            None => {
                self.insufficient_data.fetch_add(1, Ordering::Relaxed);
            }
            Some(true) => {
                self.masking_detections.fetch_add(1, Ordering::Relaxed);
            }
            Some(false) => {}
        }
    }

    pub fn record_severity(&self, dampened: bool, recommend_support: bool) {
        self.severity_assessments.fetch_add(1, Ordering::Relaxed);
        if dampened {
            self.dampened_assessments.fetch_add(1, Ordering::Relaxed);
        }
        if recommend_support {
            self.support_recommendations.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            drift_checks: self.drift_checks.load(Ordering::Relaxed),
            drifts_flagged: self.drifts_flagged.load(Ordering::Relaxed),
            fusion_analyses: self.fusion_analyses.load(Ordering::Relaxed),
            insufficient_data: self.insufficient_data.load(Ordering::Relaxed),
            masking_detections: self.masking_detections.load(Ordering::Relaxed),
            severity_assessments: self.severity_assessments.load(Ordering::Relaxed),
            dampened_assessments: self.dampened_assessments.load(Ordering::Relaxed),
            support_recommendations: self.support_recommendations.load(Ordering::Relaxed),
        }
    }

    /// Zero every counter.
    pub fn reset(&self) {
        for counter in [
            &self.drift_checks,
            &self.drifts_flagged,
            &self.fusion_analyses,
            &self.insufficient_data,
            &self.masking_detections,
            &self.severity_assessments,
            &self.dampened_assessments,
            &self.support_recommendations,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}
