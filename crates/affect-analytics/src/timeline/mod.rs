//! Timeline drift scan: bucketed distributions and sequential
//! Jensen-Shannon distances with an adaptive threshold.

pub mod buckets;

use affect_core::models::{
    EmotionObservation, TimelineBucket, TimelineDrift, TimelineWindow, WindowDriftScore,
};
use affect_observability::tracing_setup::events;

use crate::distribution::build_distribution;
use crate::drift::jensen_shannon_distance;
use crate::normalize::Normalizer;

pub use buckets::bucket_start;

/// Group observations into ascending buckets. Empty buckets are skipped.
pub fn build_timeline(
    observations: &[EmotionObservation],
    bucket: TimelineBucket,
    normalizer: &Normalizer,
) -> Vec<TimelineWindow> {
    let mut keyed: Vec<_> = observations
        .iter()
        .map(|o| (bucket_start(o.timestamp, bucket), normalizer.normalize_observation(o)))
        .collect();
    keyed.sort_by_key(|(start, _)| *start);

    let mut windows = Vec::new();
    for group in keyed.chunk_by(|a, b| a.0 == b.0) {
        let labels: Vec<_> = group.iter().map(|(_, label)| label.clone()).collect();
        windows.push(TimelineWindow {
            start: group[0].0,
            observation_count: labels.len(),
            distribution: build_distribution(&labels),
        });
    }
    windows
}

/// Score each window against its predecessor and flag outliers.
///
/// Threshold = mean + `sigma` × sample standard deviation of the scores.
/// A window is flagged when its score strictly exceeds the threshold.
pub fn scan_drift(windows: &[TimelineWindow], sigma: f64) -> TimelineDrift {
    if windows.len() < 2 {
        return TimelineDrift::empty();
    }

    let raw: Vec<f64> = windows
        .windows(2)
        .map(|pair| jensen_shannon_distance(&pair[0].distribution, &pair[1].distribution))
        .collect();

    let threshold = mean(&raw) + sigma * sample_std(&raw);
    let scores: Vec<WindowDriftScore> = windows[1..]
        .iter()
        .zip(&raw)
        .map(|(window, &score)| WindowDriftScore {
            window_start: window.start,
            score,
            drift_detected: score > threshold,
        })
        .collect();

    let drift = TimelineDrift { scores, threshold };
    let flagged = drift.flagged().count();
    if flagged > 0 {
        events::timeline_drift_flagged(flagged, windows.len(), threshold);
    }
    drift
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Standard deviation with n - 1 denominator; 0.0 below two values.
fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance =
        values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}
