use affect_core::config::DriftConfig;
use affect_core::constants::DRIFT_SEVERITY_DECIMALS;
use affect_core::models::{CanonicalLabel, DriftResult};
use affect_core::numeric::round_to;
use affect_observability::tracing_setup::events;

use super::distance::total_variation_distance;
use crate::distribution::{build_distribution, dominant};

/// Compare an old and a new label window.
///
/// Drift fires when the dominant label changes or the total variation
/// distance exceeds `config.distance_threshold`; either clause alone is
/// enough. Empty windows short-circuit to [`DriftResult::no_data`].
pub fn detect_drift(
    old: &[CanonicalLabel],
    new: &[CanonicalLabel],
    config: &DriftConfig,
) -> DriftResult {
    if old.is_empty() || new.is_empty() {
        return DriftResult::no_data();
    }

    let old_dist = build_distribution(old);
    let new_dist = build_distribution(new);
    let dominant_old = dominant(&old_dist);
    let dominant_new = dominant(&new_dist);

    let distance = total_variation_distance(&old_dist, &new_dist);
    let drift = dominant_old != dominant_new || distance > config.distance_threshold;

    tracing::debug!(
        old_len = old.len(),
        new_len = new.len(),
        distance = distance,
        drift = drift,
        "drift computed"
    );

    let severity = round_to(distance, DRIFT_SEVERITY_DECIMALS);
    if drift {
        events::drift_detected(
            dominant_old.as_ref().map_or("", |l| l.as_str()),
            dominant_new.as_ref().map_or("", |l| l.as_str()),
            severity,
        );
    }

    DriftResult {
        drift,
        from: dominant_old,
        to: dominant_new,
        severity,
    }
}
