use chrono::{DateTime, Duration, Utc};

use affect_core::models::EmotionObservation;

/// Observations with `timestamp >= now - window_days`, in input order.
///
/// Applied even when the caller already filtered its query. A window
/// reaching past the representable time range keeps every observation.
pub fn within_window(
    observations: &[EmotionObservation],
    window_days: u32,
    now: DateTime<Utc>,
) -> Vec<&EmotionObservation> {
    let cutoff = Duration::try_days(i64::from(window_days))
        .and_then(|span| now.checked_sub_signed(span));
    observations
        .iter()
        .filter(|o| cutoff.map_or(true, |cutoff| o.timestamp >= cutoff))
        .collect()
}
