//! Structured log events for analytics outcomes.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a drift between two label windows.
pub fn drift_detected(from: &str, to: &str, severity: f64) {
    tracing::info!(
        event = "drift_detected",
        from = %from,
        to = %to,
        severity = severity,
        "emotion drift detected"
    );
}

/// Log a masking detection.
pub fn masking_detected(face_negative_share: f64, text_positive_share: f64) {
    tracing::info!(
        event = "masking_detected",
        face_negative_share = face_negative_share,
        text_positive_share = text_positive_share,
        "cross-modal masking detected"
    );
}

/// Log a fusion request that lacked data in one channel.
pub fn insufficient_data(text_count: usize, face_count: usize, window_days: u32) {
    tracing::debug!(
        event = "fusion_insufficient_data",
        text_count = text_count,
        face_count = face_count,
        window_days = window_days,
        "not enough data for fusion analysis"
    );
}

/// Log a severity level lowered by short-window dampening.
pub fn severity_dampened(raw_level: &str, window_days: u32, score: f64) {
    tracing::warn!(
        event = "severity_dampened",
        raw_level = %raw_level,
        window_days = window_days,
        score = score,
        "short window dampened high severity"
    );
}

/// Log a support recommendation.
pub fn support_recommended(level: &str, score: f64, window_days: u32) {
    tracing::info!(
        event = "support_recommended",
        level = %level,
        score = score,
        window_days = window_days,
        "support recommended"
    );
}

/// Log flagged windows from a timeline scan.
pub fn timeline_drift_flagged(flagged: usize, windows: usize, threshold: f64) {
    tracing::info!(
        event = "timeline_drift_flagged",
        flagged = flagged,
        windows = windows,
        threshold = threshold,
        "timeline drift windows flagged"
    );
}
