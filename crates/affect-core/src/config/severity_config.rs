use serde::{Deserialize, Serialize};

use super::defaults;

/// Severity scorer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityConfig {
    /// Weight of drift severity in the base score.
    pub drift_weight: f64,
    /// Weight of volatility in the base score.
    pub volatility_weight: f64,
    /// Base score at which MEDIUM starts.
    pub medium_threshold: f64,
    /// Base score at which HIGH starts.
    pub high_threshold: f64,
    /// Base score at which CRITICAL starts.
    pub critical_threshold: f64,
    /// Windows shorter than this many days are dampened.
    pub short_window_days: u32,
    /// Multiplier applied to the base score when dampening.
    pub short_window_damping: f64,
}

impl Default for SeverityConfig {
    fn default() -> Self {
        Self {
            drift_weight: defaults::DEFAULT_DRIFT_WEIGHT,
            volatility_weight: defaults::DEFAULT_VOLATILITY_WEIGHT,
            medium_threshold: defaults::DEFAULT_MEDIUM_THRESHOLD,
            high_threshold: defaults::DEFAULT_HIGH_THRESHOLD,
            critical_threshold: defaults::DEFAULT_CRITICAL_THRESHOLD,
            short_window_days: defaults::DEFAULT_SHORT_WINDOW_DAYS,
            short_window_damping: defaults::DEFAULT_SHORT_WINDOW_DAMPING,
        }
    }
}
