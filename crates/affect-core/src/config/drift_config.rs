use serde::{Deserialize, Serialize};

use super::defaults;

/// Drift detector configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftConfig {
    /// Total variation distance above which drift fires regardless of
    /// whether the dominant label changed.
    pub distance_threshold: f64,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            distance_threshold: defaults::DEFAULT_DRIFT_DISTANCE_THRESHOLD,
        }
    }
}
