use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::TimelineBucket;

/// Timeline drift scan configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    pub bucket: TimelineBucket,
    /// Standard deviations above the mean score that flag a window.
    pub sigma: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            bucket: TimelineBucket::Week,
            sigma: defaults::DEFAULT_TIMELINE_SIGMA,
        }
    }
}
