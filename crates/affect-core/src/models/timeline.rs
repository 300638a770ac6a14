//! Bucketed emotion timelines and sequential drift scores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::EmotionDistribution;

/// Width of one timeline window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineBucket {
    Day,
    /// ISO week starting Monday 00:00 UTC.
    Week,
}

/// Label distribution of one bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineWindow {
    /// Inclusive start of the bucket.
    pub start: DateTime<Utc>,
    pub observation_count: usize,
    pub distribution: EmotionDistribution,
}

/// Jensen-Shannon distance between a window and its predecessor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowDriftScore {
    pub window_start: DateTime<Utc>,
    pub score: f64,
    pub drift_detected: bool,
}

/// Sequential drift scan over a timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineDrift {
    pub scores: Vec<WindowDriftScore>,
    /// Adaptive threshold: mean + sigma * stddev of the scores.
    pub threshold: f64,
}

impl TimelineDrift {
    pub fn empty() -> Self {
        Self {
            scores: Vec::new(),
            threshold: 0.0,
        }
    }

    /// Windows whose score exceeded the threshold.
    pub fn flagged(&self) -> impl Iterator<Item = &WindowDriftScore> {
        self.scores.iter().filter(|s| s.drift_detected)
    }
}
