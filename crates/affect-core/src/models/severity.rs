use std::fmt;

use serde::{Deserialize, Serialize};

/// Four-tier risk level. Advisory, never a diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeverityLevel {
    Low,
    Medium,
    High,
    /// Internal label. Presentation layers show [`SeverityLevel::display_label`].
    Critical,
}

impl SeverityLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }

    /// User-facing name; `Critical` is shown as "High Risk".
    pub fn display_label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "High Risk",
        }
    }

    /// Levels that warrant a support recommendation.
    pub fn warrants_support(self) -> bool {
        matches!(self, Self::High | Self::Critical)
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Leveled, time-aware risk verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeverityAssessment {
    pub level: SeverityLevel,
    /// Weighted drift/volatility score in [0.0, 1.0], rounded to 2 decimals.
    pub score: f64,
    pub recommend_support: bool,
    pub summary: String,
}
