//! Severity scorer: weighted drift + volatility with short-window dampening.

pub mod levels;

use affect_core::config::SeverityConfig;
use affect_core::constants::{SEVERITY_SCORE_DECIMALS, SHORT_WINDOW_CAVEAT};
use affect_core::models::{DriftResult, SeverityAssessment, SeverityLevel};
use affect_core::numeric::round_to;
use affect_observability::tracing_setup::events;

pub use levels::{level_for, level_sentence};

/// An assessment plus whether dampening changed it.
#[derive(Debug, Clone, PartialEq)]
pub struct SeverityEvaluation {
    pub assessment: SeverityAssessment,
    /// Level before dampening.
    pub raw_level: SeverityLevel,
    pub dampened: bool,
}

/// Fold drift severity and volatility into a leveled verdict.
pub fn assess_severity(
    drift: &DriftResult,
    volatility: f64,
    window_days: u32,
    config: &SeverityConfig,
) -> SeverityAssessment {
    evaluate(drift, volatility, window_days, config).assessment
}

/// [`assess_severity`] keeping the pre-dampening level.
///
/// `base = drift_weight * drift.severity + volatility_weight * volatility`.
/// Windows shorter than `short_window_days` cannot produce HIGH or
/// CRITICAL: the level drops to MEDIUM, support is withheld, and the score
/// is multiplied by `short_window_damping`.
pub fn evaluate(
    drift: &DriftResult,
    volatility: f64,
    window_days: u32,
    config: &SeverityConfig,
) -> SeverityEvaluation {
    let mut base_score = (config.drift_weight * drift.severity
        + config.volatility_weight * volatility)
        .clamp(0.0, 1.0);

    let raw_level = level_for(base_score, config);
    let mut level = raw_level;
    let mut recommend_support = raw_level.warrants_support();
    let mut summary = vec![level_sentence(raw_level, window_days)];

    let dampened = window_days < config.short_window_days && raw_level.warrants_support();
    if dampened {
        level = SeverityLevel::Medium;
        recommend_support = false;
        base_score *= config.short_window_damping;
        summary.push(SHORT_WINDOW_CAVEAT.to_string());
        events::severity_dampened(raw_level.as_str(), window_days, base_score);
    }

    let score = round_to(base_score, SEVERITY_SCORE_DECIMALS);
    if recommend_support {
        events::support_recommended(level.as_str(), score, window_days);
    }

    SeverityEvaluation {
        assessment: SeverityAssessment {
            level,
            score,
            recommend_support,
            summary: summary.join(" "),
        },
        raw_level,
        dampened,
    }
}
