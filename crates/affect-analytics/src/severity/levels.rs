use affect_core::config::SeverityConfig;
use affect_core::constants::{SUMMARY_CRITICAL, SUMMARY_HIGH, SUMMARY_LOW, SUMMARY_MEDIUM};
use affect_core::models::SeverityLevel;

/// `< medium → LOW`, `< high → MEDIUM`, `< critical → HIGH`, else CRITICAL.
pub fn level_for(base_score: f64, config: &SeverityConfig) -> SeverityLevel {
    if base_score < config.medium_threshold {
        SeverityLevel::Low
    } else if base_score < config.high_threshold {
        SeverityLevel::Medium
    } else if base_score < config.critical_threshold {
        SeverityLevel::High
    } else {
        SeverityLevel::Critical
    }
}

/// The fixed explanatory sentence for a level.
pub fn level_sentence(level: SeverityLevel, window_days: u32) -> String {
    match level {
        SeverityLevel::Low => SUMMARY_LOW.to_string(),
        SeverityLevel::Medium => SUMMARY_MEDIUM.replace("{window_days}", &window_days.to_string()),
        SeverityLevel::High => SUMMARY_HIGH.to_string(),
        SeverityLevel::Critical => SUMMARY_CRITICAL.to_string(),
    }
}
