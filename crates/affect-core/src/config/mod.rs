//! Configuration for every analytics component.
//!
//! Defaults live in [`defaults`]; TOML overrides any subset of fields.

pub mod defaults;
pub mod drift_config;
pub mod fusion_config;
pub mod normalizer_config;
pub mod observability_config;
pub mod severity_config;
pub mod timeline_config;

pub use drift_config::DriftConfig;
pub use fusion_config::FusionConfig;
pub use normalizer_config::NormalizerConfig;
pub use observability_config::ObservabilityConfig;
pub use severity_config::SeverityConfig;
pub use timeline_config::TimelineConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{AffectResult, ConfigError};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AffectConfig {
    pub normalizer: NormalizerConfig,
    pub drift: DriftConfig,
    pub fusion: FusionConfig,
    pub severity: SeverityConfig,
    pub timeline: TimelineConfig,
    pub observability: ObservabilityConfig,
}

impl AffectConfig {
    /// Parse and validate a TOML document. Missing fields take defaults.
    pub fn from_toml(source: &str) -> AffectResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would break the analytics' range invariants.
    pub fn validate(&self) -> AffectResult<()> {
        check_unit("drift.distance_threshold", self.drift.distance_threshold)?;
        check_unit(
            "fusion.masking_face_negative_threshold",
            self.fusion.masking_face_negative_threshold,
        )?;
        check_unit(
            "fusion.masking_text_positive_threshold",
            self.fusion.masking_text_positive_threshold,
        )?;

        let severity = &self.severity;
        check_unit("severity.drift_weight", severity.drift_weight)?;
        check_unit("severity.volatility_weight", severity.volatility_weight)?;
        if severity.drift_weight + severity.volatility_weight > 1.0 + f64::EPSILON {
            return Err(ConfigError::InvalidValue {
                field: "severity.drift_weight + severity.volatility_weight".to_string(),
                message: "weights must not sum above 1.0".to_string(),
            }
            .into());
        }
        check_unit("severity.medium_threshold", severity.medium_threshold)?;
        check_unit("severity.high_threshold", severity.high_threshold)?;
        check_unit("severity.critical_threshold", severity.critical_threshold)?;
        if !(severity.medium_threshold < severity.high_threshold
            && severity.high_threshold < severity.critical_threshold)
        {
            return Err(ConfigError::ThresholdOrder {
                message: format!(
                    "expected medium < high < critical, got {} / {} / {}",
                    severity.medium_threshold, severity.high_threshold, severity.critical_threshold
                ),
            }
            .into());
        }
        check_unit("severity.short_window_damping", severity.short_window_damping)?;

        if !self.timeline.sigma.is_finite() || self.timeline.sigma < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "timeline.sigma".to_string(),
                message: format!("must be a non-negative number, got {}", self.timeline.sigma),
            }
            .into());
        }

        for (raw, canonical) in &self.normalizer.extra_aliases {
            if raw.trim().is_empty() || canonical.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "normalizer.extra_aliases".to_string(),
                    message: format!("empty alias entry: {raw:?} -> {canonical:?}"),
                }
                .into());
            }
        }

        Ok(())
    }
}

fn check_unit(field: &str, value: f64) -> AffectResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            message: format!("must be within [0.0, 1.0], got {value}"),
        }
        .into());
    }
    Ok(())
}
