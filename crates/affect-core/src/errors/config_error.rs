//! Configuration errors.

use super::error_code::{self, AffectErrorCode};

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {message}")]
    Parse { message: String },

    #[error("invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("severity thresholds out of order: {message}")]
    ThresholdOrder { message: String },
}

impl AffectErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse { .. } => error_code::CONFIG_PARSE_ERROR,
            Self::InvalidValue { .. } | Self::ThresholdOrder { .. } => error_code::CONFIG_ERROR,
        }
    }
}
