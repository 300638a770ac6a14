pub mod config_error;
pub mod error_code;

pub use config_error::ConfigError;
pub use error_code::AffectErrorCode;

/// Top-level error for the affect workspace.
///
/// The analytics themselves never fail; errors come from configuration
/// loading and engine construction.
#[derive(Debug, thiserror::Error)]
pub enum AffectError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

pub type AffectResult<T> = Result<T, AffectError>;

impl AffectErrorCode for AffectError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
        }
    }
}
