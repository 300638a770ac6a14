//! # affect-core
//!
//! Foundation crate for the affect analytics engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod numeric;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::AffectConfig;
pub use errors::{AffectError, AffectResult};
pub use models::{
    CanonicalLabel, DriftResult, EmotionDistribution, EmotionObservation, FusionOutcome,
    FusionResult, Modality, SeverityAssessment, SeverityLevel,
};
