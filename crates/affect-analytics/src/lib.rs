//! # affect-analytics
//!
//! Decision-support analytics over pre-classified emotion observations:
//! label normalization, distributions, drift between windows, cross-modal
//! fusion (alignment, masking, stability), and graduated severity.
//!
//! Every function here is pure and synchronous. [`AffectEngine`] bundles
//! them behind a validated configuration.

pub mod advice;
pub mod distribution;
pub mod drift;
pub mod engine;
pub mod fusion;
pub mod normalize;
pub mod severity;
pub mod stats;
pub mod timeline;

pub use affect_core::traits::{IDriftDetector, IFusionAnalyzer, ISeverityScorer};
pub use distribution::{build_distribution, dominant};
pub use drift::detect_drift;
pub use engine::{AffectEngine, FusionRequest};
pub use normalize::{normalize, Normalizer};
pub use severity::assess_severity;
