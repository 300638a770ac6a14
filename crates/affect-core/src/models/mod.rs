pub mod advice;
pub mod alert;
pub mod distribution;
pub mod drift_result;
pub mod fusion_result;
pub mod label;
pub mod observation;
pub mod severity;
pub mod stats;
pub mod timeline;

pub use advice::{Advice, ConversationSummary};
pub use alert::DriftAlert;
pub use distribution::EmotionDistribution;
pub use drift_result::DriftResult;
pub use fusion_result::{FusionOutcome, FusionResult, InsufficientData};
pub use label::CanonicalLabel;
pub use observation::{EmotionObservation, Modality};
pub use severity::{SeverityAssessment, SeverityLevel};
pub use stats::{EmotionStats, LabelCount};
pub use timeline::{TimelineBucket, TimelineDrift, TimelineWindow, WindowDriftScore};
