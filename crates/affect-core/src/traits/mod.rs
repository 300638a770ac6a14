pub mod analytics;

pub use analytics::{IDriftDetector, IFusionAnalyzer, ISeverityScorer};
