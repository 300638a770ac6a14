//! Drift detection: distribution distances and the window detector.

pub mod detector;
pub mod distance;

pub use detector::detect_drift;
pub use distance::{jensen_shannon_distance, overlap_coefficient, total_variation_distance};
