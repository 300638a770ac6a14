use serde::{Deserialize, Serialize};

use super::CanonicalLabel;

/// Outcome of comparing an old and a new label window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftResult {
    /// True when the dominant label changed or the distance crossed the threshold.
    pub drift: bool,
    /// Dominant label of the old window.
    pub from: Option<CanonicalLabel>,
    /// Dominant label of the new window.
    pub to: Option<CanonicalLabel>,
    /// Total variation distance in [0.0, 1.0], rounded to 3 decimals.
    pub severity: f64,
}

impl DriftResult {
    /// Result returned when either window is empty.
    pub fn no_data() -> Self {
        Self {
            drift: false,
            from: None,
            to: None,
            severity: 0.0,
        }
    }
}
