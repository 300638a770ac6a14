//! Drift alert records handed to alerting collaborators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CanonicalLabel, DriftResult};

/// A drift worth surfacing to a subject's support dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftAlert {
    /// Opaque subject identifier supplied by the caller.
    pub subject: String,
    pub from_emotion: Option<CanonicalLabel>,
    pub to_emotion: Option<CanonicalLabel>,
    pub severity: f64,
    pub created_at: DateTime<Utc>,
}

impl DriftAlert {
    /// Build an alert from a drift result. `None` when no drift was flagged.
    pub fn from_drift(subject: &str, drift: &DriftResult, at: DateTime<Utc>) -> Option<Self> {
        if !drift.drift {
            return None;
        }
        Some(Self {
            subject: subject.to_string(),
            from_emotion: drift.from.clone(),
            to_emotion: drift.to.clone(),
            severity: drift.severity,
            created_at: at,
        })
    }
}
