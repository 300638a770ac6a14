use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Label normalizer configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Additional lower-case aliases (raw → canonical). Applied after the
    /// fixed alias table, which they can never override.
    pub extra_aliases: BTreeMap<String, String>,
}
