//! Canonical emotion labels.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One emotion category after alias resolution.
///
/// Unrecognised classifier vocabulary is kept verbatim (lower-cased) in
/// [`CanonicalLabel::Other`] rather than being collapsed to `Unknown`, so a
/// classifier that starts emitting new labels never breaks analytics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CanonicalLabel {
    Anger,
    Sadness,
    Fear,
    Happy,
    Love,
    Surprise,
    Neutral,
    /// Missing or empty raw label.
    Unknown,
    /// Lower-cased passthrough of a label outside the taxonomy.
    Other(String),
}

impl CanonicalLabel {
    /// Map an already lower-cased, alias-resolved string to a label.
    pub fn from_canonical(value: &str) -> Self {
        match value {
            "anger" => Self::Anger,
            "sadness" => Self::Sadness,
            "fear" => Self::Fear,
            "happy" => Self::Happy,
            "love" => Self::Love,
            "surprise" => Self::Surprise,
            "neutral" => Self::Neutral,
            "unknown" | "" => Self::Unknown,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Anger => "anger",
            Self::Sadness => "sadness",
            Self::Fear => "fear",
            Self::Happy => "happy",
            Self::Love => "love",
            Self::Surprise => "surprise",
            Self::Neutral => "neutral",
            Self::Unknown => "unknown",
            Self::Other(label) => label,
        }
    }

    /// Whether this label belongs to the fixed eight-way taxonomy.
    pub fn is_taxonomy(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for CanonicalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CanonicalLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CanonicalLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_canonical(&raw))
    }
}
