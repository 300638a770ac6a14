//! Probability mass over canonical labels.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::CanonicalLabel;

/// Probability per label, kept in first-seen order.
///
/// Order matters: the dominant label on a tie is the first one inserted.
/// Serializes as a JSON object in the same order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmotionDistribution {
    entries: Vec<(CanonicalLabel, f64)>,
}

impl EmotionDistribution {
    /// Wrap pre-computed probabilities. Labels must be unique.
    pub fn from_entries(entries: Vec<(CanonicalLabel, f64)>) -> Self {
        Self { entries }
    }

    /// Probability of `label`; absent labels are 0.0.
    pub fn get(&self, label: &CanonicalLabel) -> f64 {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map_or(0.0, |(_, p)| *p)
    }

    pub fn contains(&self, label: &CanonicalLabel) -> bool {
        self.entries.iter().any(|(l, _)| l == label)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CanonicalLabel, f64)> {
        self.entries.iter().map(|(l, p)| (l, *p))
    }

    pub fn labels(&self) -> impl Iterator<Item = &CanonicalLabel> {
        self.entries.iter().map(|(l, _)| l)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all probabilities. 1.0 for any distribution built from data.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, p)| p).sum()
    }

    /// Union of labels present in `self` or `other`: `self`'s labels in
    /// order, then `other`'s labels not already seen.
    pub fn union_labels<'a>(&'a self, other: &'a Self) -> Vec<&'a CanonicalLabel> {
        let mut labels: Vec<&CanonicalLabel> = self.labels().collect();
        labels.extend(other.labels().filter(|l| !self.contains(l)));
        labels
    }

    /// Summed probability of every label in `set`.
    pub fn mass_of(&self, set: &[CanonicalLabel]) -> f64 {
        set.iter().map(|label| self.get(label)).sum()
    }
}

impl Serialize for EmotionDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, probability) in &self.entries {
            map.serialize_entry(label.as_str(), probability)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for EmotionDistribution {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DistributionVisitor;

        impl<'de> Visitor<'de> for DistributionVisitor {
            type Value = EmotionDistribution;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of emotion label to probability")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((label, probability)) =
                    access.next_entry::<CanonicalLabel, f64>()?
                {
                    entries.push((label, probability));
                }
                Ok(EmotionDistribution { entries })
            }
        }

        deserializer.deserialize_map(DistributionVisitor)
    }
}
