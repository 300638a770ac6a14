//! Label normalizer: canonicalizes raw classifier labels.
//!
//! Rules, in order:
//! - `None` or `""` → `unknown`
//! - lower-case, then the fixed alias table (`angry`, `disgust` → anger;
//!   `sad` → sadness; `joy`, `happines` → happy)
//! - configured extra aliases
//! - anything else passes through lower-cased

use std::collections::BTreeMap;

use affect_core::config::NormalizerConfig;
use affect_core::constants::LABEL_ALIASES;
use affect_core::models::{CanonicalLabel, EmotionObservation};

/// Normalize with the fixed alias table only.
pub fn normalize(raw: Option<&str>) -> CanonicalLabel {
    match raw {
        None | Some("") => CanonicalLabel::Unknown,
        Some(label) => {
            let lowered = label.to_lowercase();
            CanonicalLabel::from_canonical(fixed_alias(&lowered).unwrap_or(&lowered))
        }
    }
}

fn fixed_alias(lowered: &str) -> Option<&'static str> {
    LABEL_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lowered)
        .map(|(_, canonical)| *canonical)
}

/// Normalizer carrying configured extra aliases.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    extra_aliases: BTreeMap<String, String>,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &NormalizerConfig) -> Self {
        let extra_aliases = config
            .extra_aliases
            .iter()
            .map(|(raw, canonical)| (raw.to_lowercase(), canonical.to_lowercase()))
            .collect();
        Self { extra_aliases }
    }

    pub fn normalize(&self, raw: Option<&str>) -> CanonicalLabel {
        let Some(label) = raw.filter(|l| !l.is_empty()) else {
            return CanonicalLabel::Unknown;
        };
        let lowered = label.to_lowercase();
        if let Some(canonical) = fixed_alias(&lowered) {
            return CanonicalLabel::from_canonical(canonical);
        }
        match self.extra_aliases.get(&lowered) {
            Some(canonical) => CanonicalLabel::from_canonical(canonical),
            None => CanonicalLabel::from_canonical(&lowered),
        }
    }

    pub fn normalize_observation(&self, observation: &EmotionObservation) -> CanonicalLabel {
        self.normalize(observation.raw_label.as_deref())
    }

    pub fn normalize_all<'a, I>(&self, observations: I) -> Vec<CanonicalLabel>
    where
        I: IntoIterator<Item = &'a EmotionObservation>,
    {
        observations
            .into_iter()
            .map(|o| self.normalize_observation(o))
            .collect()
    }
}
