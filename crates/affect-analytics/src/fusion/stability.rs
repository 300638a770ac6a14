//! Stability index over the merged event stream.

use chrono::{DateTime, Utc};

use affect_core::models::CanonicalLabel;
use affect_core::numeric::ratio;

/// One normalized observation on the merged timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedLabel {
    pub timestamp: DateTime<Utc>,
    pub label: CanonicalLabel,
}

/// Merge both channels into one stream sorted ascending by timestamp.
///
/// The sort is stable: equal timestamps keep text before face, and input
/// order within each channel.
pub fn merge_chronological<T, F>(text: T, face: F) -> Vec<TimedLabel>
where
    T: IntoIterator<Item = (DateTime<Utc>, CanonicalLabel)>,
    F: IntoIterator<Item = (DateTime<Utc>, CanonicalLabel)>,
{
    let mut stream: Vec<TimedLabel> = text
        .into_iter()
        .chain(face)
        .map(|(timestamp, label)| TimedLabel { timestamp, label })
        .collect();
    stream.sort_by_key(|e| e.timestamp);
    stream
}

/// Adjacent pairs whose labels differ.
pub fn count_switches(stream: &[TimedLabel]) -> usize {
    stream
        .windows(2)
        .filter(|pair| pair[0].label != pair[1].label)
        .count()
}

/// `max(0, 1 - switches / (n - 1))`; a stream of 0 or 1 events is fully stable.
pub fn stability_score(stream: &[TimedLabel]) -> f64 {
    let switch_rate = if stream.len() > 1 {
        ratio(count_switches(stream), stream.len() - 1)
    } else {
        0.0
    };
    (1.0 - switch_rate).max(0.0)
}
