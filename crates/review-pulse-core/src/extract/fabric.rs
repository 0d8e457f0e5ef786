//! Fabric-quality keyword extraction and tone classification.

use crate::lexicons::{FABRIC_NEGATIVE, FABRIC_NEUTRAL, FABRIC_POSITIVE, FABRIC_POSITIVE_LABELS};
use crate::review::Sentiment;

/// Return the first fabric-quality keyword found in `text`.
///
/// Positive keywords are tested before neutral, neutral before negative.
/// Only one label is returned per text.
pub fn extract_fabric_quality(text: &str) -> Option<&'static str> {
    if text.is_empty() {
        return None;
    }
    let lower = text.to_lowercase();

    FABRIC_POSITIVE
        .iter()
        .chain(FABRIC_NEUTRAL)
        .chain(FABRIC_NEGATIVE)
        .find(|keyword| lower.contains(*keyword))
        .copied()
}

/// Classify a fabric-quality label by tone.
///
/// Labels outside the positive and negative lexicons are neutral.
pub fn fabric_tone(label: &str) -> Sentiment {
    let lower = label.trim().to_lowercase();
    if FABRIC_POSITIVE
        .iter()
        .chain(FABRIC_POSITIVE_LABELS)
        .any(|k| *k == lower)
    {
        Sentiment::Positive
    } else if FABRIC_NEGATIVE.contains(&lower.as_str()) {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}
