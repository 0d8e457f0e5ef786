//! Fabric-quality ranking.

use crate::extract::fabric::fabric_tone;
use crate::resolve::resolve_fabric_quality;
use crate::review::Review;

use super::reports::FabricFeedback;
use super::tally_ranked;

/// Count fabric-quality keywords across `reviews`, most frequent first.
///
/// Each review contributes at most one keyword. Keywords with equal counts
/// keep the order in which they were first seen.
#[tracing::instrument(skip_all, fields(reviews = reviews.len()))]
pub fn fabric_feedback(reviews: &[&Review]) -> Vec<FabricFeedback> {
    let names = reviews
        .iter()
        .filter_map(|r| resolve_fabric_quality(r).map(|q| q.into_owned()));

    tally_ranked(names)
        .into_iter()
        .map(|(name, count)| FabricFeedback {
            tone: fabric_tone(&name),
            name,
            count,
        })
        .collect()
}
