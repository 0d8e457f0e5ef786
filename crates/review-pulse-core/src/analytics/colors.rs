//! Color mention ranking.

use crate::resolve::resolve_colors;
use crate::review::Review;

use super::reports::ColorMention;
use super::tally_ranked;

/// Count color mentions across `reviews`, most frequent first.
///
/// Colors with equal counts keep the order in which they were first seen.
#[tracing::instrument(skip_all, fields(reviews = reviews.len()))]
pub fn color_mentions(reviews: &[&Review]) -> Vec<ColorMention> {
    let names = reviews
        .iter()
        .flat_map(|r| resolve_colors(r).into_owned());

    tally_ranked(names)
        .into_iter()
        .map(|(name, count)| ColorMention { name, count })
        .collect()
}
