//! Size-fit distribution.

use crate::resolve::resolve_size_fit;
use crate::review::{Review, SizeFit};

use super::percent;
use super::reports::SizeFitEntry;

/// Tally resolved size-fit categories across `reviews`.
///
/// Always returns three entries (runs small, true to size, runs large).
/// Percentages are relative to the reviews that resolved to some category;
/// reviews with no size-fit signal are left out of the denominator.
#[tracing::instrument(skip_all, fields(reviews = reviews.len()))]
pub fn size_fit_distribution(reviews: &[&Review]) -> Vec<SizeFitEntry> {
    let mut counts = [0usize; 3];
    for fit in reviews.iter().filter_map(|r| resolve_size_fit(r)) {
        counts[slot(fit)] += 1;
    }
    let categorized: usize = counts.iter().sum();
    tracing::debug!(categorized, "resolved size-fit categories");

    SizeFit::ALL
        .iter()
        .map(|&fit| {
            let count = counts[slot(fit)];
            SizeFitEntry {
                category: fit,
                label: fit.display_label().to_string(),
                count,
                percentage: percent(count, categorized),
            }
        })
        .collect()
}

const fn slot(fit: SizeFit) -> usize {
    match fit {
        SizeFit::RunsSmall => 0,
        SizeFit::TrueToSize => 1,
        SizeFit::RunsLarge => 2,
    }
}
