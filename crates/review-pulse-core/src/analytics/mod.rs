//! Review analytics.
//!
//! Folds a review collection into the summaries a retail dashboard shows:
//! brand health, size-fit distribution, product sentiment, color and fabric
//! rankings, and store/rating breakdowns. Orchestrated by
//! [`compute_analytics`].
//!
//! Each aggregator is a pure function in its own module and can be called on
//! its own. None of them can fail; an empty collection yields zeroed
//! summaries.

pub mod brand_health;
pub mod colors;
pub mod demographics;
pub mod fabric;
pub mod products;
pub mod reports;
pub mod size_fit;

use std::collections::HashMap;
use std::hash::Hash;

pub use reports::{
    AnalyticsReport, BrandHealth, ColorMention, Demographics, FabricFeedback, ProductFeedback,
    RatingShare, SentimentBreakdown, SizeFitEntry, StoreShare,
};

use crate::filter::filter_by_store;
use crate::review::{Review, Store, StoreSelector};

/// Compute every summary for the reviews selected by `selector`.
///
/// `catalog` only supplies store names for the demographics breakdown; pass
/// an empty slice when no catalog is available.
#[tracing::instrument(skip(reviews, catalog), fields(reviews = reviews.len()))]
pub fn compute_analytics(
    reviews: &[Review],
    catalog: &[Store],
    selector: StoreSelector,
) -> AnalyticsReport {
    let selected = filter_by_store(reviews, selector);
    let report = AnalyticsReport {
        store: selector,
        brand_health: brand_health::brand_health(&selected),
        size_fit: size_fit::size_fit_distribution(&selected),
        product_feedback: products::product_feedback(&selected),
        color_mentions: colors::color_mentions(&selected),
        fabric_feedback: fabric::fabric_feedback(&selected),
        demographics: demographics::demographics(&selected, catalog),
    };
    tracing::debug!(
        selected = selected.len(),
        products = report.product_feedback.len(),
        colors = report.color_mentions.len(),
        "analytics computed"
    );
    report
}

/// `numerator / denominator` rounded to the nearest integer, halves up.
///
/// `denominator` must be non-zero.
pub(crate) fn round_ratio(numerator: usize, denominator: usize) -> u32 {
    let rounded = (2 * numerator + denominator) / (2 * denominator);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// `count` as a whole percentage of `total`, or 0 when `total` is 0.
pub(crate) fn percent(count: usize, total: usize) -> u32 {
    if total == 0 {
        0
    } else {
        round_ratio(100 * count, total)
    }
}

/// Count occurrences and sort descending by count.
///
/// The sort is stable, so equal counts keep first-seen order.
pub(crate) fn tally_ranked<K, I>(items: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut order: Vec<K> = Vec::new();
    let mut counts: HashMap<K, usize> = HashMap::new();
    for item in items {
        let count = counts.entry(item.clone()).or_insert_with(|| {
            order.push(item);
            0
        });
        *count += 1;
    }

    let mut ranked: Vec<(K, usize)> = order
        .into_iter()
        .map(|key| {
            let count = counts.get(&key).copied().unwrap_or_default();
            (key, count)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::SizeFit;

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent(1, 8), 13); // 12.5
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(5, 5), 100);
    }

    #[test]
    fn tally_ranked_is_stable() {
        let ranked = tally_ranked(["b", "a", "c", "a", "b", "d"]);
        assert_eq!(ranked, [("b", 2), ("a", 2), ("c", 1), ("d", 1)]);
    }

    #[test]
    fn compute_analytics_filters_by_store() {
        let reviews = vec![
            Review::new("1", 1, 5)
                .with_sentiment("positive")
                .with_text("The navy blue jacket fits perfectly, very soft."),
            Review::new("2", 2, 1)
                .with_sentiment("negative")
                .with_text("Cheap red dress, runs small."),
        ];

        let report = compute_analytics(&reviews, &[], StoreSelector::Store(1));
        assert_eq!(report.store, StoreSelector::Store(1));
        assert_eq!(report.brand_health.total_reviews, 1);
        assert_eq!(report.brand_health.avg_rating, "5.0");
        assert_eq!(report.size_fit[1].category, SizeFit::TrueToSize);
        assert_eq!(report.size_fit[1].percentage, 100);
        assert_eq!(report.product_feedback[0].name, "Jacket");
        assert_eq!(report.product_feedback[0].sentiment_score, 100);
        assert_eq!(report.color_mentions[0].name, "Navy Blue");
        assert_eq!(report.fabric_feedback[0].name, "soft");
        assert_eq!(report.demographics.stores[0].name, "Store 1");
    }

    #[test]
    fn unknown_store_yields_zeroed_report() {
        let reviews = vec![Review::new("1", 1, 5)];
        let report = compute_analytics(&reviews, &[], StoreSelector::Store(42));

        assert_eq!(report.brand_health.total_reviews, 0);
        assert_eq!(report.brand_health.avg_rating, "0");
        assert_eq!(report.size_fit.len(), 3);
        assert!(report.size_fit.iter().all(|e| e.count == 0));
        assert!(report.product_feedback.is_empty());
        assert!(report.color_mentions.is_empty());
        assert!(report.fabric_feedback.is_empty());
        assert!(report.demographics.stores.is_empty());
    }

    #[test]
    fn structured_labels_override_text_even_when_unusable() {
        let reviews = vec![
            Review::new("1", 1, 4)
                .with_text("runs small")
                .with_size_fit("medium")
                .with_sentiment(""),
        ];
        let report = compute_analytics(&reviews, &[], StoreSelector::All);

        assert!(report.size_fit.iter().all(|e| e.count == 0 && e.percentage == 0));
        assert_eq!(report.brand_health.sentiment_breakdown.neutral, 1);
        assert!(report.product_feedback.is_empty());
    }

    #[test]
    fn report_serializes_to_json() {
        let report = compute_analytics(&[], &[], StoreSelector::All);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["store"], "all");
        assert_eq!(json["brand_health"]["avg_rating"], "0");
        assert_eq!(json["size_fit"][0]["label"], "Runs Small");
        assert_eq!(json["size_fit"][0]["category"], "runs_small");
    }
}
