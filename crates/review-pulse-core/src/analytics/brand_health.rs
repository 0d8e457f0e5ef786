//! Average rating and sentiment breakdown.

use crate::resolve::resolve_sentiment;
use crate::review::Review;

use super::reports::{BrandHealth, SentimentBreakdown};

/// Summarize ratings and sentiment across `reviews`.
///
/// Reviews without a sentiment count as neutral; reviews whose sentiment
/// label is not recognized are left out of the breakdown but still count
/// toward the total and the average.
#[tracing::instrument(skip_all, fields(reviews = reviews.len()))]
pub fn brand_health(reviews: &[&Review]) -> BrandHealth {
    let mut breakdown = SentimentBreakdown::default();
    for sentiment in reviews.iter().filter_map(|r| resolve_sentiment(r)) {
        breakdown.record(sentiment);
    }

    let rating_sum: usize = reviews.iter().map(|r| usize::from(r.rating)).sum();

    BrandHealth {
        avg_rating: format_average(rating_sum, reviews.len()),
        total_reviews: reviews.len(),
        sentiment_breakdown: breakdown,
    }
}

/// Render `sum / count` with one decimal place, rounding halves up.
///
/// Returns `"0"` when `count` is zero.
fn format_average(sum: usize, count: usize) -> String {
    if count == 0 {
        return "0".to_string();
    }
    let tenths = (20 * sum + count) / (2 * count);
    format!("{}.{}", tenths / 10, tenths % 10)
}
