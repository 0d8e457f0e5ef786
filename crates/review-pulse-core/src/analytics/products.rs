//! Per-product sentiment.

use std::collections::HashMap;

use crate::resolve::{resolve_products, resolve_sentiment};
use crate::review::{Review, Sentiment};

use super::reports::{ProductFeedback, SentimentBreakdown};
use super::round_ratio;

/// Tally sentiment per product across `reviews`.
///
/// Each resolved product name of a review receives that review's sentiment.
/// Reviews with no sentiment, or an unrecognized one, count as neutral.
/// Names are compared exactly, so "Sweater" and "sweater" stay separate.
/// Entries appear in the order products were first seen.
#[tracing::instrument(skip_all, fields(reviews = reviews.len()))]
pub fn product_feedback(reviews: &[&Review]) -> Vec<ProductFeedback> {
    let mut order: Vec<String> = Vec::new();
    let mut tallies: HashMap<String, SentimentBreakdown> = HashMap::new();

    for review in reviews {
        let sentiment = resolve_sentiment(review).unwrap_or(Sentiment::Neutral);
        for product in resolve_products(review).iter() {
            let tally = tallies.entry(product.clone()).or_insert_with(|| {
                order.push(product.clone());
                SentimentBreakdown::default()
            });
            tally.record(sentiment);
        }
    }

    order
        .into_iter()
        .map(|name| {
            let tally = tallies.remove(&name).unwrap_or_default();
            let total = tally.total();
            ProductFeedback {
                name,
                positive: tally.positive,
                neutral: tally.neutral,
                negative: tally.negative,
                total,
                sentiment_score: sentiment_score(tally.positive, tally.negative, total),
            }
        })
        .collect()
}

/// `round(((positive - negative) / total + 1) * 50)`, or 50 when `total` is 0.
pub fn sentiment_score(positive: usize, negative: usize, total: usize) -> u32 {
    if total == 0 {
        return 50;
    }
    // ((p - n) / t + 1) * 50 == 50 * (p + t - n) / t, which is never negative.
    round_ratio(50 * (positive + total).saturating_sub(negative), total)
}
