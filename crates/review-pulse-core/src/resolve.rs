//! Field-or-text resolution of review facets.
//!
//! Each facet is resolved independently: a non-empty structured field is
//! used verbatim, otherwise the matching extractor runs over the review
//! text. A review may carry a structured `size_fit` and still rely on
//! extraction for its colors.

use std::borrow::Cow;

use crate::extract::{extract_colors, extract_fabric_quality, extract_products, extract_size_fit};
use crate::review::{Review, Sentiment, SizeFit};

/// Resolve the size-fit category of a review.
///
/// The text is only mined when the structured label is missing or blank. A
/// non-blank label that is not one of the three known categories leaves the
/// review uncategorized.
pub fn resolve_size_fit(review: &Review) -> Option<SizeFit> {
    match review.size_fit.as_deref().map(str::trim) {
        Some(label) if !label.is_empty() => SizeFit::from_label(label),
        _ => extract_size_fit(review.text_or_empty()),
    }
}

/// Resolve the colors mentioned by a review.
pub fn resolve_colors(review: &Review) -> Cow<'_, [String]> {
    if review.colors_mentioned.is_empty() {
        Cow::Owned(extract_colors(review.text_or_empty()))
    } else {
        Cow::Borrowed(&review.colors_mentioned)
    }
}

/// Resolve the fabric-quality keyword of a review.
pub fn resolve_fabric_quality(review: &Review) -> Option<Cow<'_, str>> {
    match review.fabric_quality.as_deref() {
        Some(quality) if !quality.is_empty() => Some(Cow::Borrowed(quality)),
        _ => extract_fabric_quality(review.text_or_empty()).map(Cow::Borrowed),
    }
}

/// Resolve the products mentioned by a review.
pub fn resolve_products(review: &Review) -> Cow<'_, [String]> {
    if review.mentioned_products.is_empty() {
        Cow::Owned(extract_products(review.text_or_empty()))
    } else {
        Cow::Borrowed(&review.mentioned_products)
    }
}

/// Resolve the sentiment of a review.
///
/// A missing or blank label means neutral. A label that is not recognized
/// resolves to `None`; callers decide whether to drop or default it.
pub fn resolve_sentiment(review: &Review) -> Option<Sentiment> {
    match review.sentiment.as_deref() {
        None => Some(Sentiment::Neutral),
        Some(label) if label.trim().is_empty() => Some(Sentiment::Neutral),
        Some(label) => Sentiment::from_label(label),
    }
}
