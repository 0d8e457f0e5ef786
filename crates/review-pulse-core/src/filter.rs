//! Store filtering and recency ordering of review collections.

use std::cmp::Reverse;

use crate::review::{Review, StoreSelector};

/// Select the reviews belonging to `selector`, preserving order.
///
/// [`StoreSelector::All`] returns every review. An identifier that matches
/// no review yields an empty collection.
#[tracing::instrument(skip(reviews), fields(total = reviews.len()))]
pub fn filter_by_store(reviews: &[Review], selector: StoreSelector) -> Vec<&Review> {
    let selected: Vec<&Review> = match selector {
        StoreSelector::All => reviews.iter().collect(),
        StoreSelector::Store(id) => reviews.iter().filter(|r| r.store_id == id).collect(),
    };
    tracing::debug!(selected = selected.len(), "filtered reviews by store");
    selected
}

/// Order reviews newest first, optionally keeping only the first `limit`.
///
/// Reviews without a timestamp sort after all dated reviews; ties keep
/// their input order.
pub fn most_recent<'a>(reviews: &[&'a Review], limit: Option<usize>) -> Vec<&'a Review> {
    let mut sorted = reviews.to_vec();
    sorted.sort_by_key(|r| Reverse(r.timestamp));
    if let Some(limit) = limit {
        sorted.truncate(limit);
    }
    sorted
}
