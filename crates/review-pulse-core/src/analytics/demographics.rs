//! Store and rating breakdowns.

use std::collections::HashMap;

use crate::review::{Review, Store};

use super::percent;
use super::reports::{Demographics, RatingShare, StoreShare};

/// Break `reviews` down by store and by star rating.
#[tracing::instrument(skip_all, fields(reviews = reviews.len(), stores = catalog.len()))]
pub fn demographics(reviews: &[&Review], catalog: &[Store]) -> Demographics {
    Demographics {
        stores: store_distribution(reviews, catalog),
        ratings: rating_distribution(reviews),
    }
}

/// Count reviews per store, in the order stores first appear.
pub fn store_distribution(reviews: &[&Review], catalog: &[Store]) -> Vec<StoreShare> {
    let mut order: Vec<u32> = Vec::new();
    let mut counts: HashMap<u32, usize> = HashMap::new();
    for review in reviews {
        let count = counts.entry(review.store_id).or_insert_with(|| {
            order.push(review.store_id);
            0
        });
        *count += 1;
    }

    let names: HashMap<u32, &str> = catalog
        .iter()
        .map(|s| (s.store_id, s.name.as_str()))
        .collect();

    order
        .into_iter()
        .map(|store_id| {
            let count = counts.get(&store_id).copied().unwrap_or_default();
            StoreShare {
                store_id,
                name: names
                    .get(&store_id)
                    .map_or_else(|| format!("Store {store_id}"), |n| (*n).to_string()),
                count,
                percentage: percent(count, reviews.len()),
            }
        })
        .collect()
}

/// Count reviews per star rating, from 5 down to 1.
pub fn rating_distribution(reviews: &[&Review]) -> Vec<RatingShare> {
    (1..=5u8)
        .rev()
        .map(|rating| {
            let count = reviews.iter().filter(|r| r.rating == rating).count();
            RatingShare {
                rating,
                count,
                percentage: percent(count, reviews.len()),
            }
        })
        .collect()
}
