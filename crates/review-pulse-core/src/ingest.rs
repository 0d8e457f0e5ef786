//! Dataset loading and validation.
//!
//! A dataset document is either an object holding a store catalog and a
//! review list, or a bare array of reviews:
//!
//! ```json
//! { "stores": [{ "store_id": 1, "name": "Downtown", "location": "Springfield" }],
//!   "reviews": [{ "id": 1, "store_id": 1, "rating": 5, "text": "Fits great" }] }
//! ```
//!
//! The review list may also be keyed `google_reviews`.

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::error::{IngestError, IngestResult};
use crate::review::{Review, Store};

/// Bundled demo dataset: four stores and twelve reviews.
const SAMPLE_DATASET: &str = include_str!("../data/sample.json");

/// A store catalog together with its reviews.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Known stores.
    #[serde(default)]
    pub stores: Vec<Store>,
    /// Review collection.
    #[serde(alias = "google_reviews")]
    pub reviews: Vec<Review>,
}

impl Dataset {
    /// Look up a store by identifier.
    pub fn store(&self, store_id: u32) -> Option<&Store> {
        self.stores.iter().find(|s| s.store_id == store_id)
    }

    /// Number of reviews belonging to `store_id`.
    pub fn review_count(&self, store_id: u32) -> usize {
        self.reviews.iter().filter(|r| r.store_id == store_id).count()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DatasetDocument {
    Full(Dataset),
    ReviewsOnly(Vec<Review>),
}

/// Parse and validate a dataset from JSON text.
#[tracing::instrument(skip_all, fields(len = json.len()))]
pub fn parse_dataset(json: &str) -> IngestResult<Dataset> {
    let dataset = match serde_json::from_str::<DatasetDocument>(json) {
        Ok(DatasetDocument::Full(dataset)) => dataset,
        Ok(DatasetDocument::ReviewsOnly(reviews)) => Dataset {
            stores: Vec::new(),
            reviews,
        },
        // Untagged errors are uninformative; retry as the object form to
        // surface the real field-level problem.
        Err(_) => serde_json::from_str::<Dataset>(json)?,
    };
    validate(&dataset)?;
    tracing::debug!(
        stores = dataset.stores.len(),
        reviews = dataset.reviews.len(),
        "dataset parsed"
    );
    Ok(dataset)
}

/// Read, parse, and validate a dataset file.
#[tracing::instrument(skip_all, fields(path = %path))]
pub fn load_dataset(path: &Utf8Path) -> IngestResult<Dataset> {
    let content = std::fs::read_to_string(path.as_std_path()).map_err(|e| IngestError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_dataset(&content)
}

/// The bundled demo dataset.
pub fn sample_dataset() -> IngestResult<Dataset> {
    parse_dataset(SAMPLE_DATASET)
}

fn validate(dataset: &Dataset) -> IngestResult<()> {
    if let Some(bad) = dataset
        .reviews
        .iter()
        .find(|r| !(1..=5).contains(&r.rating))
    {
        return Err(IngestError::RatingOutOfRange {
            id: bad.id.to_string(),
            rating: bad.rating,
        });
    }
    Ok(())
}
