//! Report structs produced by the aggregators.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in both CLI JSON output and MCP tool responses.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::review::{Sentiment, SizeFit, StoreSelector};

/// Every summary derived from one review collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AnalyticsReport {
    /// Store the collection was filtered to (`"all"` or an id).
    #[schemars(with = "String")]
    pub store: StoreSelector,
    /// Ratings and sentiment overview.
    pub brand_health: BrandHealth,
    /// Size-fit distribution in fixed order.
    pub size_fit: Vec<SizeFitEntry>,
    /// Per-product sentiment, first-seen order.
    pub product_feedback: Vec<ProductFeedback>,
    /// Color mentions, most frequent first.
    pub color_mentions: Vec<ColorMention>,
    /// Fabric-quality mentions, most frequent first.
    pub fabric_feedback: Vec<FabricFeedback>,
    /// Store and rating breakdowns.
    pub demographics: Demographics,
}

// -- Brand Health -----------------------------------------------------------

/// Average rating and sentiment tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BrandHealth {
    /// Mean rating to one decimal place (`"0"` for no reviews).
    pub avg_rating: String,
    /// Number of reviews considered.
    pub total_reviews: usize,
    /// Reviews per recognized sentiment.
    pub sentiment_breakdown: SentimentBreakdown,
}

/// Count of reviews per sentiment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SentimentBreakdown {
    /// Positive reviews.
    pub positive: usize,
    /// Neutral reviews.
    pub neutral: usize,
    /// Negative reviews.
    pub negative: usize,
}

impl SentimentBreakdown {
    /// Increment the bucket for `sentiment`.
    pub const fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Negative => self.negative += 1,
        }
    }

    /// Sum of all buckets.
    pub const fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }
}

// -- Size Fit ---------------------------------------------------------------

/// One bar of the size-fit distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SizeFitEntry {
    /// Category.
    pub category: SizeFit,
    /// Display label ("Runs Small", "True to Size", "Runs Large").
    pub label: String,
    /// Reviews in this category.
    pub count: usize,
    /// Share of categorized reviews, rounded to a whole percent.
    pub percentage: u32,
}

// -- Products ---------------------------------------------------------------

/// Sentiment summary for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProductFeedback {
    /// Product name as resolved (not case-normalized).
    pub name: String,
    /// Positive mentions.
    pub positive: usize,
    /// Neutral mentions.
    pub neutral: usize,
    /// Negative mentions.
    pub negative: usize,
    /// All mentions.
    pub total: usize,
    /// 0 (all negative) to 100 (all positive); 50 is balanced.
    pub sentiment_score: u32,
}

// -- Style ------------------------------------------------------------------

/// How often a color was mentioned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ColorMention {
    /// Color name as resolved.
    pub name: String,
    /// Mentions across the collection.
    pub count: usize,
}

/// How often a fabric-quality keyword was used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FabricFeedback {
    /// Quality keyword as resolved.
    pub name: String,
    /// Reviews using the keyword.
    pub count: usize,
    /// Favorable, neutral, or unfavorable reading of the keyword.
    pub tone: Sentiment,
}

// -- Demographics -----------------------------------------------------------

/// Store and rating breakdowns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Demographics {
    /// Reviews per store, first-seen order.
    pub stores: Vec<StoreShare>,
    /// Reviews per star rating, 5 down to 1.
    pub ratings: Vec<RatingShare>,
}

/// One store's share of the reviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StoreShare {
    /// Store identifier.
    pub store_id: u32,
    /// Catalog name, or `Store <id>` when the catalog has no entry.
    pub name: String,
    /// Reviews for this store.
    pub count: usize,
    /// Share of all reviews, rounded to a whole percent.
    pub percentage: u32,
}

/// One star rating's share of the reviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RatingShare {
    /// Star rating.
    pub rating: u8,
    /// Reviews with this rating.
    pub count: usize,
    /// Share of all reviews, rounded to a whole percent.
    pub percentage: u32,
}
