//! Review and store records.
//!
//! These types are supplied by the caller (or parsed by [`crate::ingest`])
//! and only ever borrowed by the analytics layer.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque review identifier.
///
/// Accepts either a JSON string or a JSON number on input; always stored and
/// serialized as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ReviewId(String);

impl ReviewId {
    /// Wrap an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ReviewId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ReviewId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Self(n.to_string()),
            Raw::Text(s) => Self(s),
        })
    }
}

/// Overall sentiment of a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Favorable.
    Positive,
    /// Neither favorable nor unfavorable.
    Neutral,
    /// Unfavorable.
    Negative,
}

impl Sentiment {
    /// Parse a label case-insensitively. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "positive" => Some(Self::Positive),
            "neutral" => Some(Self::Neutral),
            "negative" => Some(Self::Negative),
            _ => None,
        }
    }

    /// Lower-case label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a garment fits relative to its labelled size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SizeFit {
    /// Smaller than the label suggests.
    RunsSmall,
    /// Matches the label.
    TrueToSize,
    /// Larger than the label suggests.
    RunsLarge,
}

impl SizeFit {
    /// All categories in display order.
    pub const ALL: [Self; 3] = [Self::RunsSmall, Self::TrueToSize, Self::RunsLarge];

    /// Parse a `snake_case` label case-insensitively. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "runs_small" => Some(Self::RunsSmall),
            "true_to_size" => Some(Self::TrueToSize),
            "runs_large" => Some(Self::RunsLarge),
            _ => None,
        }
    }

    /// Machine label (`runs_small`, `true_to_size`, `runs_large`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RunsSmall => "runs_small",
            Self::TrueToSize => "true_to_size",
            Self::RunsLarge => "runs_large",
        }
    }

    /// Human-readable label used in reports.
    pub const fn display_label(&self) -> &'static str {
        match self {
            Self::RunsSmall => "Runs Small",
            Self::TrueToSize => "True to Size",
            Self::RunsLarge => "Runs Large",
        }
    }
}

impl fmt::Display for SizeFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single customer review.
///
/// Enum-like fields (`sentiment`, `size_fit`) keep the raw label so that
/// unrecognized values can be told apart from absent ones during resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Unique identifier.
    #[serde(alias = "review_id")]
    pub id: ReviewId,
    /// Owning store.
    pub store_id: u32,
    /// Reviewer display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    /// Star rating, 1 to 5.
    pub rating: u8,
    /// Review body.
    #[serde(default, alias = "review_text", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// When the review was posted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Raw sentiment label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<String>,
    /// Products named by the reviewer.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mentioned_products: Vec<String>,
    /// Raw size-fit label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_fit: Option<String>,
    /// Colors named by the reviewer.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors_mentioned: Vec<String>,
    /// Fabric-quality keyword.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fabric_quality: Option<String>,
}

impl Review {
    /// Create a review with only the required fields set.
    pub fn new(id: impl Into<String>, store_id: u32, rating: u8) -> Self {
        Self {
            id: ReviewId::new(id),
            store_id,
            author_name: None,
            rating,
            text: None,
            timestamp: None,
            sentiment: None,
            mentioned_products: Vec::new(),
            size_fit: None,
            colors_mentioned: Vec::new(),
            fabric_quality: None,
        }
    }

    /// Set the review body.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the raw sentiment label.
    #[must_use]
    pub fn with_sentiment(mut self, sentiment: impl Into<String>) -> Self {
        self.sentiment = Some(sentiment.into());
        self
    }

    /// Set the raw size-fit label.
    #[must_use]
    pub fn with_size_fit(mut self, size_fit: impl Into<String>) -> Self {
        self.size_fit = Some(size_fit.into());
        self
    }

    /// Set the structured product list.
    #[must_use]
    pub fn with_products<I, S>(mut self, products: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mentioned_products = products.into_iter().map(Into::into).collect();
        self
    }

    /// Set the structured color list.
    #[must_use]
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors_mentioned = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Set the fabric-quality keyword.
    #[must_use]
    pub fn with_fabric_quality(mut self, quality: impl Into<String>) -> Self {
        self.fabric_quality = Some(quality.into());
        self
    }

    /// Set the posting time.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Review body, or the empty string when absent.
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

/// A physical store in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    /// Store identifier referenced by [`Review::store_id`].
    pub store_id: u32,
    /// Display name.
    pub name: String,
    /// City and region.
    #[serde(default)]
    pub location: String,
}

/// Which reviews to include: every store, or a single one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StoreSelector {
    /// All stores.
    #[default]
    All,
    /// A single store by identifier.
    Store(u32),
}

impl fmt::Display for StoreSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Store(id) => write!(f, "{id}"),
        }
    }
}

/// Error returned when a store selector cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid store selector '{0}': expected 'all' or a numeric store id")]
pub struct ParseStoreSelectorError(String);

impl FromStr for StoreSelector {
    type Err = ParseStoreSelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        trimmed
            .parse::<u32>()
            .map(Self::Store)
            .map_err(|_| ParseStoreSelectorError(s.to_string()))
    }
}

impl Serialize for StoreSelector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::All => serializer.serialize_str("all"),
            Self::Store(id) => serializer.serialize_u32(*id),
        }
    }
}

impl<'de> Deserialize<'de> for StoreSelector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Id(u32),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Id(id) => Ok(Self::Store(id)),
            Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_parses_case_insensitively() {
        assert_eq!(Sentiment::from_label("POSITIVE"), Some(Sentiment::Positive));
        assert_eq!(Sentiment::from_label("Neutral"), Some(Sentiment::Neutral));
        assert_eq!(Sentiment::from_label("negative"), Some(Sentiment::Negative));
        assert_eq!(Sentiment::from_label("mixed"), None);
    }

    #[test]
    fn size_fit_parses_labels() {
        assert_eq!(SizeFit::from_label("runs_small"), Some(SizeFit::RunsSmall));
        assert_eq!(SizeFit::from_label("True_To_Size"), Some(SizeFit::TrueToSize));
        assert_eq!(SizeFit::from_label("huge"), None);
        assert_eq!(SizeFit::RunsLarge.display_label(), "Runs Large");
    }

    #[test]
    fn review_id_accepts_numbers_and_strings() {
        let from_num: ReviewId = serde_json::from_str("42").unwrap();
        let from_str: ReviewId = serde_json::from_str("\"r-7\"").unwrap();
        assert_eq!(from_num.as_str(), "42");
        assert_eq!(from_str.as_str(), "r-7");
        assert_eq!(serde_json::to_string(&from_num).unwrap(), "\"42\"");
    }

    #[test]
    fn review_accepts_alternate_field_names() {
        let json = r#"{"review_id": 3, "store_id": 1, "rating": 4, "review_text": "Lovely coat"}"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.id.as_str(), "3");
        assert_eq!(review.text.as_deref(), Some("Lovely coat"));
        assert!(review.mentioned_products.is_empty());
        assert!(review.sentiment.is_none());
    }

    #[test]
    fn review_parses_timestamp() {
        let json = r#"{"id": "a", "store_id": 2, "rating": 5, "timestamp": "2024-01-15T10:30:00Z"}"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(
            review.timestamp.map(|t| t.to_rfc3339()),
            Some("2024-01-15T10:30:00+00:00".to_string())
        );
    }

    #[test]
    fn store_selector_parses() {
        assert_eq!("all".parse::<StoreSelector>(), Ok(StoreSelector::All));
        assert_eq!("ALL".parse::<StoreSelector>(), Ok(StoreSelector::All));
        assert_eq!("3".parse::<StoreSelector>(), Ok(StoreSelector::Store(3)));
        assert!("downtown".parse::<StoreSelector>().is_err());
    }

    #[test]
    fn store_selector_deserializes_from_number_or_string() {
        let from_num: StoreSelector = serde_json::from_str("2").unwrap();
        let from_str: StoreSelector = serde_json::from_str("\"all\"").unwrap();
        let from_numeric_str: StoreSelector = serde_json::from_str("\"4\"").unwrap();
        assert_eq!(from_num, StoreSelector::Store(2));
        assert_eq!(from_str, StoreSelector::All);
        assert_eq!(from_numeric_str, StoreSelector::Store(4));
    }

    #[test]
    fn store_selector_displays() {
        assert_eq!(StoreSelector::All.to_string(), "all");
        assert_eq!(StoreSelector::Store(9).to_string(), "9");
    }
}
