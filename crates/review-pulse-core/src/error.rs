//! Error types for review-pulse-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// A config source that could not be merged.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A file failed to parse or a value has the wrong type.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading a review dataset.
///
/// The analytics functions themselves never fail; malformed input is
/// rejected here, at the ingestion boundary.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The dataset file could not be read.
    #[error("failed to read dataset {path}")]
    Read {
        /// Path that was being read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not valid JSON or does not match the review shape.
    #[error("malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// A review carries a rating outside 1 to 5.
    #[error("review {id} has rating {rating}; expected 1 to 5")]
    RatingOutOfRange {
        /// Offending review.
        id: String,
        /// Rating found.
        rating: u8,
    },
}

/// Result type alias using [`IngestError`].
pub type IngestResult<T> = Result<T, IngestError>;
