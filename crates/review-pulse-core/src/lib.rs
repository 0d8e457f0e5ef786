//! Core library for review-pulse.
//!
//! This crate turns a collection of clothing-store reviews into summary
//! analytics: brand health, size-fit distribution, per-product sentiment,
//! color and fabric mentions, and store/rating demographics. Facets missing
//! from a review's structured fields are mined from its free text with
//! fixed keyword lexicons.
//!
//! # Modules
//!
//! - [`analytics`] - Aggregators and the [`compute_analytics`] entry point
//! - [`extract`] - Lexicon-driven text extractors
//! - [`resolve`] - Structured-field-or-text facet resolution
//! - [`filter`] - Store filtering and recency ordering
//! - [`ingest`] - JSON dataset parsing and the bundled sample
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use review_pulse_core::{StoreSelector, compute_analytics, sample_dataset};
//!
//! let dataset = sample_dataset().expect("bundled sample parses");
//! let report = compute_analytics(&dataset.reviews, &dataset.stores, StoreSelector::Store(1));
//!
//! println!("Average rating: {}", report.brand_health.avg_rating);
//! ```
#![deny(unsafe_code)]

pub mod analytics;
pub mod config;
pub mod error;
pub mod extract;
pub mod filter;
pub mod ingest;
pub mod lexicons;
pub mod resolve;
pub mod review;

pub use analytics::{AnalyticsReport, compute_analytics};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult, IngestError, IngestResult};
pub use extract::{TextFacets, extract_facets};
pub use filter::{filter_by_store, most_recent};
pub use ingest::{Dataset, load_dataset, parse_dataset, sample_dataset};
pub use review::{Review, ReviewId, Sentiment, SizeFit, Store, StoreSelector};

/// Default maximum dataset size in bytes (16 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 16 * 1024 * 1024;
