//! # Obit Match Engine
//!
//! Fuzzy person-record matching with:
//! - Text folding and tokenization
//! - Jaro-Winkler name similarity (pluggable metric)
//! - Alias-aware token overlap and birth-year proximity scoring
//! - Top-K, high-confidence result filtering
//! - Word-level highlighting of matched names
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use obit_match_engine::{JsonFileSource, MatchEngine, SearchQuery};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let engine = MatchEngine::from_source(&JsonFileSource::new("data.json")).await?;
//!
//!     let query = SearchQuery::from_input("Jon Smith", Some("1950"));
//!     for m in engine.search(&query).matches {
//!         println!("{} - {}%", m.record.full_name, m.match_percent());
//!     }
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod highlight;
pub mod normalize;
pub mod ranking;
pub mod scoring;
pub mod similarity;

// Re-export primary types
pub use crate::core::{Business, BusinessAffiliation, PersonRecord, Sample, ScoredMatch, SearchQuery};
pub use dataset::{AffiliationView, Dataset, DatasetSource, DatasetStats, JsonFileSource, StaticSource};
pub use engine::{MatchEngine, SearchResponse};
pub use error::{MatchEngineError, Result};
pub use highlight::{highlight, HighlightedWord};
pub use ranking::SearchOptions;
pub use scoring::{year_score, RecordScorer, ScoreWeights};
pub use similarity::{JaroWinkler, NormalizedLevenshtein, Similarity};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
