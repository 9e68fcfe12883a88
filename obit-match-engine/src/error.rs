use thiserror::Error;

/// Main error type for the match engine
///
/// Scoring and ranking never fail; every variant here belongs to dataset
/// ingestion.
#[derive(Error, Debug)]
pub enum MatchEngineError {
    /// JSON parse errors (malformed document or missing required field)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record that deserialized but cannot be scored
    #[error("Invalid record #{index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    /// Dataset source failed to produce a dataset
    #[error("Failed to load dataset from '{source_name}': {message}")]
    Load { source_name: String, message: String },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, MatchEngineError>;
