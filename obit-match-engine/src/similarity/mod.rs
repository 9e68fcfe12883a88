pub mod fallback;
pub mod jaro_winkler;

pub use fallback::NormalizedLevenshtein;
pub use jaro_winkler::{jaro_winkler, JaroWinkler};

/// Trait for string similarity metrics
///
/// Implementations take already-normalized strings and return a score in
/// `[0.0, 1.0]`, higher meaning more similar.
pub trait Similarity: Send + Sync {
    /// Score two normalized strings
    fn similarity(&self, a: &str, b: &str) -> f64;

    /// Get metric name for logging
    fn name(&self) -> &str;
}
