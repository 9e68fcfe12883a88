use rapidfuzz::distance::levenshtein;

use crate::similarity::Similarity;

/// Rapidfuzz-based normalized Levenshtein metric
///
/// Drop-in alternative to [`super::JaroWinkler`]; keeps the same edge rules
/// (empty side scores 0, identical scores 1).
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizedLevenshtein;

impl NormalizedLevenshtein {
    pub fn new() -> Self {
        Self
    }
}

impl Similarity for NormalizedLevenshtein {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }
        if a == b {
            return 1.0;
        }
        levenshtein::normalized_similarity(a.chars(), b.chars())
    }

    fn name(&self) -> &str {
        "levenshtein"
    }
}
