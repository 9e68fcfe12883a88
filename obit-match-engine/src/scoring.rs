use std::sync::Arc;

use crate::core::{PersonRecord, SearchQuery};
use crate::normalize::{normalize, tokenize, tokens_overlap};
use crate::similarity::{JaroWinkler, Similarity};

/// Weights of the two signals in the composite score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub name: f64,
    pub year: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            name: 0.7,
            year: 0.3,
        }
    }
}

/// Query text folded once and reused for every record
#[derive(Debug, Clone)]
pub struct PreparedQuery {
    pub normalized: String,
    pub tokens: Vec<String>,
    pub year: Option<i32>,
}

impl PreparedQuery {
    pub fn new(query: &SearchQuery) -> Self {
        Self::from_text(&query.text, query.year)
    }

    fn from_text(text: &str, year: Option<i32>) -> Self {
        Self {
            normalized: normalize(text),
            tokens: tokenize(text),
            year,
        }
    }
}

/// Proximity of a query year to a record year
///
/// No query year is neutral (1.0). Otherwise 1.0 / 0.9 / 0.8 for a delta of
/// 0 / 1 / 2, then a linear decay floored at 0.1.
pub fn year_score(query_year: Option<i32>, record_year: i32) -> f64 {
    let Some(query_year) = query_year else {
        return 1.0;
    };

    let delta = (i64::from(query_year) - i64::from(record_year)).unsigned_abs();
    match delta {
        0 => 1.0,
        1 => 0.9,
        2 => 0.8,
        _ => (0.5 - (delta as f64 / 50.0).min(0.4)).max(0.1),
    }
}

/// Share of query tokens contained in (or containing) some name token
fn token_overlap(query_tokens: &[String], name_tokens: &[String]) -> f64 {
    let common = query_tokens
        .iter()
        .filter(|qt| name_tokens.iter().any(|nt| tokens_overlap(nt, qt)))
        .count();
    common as f64 / query_tokens.len().max(1) as f64
}

/// Scores person records against a query
#[derive(Clone)]
pub struct RecordScorer {
    similarity: Arc<dyn Similarity>,
    weights: ScoreWeights,
}

impl RecordScorer {
    pub fn new(similarity: Arc<dyn Similarity>) -> Self {
        Self {
            similarity,
            weights: ScoreWeights::default(),
        }
    }

    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Name of the underlying similarity metric
    pub fn method(&self) -> &str {
        self.similarity.name()
    }

    /// Best name match across the canonical name and every alias
    pub fn name_score(&self, query_text: &str, record: &PersonRecord) -> f64 {
        self.name_score_prepared(&PreparedQuery::from_text(query_text, None), record)
    }

    pub fn name_score_prepared(&self, query: &PreparedQuery, record: &PersonRecord) -> f64 {
        record
            .name_variants()
            .map(|variant| {
                let whole = self
                    .similarity
                    .similarity(&query.normalized, &normalize(variant));
                let overlap = token_overlap(&query.tokens, &tokenize(variant));
                whole.max(overlap)
            })
            .fold(0.0, f64::max)
    }

    /// Weighted name and birth-year score, in `[0.0, 1.0]`
    pub fn composite_score(&self, query: &SearchQuery, record: &PersonRecord) -> f64 {
        self.composite_score_prepared(&PreparedQuery::new(query), record)
    }

    pub fn composite_score_prepared(&self, query: &PreparedQuery, record: &PersonRecord) -> f64 {
        let name = self.name_score_prepared(query, record);
        let year = year_score(query.year, record.birth_year);
        (self.weights.name * name + self.weights.year * year).clamp(0.0, 1.0)
    }
}

impl Default for RecordScorer {
    fn default() -> Self {
        Self::new(Arc::new(JaroWinkler::new()))
    }
}

impl std::fmt::Debug for RecordScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordScorer")
            .field("similarity", &self.similarity.name())
            .field("weights", &self.weights)
            .finish()
    }
}
