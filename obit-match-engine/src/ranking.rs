use rayon::prelude::*;

use crate::core::{PersonRecord, ScoredMatch, SearchQuery};
use crate::scoring::{PreparedQuery, RecordScorer};

/// Ranking/filter configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    /// Top-K kept after sorting, before the threshold applies
    pub max_results: usize,
    /// Minimum composite score (0.0 - 1.0) a kept match must reach
    pub min_score: f64,
    /// Score records on the rayon pool
    pub parallel: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_results: 5,
            min_score: 0.95,
            parallel: false,
        }
    }
}

/// Score every record and sort descending; equal scores keep input order
pub fn rank_all<'a>(
    scorer: &RecordScorer,
    query: &SearchQuery,
    records: &'a [PersonRecord],
    parallel: bool,
) -> Vec<ScoredMatch<'a>> {
    let prepared = PreparedQuery::new(query);
    let score = |record: &'a PersonRecord| {
        ScoredMatch::new(record, scorer.composite_score_prepared(&prepared, record))
    };

    let mut ranked: Vec<ScoredMatch<'a>> = if parallel {
        records.par_iter().map(score).collect()
    } else {
        records.iter().map(score).collect()
    };

    // Stable sort
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// Rank records for a query
///
/// Blank queries return nothing. The top `max_results` are taken first and
/// only then filtered by `min_score`, so a search may return fewer than
/// `max_results` entries, or none.
pub fn search<'a>(
    scorer: &RecordScorer,
    query: &SearchQuery,
    records: &'a [PersonRecord],
    options: &SearchOptions,
) -> Vec<ScoredMatch<'a>> {
    if query.is_blank() {
        return Vec::new();
    }

    let mut ranked = rank_all(scorer, query, records, options.parallel);
    ranked.truncate(options.max_results);
    ranked.retain(|m| m.score >= options.min_score);
    ranked
}
