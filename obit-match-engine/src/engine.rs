use std::sync::Arc;
use std::time::Instant;

use crate::core::{ScoredMatch, SearchQuery};
use crate::dataset::{Dataset, DatasetSource};
use crate::error::Result;
use crate::highlight::{highlight, HighlightedWord};
use crate::ranking::{self, SearchOptions};
use crate::scoring::RecordScorer;
use crate::similarity::Similarity;

/// Main record search orchestrator
///
/// Holds the dataset behind an `Arc`; the engine never mutates it, so one
/// engine can serve concurrent searches from any number of threads.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    dataset: Arc<Dataset>,
    scorer: RecordScorer,
    options: SearchOptions,
}

/// Ranked matches plus search metadata
#[derive(Debug, Clone)]
pub struct SearchResponse<'a> {
    /// Matches, best first
    pub matches: Vec<ScoredMatch<'a>>,

    /// Number of records scored
    pub candidates: usize,

    /// Search latency in milliseconds
    pub latency_ms: f64,

    /// Similarity metric used (jaro-winkler, levenshtein)
    pub method: String,
}

impl<'a> SearchResponse<'a> {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn best(&self) -> Option<&ScoredMatch<'a>> {
        self.matches.first()
    }
}

impl MatchEngine {
    /// Create engine over a dataset with the default Jaro-Winkler scorer
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset,
            scorer: RecordScorer::default(),
            options: SearchOptions::default(),
        }
    }

    /// Load a dataset from `source` and build an engine over it
    pub async fn from_source(source: &dyn DatasetSource) -> Result<Self> {
        let dataset = source.load().await.inspect_err(|e| {
            tracing::error!("❌ Dataset source {} failed: {}", source.name(), e);
        })?;

        if dataset.is_empty() {
            tracing::warn!("⚠️ Dataset source {} has no records", source.name());
        }

        Ok(Self::new(Arc::new(dataset)))
    }

    /// Swap the similarity metric, keeping the current score weights
    pub fn with_similarity(mut self, similarity: Arc<dyn Similarity>) -> Self {
        self.scorer = RecordScorer::new(similarity).with_weights(self.scorer.weights());
        self
    }

    pub fn with_scorer(mut self, scorer: RecordScorer) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn scorer(&self) -> &RecordScorer {
        &self.scorer
    }

    /// Search the dataset
    pub fn search(&self, query: &SearchQuery) -> SearchResponse<'_> {
        let start = Instant::now();
        let records = self.dataset.records();

        if records.is_empty() && !query.is_blank() {
            tracing::warn!("No records available for '{}'", query.text);
        }

        let matches = ranking::search(&self.scorer, query, records, &self.options);
        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

        tracing::debug!(
            "🔍 '{}' (year {:?}) → {} matches of {} records in {:.2}ms [{}]",
            query.text,
            query.year,
            matches.len(),
            records.len(),
            latency_ms,
            self.scorer.method()
        );
        if let Some(best) = matches.first() {
            tracing::debug!("Best: {}", best.display());
        }

        SearchResponse {
            matches,
            candidates: records.len(),
            latency_ms,
            method: self.scorer.method().to_string(),
        }
    }

    /// Highlight a matched record's canonical name against the query
    pub fn highlight(&self, scored: &ScoredMatch<'_>, query: &SearchQuery) -> Vec<HighlightedWord> {
        highlight(&scored.record.full_name, &query.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PersonRecord;
    use crate::dataset::StaticSource;
    use crate::scoring::ScoreWeights;
    use crate::similarity::NormalizedLevenshtein;

    fn engine() -> MatchEngine {
        let dataset = Dataset::from_records(vec![
            PersonRecord::new("Mary Jones", 1930, 1999),
            PersonRecord::new("John Smith", 1950, 2010),
        ])
        .unwrap();
        MatchEngine::new(Arc::new(dataset))
    }

    #[test]
    fn test_engine_search() {
        let engine = engine();
        let query = SearchQuery::from_input("Jon Smith", None);
        let response = engine.search(&query);

        assert_eq!(response.candidates, 2);
        assert_eq!(response.method, "jaro-winkler");
        let best = response.best().unwrap();
        assert_eq!(best.record.full_name, "John Smith");

        let words = engine.highlight(best, &query);
        assert!(words.iter().any(|w| w.word == "Smith" && w.is_match));
    }

    #[test]
    fn test_engine_blank_query() {
        let engine = engine();
        let response = engine.search(&SearchQuery::new("  "));
        assert!(response.is_empty());
    }

    #[test]
    fn test_engine_empty_dataset() {
        let engine = MatchEngine::new(Arc::new(Dataset::default()));
        let response = engine.search(&SearchQuery::new("John"));
        assert!(response.is_empty());
        assert_eq!(response.candidates, 0);
    }

    #[test]
    fn test_engine_with_similarity() {
        let engine = engine().with_similarity(Arc::new(NormalizedLevenshtein::new()));
        let response = engine.search(&SearchQuery::new("John Smith"));
        assert_eq!(response.method, "levenshtein");
        assert_eq!(response.matches.len(), 1);
    }

    #[test]
    fn test_with_similarity_keeps_weights() {
        let weights = ScoreWeights {
            name: 0.9,
            year: 0.1,
        };
        let engine = engine()
            .with_scorer(RecordScorer::default().with_weights(weights))
            .with_similarity(Arc::new(NormalizedLevenshtein::new()));

        assert_eq!(engine.scorer().weights(), weights);
        assert_eq!(engine.scorer().method(), "levenshtein");

        // 0.9 * 1.0 + 0.1 * 0.1 with a distant year
        let query = SearchQuery::new("John Smith").with_year(Some(1900));
        let record = &engine.dataset().records()[1];
        let score = engine.scorer().composite_score(&query, record);
        assert!((score - 0.91).abs() < 1e-9);
        assert!(engine.search(&query).is_empty());
    }

    #[tokio::test]
    async fn test_engine_from_source() {
        let dataset = Dataset::from_records(vec![PersonRecord::new("John Smith", 1950, 2010)]).unwrap();
        let engine = MatchEngine::from_source(&StaticSource::new(dataset)).await.unwrap();
        assert_eq!(engine.dataset().records().len(), 1);
    }
}
