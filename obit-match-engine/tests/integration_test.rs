use obit_match_engine::{
    highlight, DatasetSource, JsonFileSource, MatchEngine, MatchEngineError, SearchOptions,
    SearchQuery,
};
use std::io::Write;
use std::path::PathBuf;

fn data_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/data.json")
}

async fn engine() -> MatchEngine {
    MatchEngine::from_source(&JsonFileSource::new(data_path()))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_bundled_dataset_loads() {
    let engine = engine().await;
    let stats = engine.dataset().stats();

    assert_eq!(stats.records, 4);
    assert_eq!(stats.businesses, 5);
    assert_eq!(stats.samples, 3);
    assert_eq!(engine.dataset().samples()[1].year, Some(1899));
    assert_eq!(engine.dataset().samples()[2].year, None);
}

#[tokio::test]
async fn test_misspelled_name_with_year() {
    let engine = engine().await;
    let response = engine.search(&SearchQuery::from_input("Jon Smith", Some("1950")));

    assert_eq!(response.matches.len(), 1);
    let best = response.best().unwrap();
    assert_eq!(best.record.full_name, "John Smith");
    assert!(best.score >= 0.95 && best.score < 1.0);
    assert_eq!(best.match_percent(), 98);
}

#[tokio::test]
async fn test_distant_year_drops_match() {
    let engine = engine().await;
    let response = engine.search(&SearchQuery::from_input("Jon Smith", Some("1900")));
    assert!(response.is_empty());
}

#[tokio::test]
async fn test_year_with_trailing_text_still_applies() {
    let engine = engine().await;
    let response = engine.search(&SearchQuery::from_input("Jon Smith", Some("1900.0")));
    assert!(response.is_empty());

    let response = engine.search(&SearchQuery::from_input("Jon Smith", Some("1950abc")));
    assert_eq!(response.matches.len(), 1);
}

#[tokio::test]
async fn test_non_numeric_year_is_ignored() {
    let engine = engine().await;
    let response = engine.search(&SearchQuery::from_input("Jon Smith", Some("around 1900")));
    assert_eq!(response.matches.len(), 1);
}

#[tokio::test]
async fn test_alias_search_and_affiliations() {
    let engine = engine().await;
    let query = SearchQuery::from_input("Al Capone", Some("1899"));
    let response = engine.search(&query);

    assert_eq!(response.matches.len(), 1);
    let best = response.best().unwrap();
    assert_eq!(best.record.full_name, "Alphonse Gabriel Capone");
    assert_eq!(best.score, 1.0);

    let joined = engine.dataset().affiliated_businesses(best.record);
    assert_eq!(joined.len(), 1);
    assert_eq!(joined[0].category(), Some("Services"));

    let words: Vec<bool> = engine.highlight(best, &query).iter().map(|w| w.is_match).collect();
    assert_eq!(words, vec![true, false, true]);
}

#[tokio::test]
async fn test_unknown_business_has_no_category() {
    let engine = engine().await;
    let response = engine.search(&SearchQuery::new("Robert Lake"));
    let best = response.best().unwrap();

    let joined = engine.dataset().affiliated_businesses(best.record);
    assert_eq!(joined[0].category(), Some("Retail"));
    assert_eq!(joined[1].affiliation.name, "Northern Feed Co.");
    assert!(joined[1].business.is_none());
}

#[tokio::test]
async fn test_highlight_matches_scoring() {
    let engine = engine().await;
    let query = SearchQuery::new("Mary Jones");
    let response = engine.search(&query);

    assert_eq!(response.matches.len(), 1);
    let words = highlight(&response.matches[0].record.full_name, &query.text);
    let flags: Vec<(&str, bool)> = words.iter().map(|w| (w.word.as_str(), w.is_match)).collect();
    assert_eq!(flags, vec![("Mary", true), ("Ellen", false), ("Jones", true)]);
}

#[tokio::test]
async fn test_blank_query_returns_nothing() {
    let engine = engine().await;
    assert!(engine.search(&SearchQuery::new("")).is_empty());
    assert!(engine.search(&SearchQuery::new(" \t ")).is_empty());
}

#[tokio::test]
async fn test_results_bounded_and_thresholded() {
    let engine = engine().await.with_options(SearchOptions {
        parallel: true,
        ..SearchOptions::default()
    });

    for sample in engine.dataset().samples() {
        let query = SearchQuery::new(sample.name.clone()).with_year(sample.year);
        let response = engine.search(&query);
        assert!(response.matches.len() <= 5);
        assert!(response.matches.iter().all(|m| m.score >= 0.95));
    }
}

#[tokio::test]
async fn test_copy_payload() {
    let engine = engine().await;
    let response = engine.search(&SearchQuery::new("Mary Jones"));
    let json = response.matches[0].to_json_pretty().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["full_name"], "Mary Ellen Jones");
    assert_eq!(value["matchScore"], 1.0);
    assert_eq!(value["aliases"], serde_json::json!([]));
}

#[tokio::test]
async fn test_empty_dataset_is_not_a_load_failure() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"businesses": [], "obituaries": [], "samples": []}}"#).unwrap();

    let engine = MatchEngine::from_source(&JsonFileSource::new(file.path()))
        .await
        .unwrap();
    assert!(engine.dataset().is_empty());
    assert!(engine.search(&SearchQuery::new("John Smith")).is_empty());
}

#[tokio::test]
async fn test_invalid_record_fails_at_ingestion() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"obituaries": [{{"full_name": "", "birth_year": 1900, "death_year": 1950,
            "last_residence": "", "occupation": ""}}]}}"#
    )
    .unwrap();

    let source = JsonFileSource::new(file.path());
    let err = source.load().await.unwrap_err();
    assert!(matches!(err, MatchEngineError::InvalidRecord { index: 0, .. }));
    assert!(MatchEngine::from_source(&source).await.is_err());
}
