use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::dataset::{Dataset, DatasetSource};
use crate::error::{MatchEngineError, Result};

/// Reads a `data.json` style document from disk
///
/// ```json
/// {
///   "businesses": [{ "name": "...", "category": "..." }],
///   "obituaries": [{ "full_name": "...", "aliases": [], "birth_year": 1950, ... }],
///   "samples": [{ "name": "...", "year": 1950 }]
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    name: String,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path.display().to_string();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DatasetSource for JsonFileSource {
    async fn load(&self) -> Result<Dataset> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| MatchEngineError::Load {
                source_name: self.name.clone(),
                message: e.to_string(),
            })?;

        let dataset = Dataset::from_json_str(&content)?;
        let stats = dataset.stats();
        tracing::info!(
            "📦 Dataset loaded from {}: {} businesses, {} records, {} samples",
            self.name,
            stats.businesses,
            stats.records,
            stats.samples
        );

        Ok(dataset)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
