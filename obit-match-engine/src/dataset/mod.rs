pub mod json;

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;

use crate::core::{Business, BusinessAffiliation, PersonRecord, Sample};
use crate::error::{MatchEngineError, Result};

pub use json::JsonFileSource;

/// Trait for dataset sources (JSON file, in-memory, ...)
///
/// `Ok` with an empty dataset means "no records available"; `Err` means the
/// dataset could not be obtained at all.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Load the full dataset
    async fn load(&self) -> Result<Dataset>;

    /// Get source name for logging
    fn name(&self) -> &str;
}

/// On-disk document layout
#[derive(Debug, Deserialize)]
struct DatasetDocument {
    #[serde(default)]
    businesses: Vec<Business>,
    obituaries: Vec<PersonRecord>,
    #[serde(default)]
    samples: Vec<Sample>,
}

/// Immutable collections the engine searches
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    businesses: Vec<Business>,
    records: Vec<PersonRecord>,
    samples: Vec<Sample>,
    /// Business name -> index of its first occurrence
    business_index: HashMap<String, usize>,
}

/// An affiliation joined with its business entry, if one exists
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffiliationView<'a> {
    pub affiliation: &'a BusinessAffiliation,
    pub business: Option<&'a Business>,
}

impl AffiliationView<'_> {
    pub fn category(&self) -> Option<&str> {
        self.business.map(|b| b.category.as_str())
    }
}

/// Collection sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetStats {
    pub businesses: usize,
    pub records: usize,
    pub samples: usize,
}

impl Dataset {
    /// Build a dataset, rejecting records that cannot be scored
    pub fn new(
        businesses: Vec<Business>,
        records: Vec<PersonRecord>,
        samples: Vec<Sample>,
    ) -> Result<Self> {
        for (index, record) in records.iter().enumerate() {
            validate_record(index, record)?;
        }

        let mut business_index = HashMap::with_capacity(businesses.len());
        for (i, business) in businesses.iter().enumerate() {
            business_index.entry(business.name.clone()).or_insert(i);
        }

        Ok(Self {
            businesses,
            records,
            samples,
            business_index,
        })
    }

    /// Dataset holding only person records
    pub fn from_records(records: Vec<PersonRecord>) -> Result<Self> {
        Self::new(Vec::new(), records, Vec::new())
    }

    /// Parse the `{ businesses, obituaries, samples }` document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let doc: DatasetDocument = serde_json::from_str(json)?;
        Self::new(doc.businesses, doc.obituaries, doc.samples)
    }

    pub fn records(&self) -> &[PersonRecord] {
        &self.records
    }

    pub fn businesses(&self) -> &[Business] {
        &self.businesses
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// True when there are no person records to score
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn stats(&self) -> DatasetStats {
        DatasetStats {
            businesses: self.businesses.len(),
            records: self.records.len(),
            samples: self.samples.len(),
        }
    }

    /// Look up a business by exact name (first entry wins)
    pub fn business(&self, name: &str) -> Option<&Business> {
        self.business_index.get(name).map(|&i| &self.businesses[i])
    }

    /// Join a record's affiliations against the business collection
    pub fn affiliated_businesses<'a>(&'a self, record: &'a PersonRecord) -> Vec<AffiliationView<'a>> {
        record
            .business_affiliations
            .iter()
            .map(|affiliation| AffiliationView {
                affiliation,
                business: self.business(&affiliation.name),
            })
            .collect()
    }
}

fn validate_record(index: usize, record: &PersonRecord) -> Result<()> {
    if record.full_name.trim().is_empty() {
        return Err(MatchEngineError::InvalidRecord {
            index,
            reason: "full_name is blank".to_string(),
        });
    }
    Ok(())
}

/// In-memory source wrapping an already built dataset
#[derive(Debug, Clone)]
pub struct StaticSource {
    dataset: Dataset,
}

impl StaticSource {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }
}

#[async_trait]
impl DatasetSource for StaticSource {
    async fn load(&self) -> Result<Dataset> {
        Ok(self.dataset.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}
