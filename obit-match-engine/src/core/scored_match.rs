use serde::Serialize;

use crate::core::PersonRecord;

/// A record paired with its score for one query
///
/// Borrowed from the dataset; built fresh for every search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredMatch<'a> {
    #[serde(flatten)]
    pub record: &'a PersonRecord,

    /// Composite score (0.0 - 1.0)
    #[serde(rename = "matchScore")]
    pub score: f64,
}

impl<'a> ScoredMatch<'a> {
    pub fn new(record: &'a PersonRecord, score: f64) -> Self {
        Self { record, score }
    }

    /// Score as a whole percentage (0 - 100)
    pub fn match_percent(&self) -> u32 {
        (self.score * 100.0).round() as u32
    }

    /// Record fields plus `matchScore`, pretty-printed for copying
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Get display string for logging
    pub fn display(&self) -> String {
        format!("{} - {}%", self.record.display_name(), self.match_percent())
    }
}
