pub mod query;
pub mod record;
pub mod scored_match;

pub use query::SearchQuery;
pub use record::{Business, BusinessAffiliation, PersonRecord, Sample};
pub use scored_match::ScoredMatch;
