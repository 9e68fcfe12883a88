use serde::{Deserialize, Serialize};

/// Deserialize year from string or int (data files mix both)
fn deserialize_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum YearValue {
        Int(i32),
        String(String),
        Null,
    }

    match YearValue::deserialize(deserializer)? {
        YearValue::Int(i) => Ok(Some(i)),
        YearValue::String(s) if s.trim().is_empty() => Ok(None),
        YearValue::String(s) => s
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|_| Error::custom(format!("Invalid year string: {}", s))),
        YearValue::Null => Ok(None),
    }
}

/// A (business, role) pair on a person record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BusinessAffiliation {
    /// Business name, joined against [`Business::name`]
    pub name: String,

    /// Role held at the business
    pub role: String,
}

impl BusinessAffiliation {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }
}

/// One person from the obituary collection
///
/// Records are read-only once loaded; scoring only borrows them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonRecord {
    /// Canonical full name
    pub full_name: String,

    /// Alternative names, tried alongside the canonical name
    #[serde(default)]
    pub aliases: Vec<String>,

    pub birth_year: i32,

    pub death_year: i32,

    /// Last known residence
    pub last_residence: String,

    pub occupation: String,

    #[serde(default)]
    pub business_affiliations: Vec<BusinessAffiliation>,
}

impl PersonRecord {
    /// Create a record with the required name and years; text fields start empty
    pub fn new(full_name: impl Into<String>, birth_year: i32, death_year: i32) -> Self {
        Self {
            full_name: full_name.into(),
            aliases: Vec::new(),
            birth_year,
            death_year,
            last_residence: String::new(),
            occupation: String::new(),
            business_affiliations: Vec::new(),
        }
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_affiliation(mut self, name: impl Into<String>, role: impl Into<String>) -> Self {
        self.business_affiliations
            .push(BusinessAffiliation::new(name, role));
        self
    }

    /// Canonical name followed by every alias, in order
    pub fn name_variants(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.full_name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// Get display name (for logging/UI)
    pub fn display_name(&self) -> String {
        format!("{} ({} - {})", self.full_name, self.birth_year, self.death_year)
    }
}

/// A business entity referenced by affiliations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Business {
    pub name: String,

    #[serde(default)]
    pub category: String,

    /// Remaining attributes, carried through untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Business {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// Quick-fill query entry shipped with the dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sample {
    pub name: String,

    #[serde(default)]
    #[serde(deserialize_with = "deserialize_year")]
    pub year: Option<i32>,
}
