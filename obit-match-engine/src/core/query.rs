/// Search query parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Raw name text as typed
    pub text: String,

    /// Target birth year, if any
    pub year: Option<i32>,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            year: None,
        }
    }

    pub fn with_year(mut self, year: Option<i32>) -> Self {
        self.year = year;
        self
    }

    /// Build a query from raw form input
    ///
    /// The year is optional free text read up to its first non-digit, so
    /// `"1950.0"` and `"1950abc"` both give 1950. Missing, blank, digitless
    /// or zero all mean "no year constraint".
    pub fn from_input(text: impl Into<String>, year: Option<&str>) -> Self {
        Self::new(text).with_year(year.and_then(parse_year))
    }

    /// Blank queries match nothing
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Leading optionally-signed digit run, ignoring whatever follows
fn parse_year(input: &str) -> Option<i32> {
    let trimmed = input.trim();
    let unsigned = trimmed.trim_start_matches(|c: char| c == '+' || c == '-');
    let sign_len = trimmed.len() - unsigned.len();
    if sign_len > 1 {
        return None;
    }

    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .map_or(unsigned, |end| &unsigned[..end]);
    if digits.is_empty() {
        return None;
    }

    match trimmed[..sign_len + digits.len()].parse::<i32>() {
        Ok(0) | Err(_) => None,
        Ok(year) => Some(year),
    }
}
