use serde::Serialize;

use crate::normalize::{normalize, tokenize, tokens_overlap};

/// One display word of a matched name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightedWord {
    /// Word as it appears in the name, casing untouched
    pub word: String,
    pub is_match: bool,
}

/// Flag the words of `name` that correspond to a query token
///
/// Uses the same containment rule as token-overlap scoring, so a word that
/// normalizes to nothing (e.g. `&`) is contained in every token and is
/// flagged whenever the query has one.
pub fn highlight(name: &str, query_text: &str) -> Vec<HighlightedWord> {
    let query_tokens = tokenize(query_text);

    name.split_whitespace()
        .map(|word| {
            let folded = normalize(word);
            let is_match = query_tokens.iter().any(|qt| tokens_overlap(&folded, qt));
            HighlightedWord {
                word: word.to_string(),
                is_match,
            }
        })
        .collect()
}

/// Join highlighted words with single spaces, wrapping matches in markers
pub fn render_marked(words: &[HighlightedWord], open: &str, close: &str) -> String {
    words
        .iter()
        .map(|w| {
            if w.is_match {
                format!("{open}{}{close}", w.word)
            } else {
                w.word.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
