//! Text folding and tokenization shared by scoring and highlighting.

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Fold text into its comparable form
///
/// Lower-cases, trims, drops everything that is neither a word character
/// (`[A-Za-z0-9_]`) nor whitespace, then collapses whitespace runs into a
/// single space. Trimming runs before punctuation is dropped, so `"john ."`
/// folds to `"john "`.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let trimmed = lowered.trim();

    let mut out = String::with_capacity(trimmed.len());
    let mut in_space = false;
    for c in trimmed.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
                in_space = true;
            }
        } else if is_word_char(c) {
            out.push(c);
            in_space = false;
        }
    }
    out
}

/// Normalize, then split into non-empty tokens in order of appearance
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Bidirectional containment: either token is a substring of the other
#[inline]
pub fn tokens_overlap(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}
