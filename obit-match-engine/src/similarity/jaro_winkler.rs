use crate::similarity::Similarity;

/// Longest common prefix that earns the Winkler boost
const MAX_PREFIX: usize = 4;

/// Boost per shared prefix character
const PREFIX_SCALE: f64 = 0.1;

/// Jaro-Winkler similarity over `char`s
///
/// Returns 0 when either side is empty and 1 for identical strings. Matching
/// is greedy left to right inside a window of `max(len)/2 - 1`; each
/// character of `b` is consumed at most once.
pub fn jaro_winkler(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (m, n) = (a.len(), b.len());

    if m == 0 || n == 0 {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let window = (m.max(n) / 2).saturating_sub(1);
    let mut a_matched = vec![false; m];
    let mut b_matched = vec![false; n];
    let mut matches = 0usize;

    for (i, &ca) in a.iter().enumerate() {
        let start = i.saturating_sub(window);
        let end = (i + window + 1).min(n);
        for j in start..end {
            if b_matched[j] || b[j] != ca {
                continue;
            }
            a_matched[i] = true;
            b_matched[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Walk both matched sequences in order and count disagreeing pairs
    let mut transpositions = 0usize;
    let mut k = 0usize;
    for (i, &ca) in a.iter().enumerate() {
        if !a_matched[i] {
            continue;
        }
        while !b_matched[k] {
            k += 1;
        }
        if ca != b[k] {
            transpositions += 1;
        }
        k += 1;
    }

    let mf = matches as f64;
    let jaro = (mf / m as f64 + mf / n as f64 + (mf - transpositions as f64 / 2.0) / mf) / 3.0;

    let prefix = a
        .iter()
        .zip(b.iter())
        .take(MAX_PREFIX)
        .take_while(|(x, y)| x == y)
        .count();

    jaro + prefix as f64 * PREFIX_SCALE * (1.0 - jaro)
}

/// Default metric used by the scorer
#[derive(Debug, Clone, Copy, Default)]
pub struct JaroWinkler;

impl JaroWinkler {
    pub fn new() -> Self {
        Self
    }
}

impl Similarity for JaroWinkler {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        jaro_winkler(a, b)
    }

    fn name(&self) -> &str {
        "jaro-winkler"
    }
}
