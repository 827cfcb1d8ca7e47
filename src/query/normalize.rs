//! Accent-insensitive text normalization and fuzzy containment matching.
//!
//! Both the query string and every searched field go through the same
//! normalization, so "Solo Levelling" finds "Sōlo Lévelling" and vice
//! versa. Normalization is idempotent.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for matching.
///
/// NFD-decomposes, drops combining marks (accents), keeps only ASCII
/// alphanumerics and whitespace, lowercases, and trims. Whitespace is
/// collapsed to single spaces so token splitting is uniform.
///
/// Non-Latin scripts are stripped entirely; catalog fields are
/// Latin-script.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;
    for c in raw.nfd() {
        if is_combining_mark(c) {
            continue;
        }
        if c.is_whitespace() {
            pending_space = !out.is_empty();
        } else if c.is_ascii_alphanumeric() {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(c.to_ascii_lowercase());
        }
    }
    out
}

/// Split a normalized query into match tokens.
pub fn tokenize(raw: &str) -> Vec<String> {
    normalize(raw)
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Fuzzy containment: every token must appear as a substring of the
/// normalized field. An empty token list never matches (a query that
/// normalizes to nothing should not select the whole catalog).
pub fn matches_all_tokens(field: &str, tokens: &[String]) -> bool {
    if tokens.is_empty() {
        return false;
    }
    let target = normalize(field);
    tokens.iter().all(|token| target.contains(token.as_str()))
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
