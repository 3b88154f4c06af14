//! Text normalization for names and reference numbers.
//! Handles transliteration, punctuation stripping, and tokenization.

use deunicode::deunicode;
use regex::Regex;
use std::sync::LazyLock;

/// Compiled regex for stripping non-alphanumeric characters from names.
static RE_NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s]").expect("Invalid regex"));

/// Tokenize a free-text name into lowercase alphanumeric tokens.
///
/// Pipeline:
/// 1. Transliterate non-Latin characters to Latin via deunicode
/// 2. Strip punctuation and symbols (keep spaces)
/// 3. Lowercase and split on whitespace
///
/// Order of tokens follows the input; callers sort when they need
/// order-insensitive comparison.
pub fn name_tokens(text: &str) -> Vec<String> {
    let latin = deunicode(text);
    let clean = RE_NON_ALNUM.replace_all(&latin, " ");
    clean
        .to_lowercase()
        .split_whitespace()
        .map(|token| token.to_string())
        .collect()
}

/// Normalize a name to a single comparable string: tokenized per
/// [`name_tokens`], rejoined with single spaces. "Last, First" and
/// "last  first" both normalize to "last first".
pub fn normalize_name(text: &str) -> String {
    name_tokens(text).join(" ")
}

/// Casefold a name for direct equality checks: lowercase and collapse
/// whitespace runs to single spaces. Punctuation stays, so "Anna-Maria"
/// and "Anna Maria" remain distinct here and are left to the fuzzy
/// scorers to relate.
pub fn casefold_name(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Normalize a reference number for comparison: casefold and drop all
/// whitespace. Punctuation is kept: dashes and dots are part of the
/// reference format and distinguish genuinely different references.
pub fn normalize_reference(text: &str) -> String {
    text.split_whitespace().collect::<String>().to_lowercase()
}

#[cfg(test)]
#[path = "../tests/analysis/normalizer_tests.rs"]
mod tests;
