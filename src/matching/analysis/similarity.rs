//! Similarity primitives shared by the signal scorers.
//!
//! All functions return a normalized score in [0,1] and treat empty input
//! as zero similarity rather than failing.

use strsim::normalized_levenshtein;

/// Word-order-insensitive similarity: compare the sorted-token joins of
/// both strings. "Shogun, Raiden" vs "Raiden Shogun" scores 1.0.
pub fn token_sort_similarity(a_tokens: &[String], b_tokens: &[String]) -> f64 {
    if a_tokens.is_empty() || b_tokens.is_empty() {
        return 0.0;
    }
    let a_sorted = sorted_join(a_tokens);
    let b_sorted = sorted_join(b_tokens);
    normalized_levenshtein(&a_sorted, &b_sorted)
}

/// Substring / near-substring similarity: slide the shorter string across
/// the longer one and keep the best window similarity. Rewards one value
/// being a contiguous (or OCR-perturbed) fragment of the other.
pub fn partial_similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let (shorter, longer) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let shorter_len = shorter.chars().count();
    let longer_chars: Vec<char> = longer.chars().collect();

    let mut best: f64 = 0.0;
    for start in 0..=(longer_chars.len() - shorter_len) {
        let window: String = longer_chars[start..start + shorter_len].iter().collect();
        best = best.max(normalized_levenshtein(shorter, &window));
        if best >= 1.0 {
            break;
        }
    }
    best
}

/// Token-set similarity: split both strings into token sets, then compare
/// the shared-token core against each side's core-plus-remainder string
/// and the two full strings against each other, keeping the best. Rewards
/// one name being a superset of the other's tokens (extra middle name,
/// added title).
pub fn token_set_similarity(a_tokens: &[String], b_tokens: &[String]) -> f64 {
    if a_tokens.is_empty() || b_tokens.is_empty() {
        return 0.0;
    }

    let a_set: std::collections::BTreeSet<&str> =
        a_tokens.iter().map(|token| token.as_str()).collect();
    let b_set: std::collections::BTreeSet<&str> =
        b_tokens.iter().map(|token| token.as_str()).collect();

    let shared: Vec<&str> = a_set.intersection(&b_set).copied().collect();
    let a_only: Vec<&str> = a_set.difference(&b_set).copied().collect();
    let b_only: Vec<&str> = b_set.difference(&a_set).copied().collect();

    let core = shared.join(" ");
    let core_plus_a = join_nonempty(&core, &a_only.join(" "));
    let core_plus_b = join_nonempty(&core, &b_only.join(" "));

    if core.is_empty() {
        return normalized_levenshtein(&core_plus_a, &core_plus_b);
    }

    normalized_levenshtein(&core, &core_plus_a)
        .max(normalized_levenshtein(&core, &core_plus_b))
        .max(normalized_levenshtein(&core_plus_a, &core_plus_b))
}

fn sorted_join(tokens: &[String]) -> String {
    let mut sorted = tokens.to_vec();
    sorted.sort();
    sorted.join(" ")
}

fn join_nonempty(left: &str, right: &str) -> String {
    match (left.is_empty(), right.is_empty()) {
        (true, _) => right.to_string(),
        (_, true) => left.to_string(),
        _ => format!("{left} {right}"),
    }
}

#[cfg(test)]
#[path = "../tests/analysis/similarity_tests.rs"]
mod tests;
