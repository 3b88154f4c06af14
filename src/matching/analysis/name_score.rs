//! Name similarity scorer.
//!
//! Different creditors format names differently (surname-first, truncated,
//! added middle names), so no single measure dominates. The scorer runs
//! three measures and keeps the best one, tagged with which measure won.

use crate::matching::analysis::normalizer::{name_tokens, normalize_name};
use crate::matching::analysis::similarity::{
    partial_similarity, token_set_similarity, token_sort_similarity,
};
use crate::matching::models::types::NameAlgorithm;

/// Result of one name comparison: best score in [0,1] plus the winning
/// measure, retained for explainability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NameScore {
    pub score: f64,
    pub algorithm: NameAlgorithm,
}

impl NameScore {
    fn missing() -> Self {
        Self {
            score: 0.0,
            algorithm: NameAlgorithm::Missing,
        }
    }
}

/// Compare two free-text names, order-insensitive. Absent or blank input
/// on either side yields 0.0, never an error.
pub fn score_name(expected: Option<&str>, extracted: Option<&str>) -> NameScore {
    let (Some(expected), Some(extracted)) = (expected, extracted) else {
        return NameScore::missing();
    };

    let expected_tokens = name_tokens(expected);
    let extracted_tokens = name_tokens(extracted);
    if expected_tokens.is_empty() || extracted_tokens.is_empty() {
        return NameScore::missing();
    }

    let expected_norm = normalize_name(expected);
    let extracted_norm = normalize_name(extracted);

    let measures = [
        (
            token_sort_similarity(&expected_tokens, &extracted_tokens),
            NameAlgorithm::TokenSort,
        ),
        (
            partial_similarity(&expected_norm, &extracted_norm),
            NameAlgorithm::Partial,
        ),
        (
            token_set_similarity(&expected_tokens, &extracted_tokens),
            NameAlgorithm::TokenSet,
        ),
    ];

    // Earliest measure wins ties, so the tag is deterministic.
    let mut best = NameScore::missing();
    for (score, algorithm) in measures {
        if score > best.score {
            best = NameScore {
                score: score.clamp(0.0, 1.0),
                algorithm,
            };
        }
    }
    best
}

#[cfg(test)]
#[path = "../tests/analysis/name_score_tests.rs"]
mod tests;
