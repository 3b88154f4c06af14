//! Reference-number similarity scorer.
//!
//! References are the highest-precision signal available, so the scorer
//! tolerates scanning noise (the `1`/`I`, `0`/`O` confusion set of the
//! upstream OCR pipeline) without tolerating genuinely different
//! references. Three tiers per candidate, best candidate wins.

use crate::matching::analysis::normalizer::{name_tokens, normalize_reference};
use crate::matching::analysis::similarity::{partial_similarity, token_sort_similarity};
use crate::matching::models::types::ReferenceTier;

/// Strict cutoff for the partial and token tiers. A single confused
/// character on a typical reference length clears it; a different
/// reference number does not.
pub const REFERENCE_PARTIAL_CUTOFF: f64 = 0.80;

/// Result of one reference comparison: best score across all extracted
/// candidates and tiers, plus which tier and candidate won.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceScore {
    pub score: f64,
    pub tier: ReferenceTier,
    /// The extracted candidate string that produced the score.
    pub matched: Option<String>,
}

impl ReferenceScore {
    fn missing() -> Self {
        Self {
            score: 0.0,
            tier: ReferenceTier::Missing,
            matched: None,
        }
    }
}

/// Compare the expected reference against every extracted candidate.
///
/// Per candidate, in order: exact after case/whitespace normalization
/// (1.0, short-circuits everything), partial similarity gated by
/// [`REFERENCE_PARTIAL_CUTOFF`], then word-order-insensitive similarity
/// behind the same cutoff for references re-segmented by extraction.
pub fn score_reference(expected: &str, candidates: &[String]) -> ReferenceScore {
    let expected_norm = normalize_reference(expected);
    if expected_norm.is_empty() || candidates.is_empty() {
        return ReferenceScore::missing();
    }

    let expected_tokens = name_tokens(expected);
    let mut best = ReferenceScore::missing();
    for candidate in candidates {
        let candidate_norm = normalize_reference(candidate);
        if candidate_norm.is_empty() {
            continue;
        }

        if candidate_norm == expected_norm {
            return ReferenceScore {
                score: 1.0,
                tier: ReferenceTier::Exact,
                matched: Some(candidate.clone()),
            };
        }

        let partial = partial_similarity(&expected_norm, &candidate_norm);
        if partial >= REFERENCE_PARTIAL_CUTOFF && partial > best.score {
            best = ReferenceScore {
                score: partial,
                tier: ReferenceTier::Partial,
                matched: Some(candidate.clone()),
            };
        }

        let token_sort = token_sort_similarity(&expected_tokens, &name_tokens(candidate));
        if token_sort >= REFERENCE_PARTIAL_CUTOFF && token_sort > best.score {
            best = ReferenceScore {
                score: token_sort,
                tier: ReferenceTier::TokenSort,
                matched: Some(candidate.clone()),
            };
        }
    }
    best
}

#[cfg(test)]
#[path = "../tests/analysis/reference_score_tests.rs"]
mod tests;
