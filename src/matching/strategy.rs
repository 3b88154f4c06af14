//! Matching strategies: a closed set of interchangeable scoring policies.
//!
//! All three variants share one contract, evaluate a single inquiry
//! against the extracted fields and return a [`ScoreBreakdown`], so the
//! orchestrator is parameterized by variant and nothing else changes.

use serde::{Deserialize, Serialize};

use crate::matching::analysis::name_score::score_name;
use crate::matching::analysis::normalizer::{casefold_name, normalize_reference};
use crate::matching::analysis::reference_score::score_reference;
use crate::matching::models::types::{
    ExtractedFields, InquiryRecord, NameAlgorithm, ReferenceTier, ScoreBreakdown,
};
use crate::matching::thresholds::SignalWeights;

/// Which scoring policy the orchestrator runs. Selected by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Direct equality on name and reference after normalization. No
    /// partial credit; cheapest to evaluate.
    Exact,
    /// Weighted fuzzy signals with the both-signals-required rule.
    Fuzzy,
    /// Exact first, fuzzy fallback. The recommended default: a clean
    /// reply echoing the reference exactly costs near nothing.
    Combined,
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyKind::Exact => write!(f, "exact"),
            StrategyKind::Fuzzy => write!(f, "fuzzy"),
            StrategyKind::Combined => write!(f, "combined"),
        }
    }
}

impl StrategyKind {
    /// Score one inquiry against the extracted fields.
    pub fn evaluate(
        &self,
        inquiry: &InquiryRecord,
        extracted: &ExtractedFields,
        weights: &SignalWeights,
    ) -> ScoreBreakdown {
        match self {
            StrategyKind::Exact => evaluate_exact(inquiry, extracted, weights, *self),
            StrategyKind::Fuzzy => evaluate_fuzzy(inquiry, extracted, weights, *self),
            StrategyKind::Combined => {
                let exact = evaluate_exact(inquiry, extracted, weights, *self);
                if exact.total >= 1.0 {
                    // Unambiguous; fuzzy scoring is never consulted.
                    return exact;
                }
                evaluate_fuzzy(inquiry, extracted, weights, *self)
            }
        }
    }
}

/// 1.0 iff both name and reference match exactly after case/whitespace
/// normalization, otherwise an all-zero breakdown.
fn evaluate_exact(
    inquiry: &InquiryRecord,
    extracted: &ExtractedFields,
    weights: &SignalWeights,
    strategy: StrategyKind,
) -> ScoreBreakdown {
    let inquiry_name = casefold_name(&inquiry.client_name);
    let name_matches = extracted
        .client_name
        .as_deref()
        .map(|name| !inquiry_name.is_empty() && casefold_name(name) == inquiry_name)
        .unwrap_or(false);

    let inquiry_reference = normalize_reference(&inquiry.reference_number);
    let matched_reference = extracted.reference_candidates.iter().find(|candidate| {
        !inquiry_reference.is_empty() && normalize_reference(candidate) == inquiry_reference
    });

    if !name_matches || matched_reference.is_none() {
        return ScoreBreakdown::zero(inquiry, extracted, strategy);
    }

    // Both raw scores are 1.0, so each weighted contribution is the
    // weight itself and the contributions sum to the total.
    ScoreBreakdown {
        name_score: 1.0,
        name_weighted: weights.name,
        name_algorithm: NameAlgorithm::TokenSort,
        reference_score: 1.0,
        reference_weighted: weights.reference,
        reference_tier: ReferenceTier::Exact,
        matched_reference: matched_reference.cloned(),
        inquiry_name: inquiry.client_name.clone(),
        extracted_name: extracted.client_name.clone(),
        inquiry_reference: inquiry.reference_number.clone(),
        total: 1.0,
        both_signals_zeroed: false,
        strategy,
    }
}

/// Weighted sum of both signal scorers.
///
/// Both-signals-required rule: if either raw signal is exactly 0.0 the
/// total is forced to 0.0. References are sometimes reused across
/// unrelated cases and names alone are too ambiguous, so neither signal
/// is sufficient without corroboration from the other.
fn evaluate_fuzzy(
    inquiry: &InquiryRecord,
    extracted: &ExtractedFields,
    weights: &SignalWeights,
    strategy: StrategyKind,
) -> ScoreBreakdown {
    let name = score_name(
        Some(inquiry.client_name.as_str()),
        extracted.client_name.as_deref(),
    );
    let reference = score_reference(&inquiry.reference_number, &extracted.reference_candidates);

    let name_weighted = name.score * weights.name;
    let reference_weighted = reference.score * weights.reference;

    let both_signals_zeroed = name.score == 0.0 || reference.score == 0.0;
    let total = if both_signals_zeroed {
        0.0
    } else {
        name_weighted + reference_weighted
    };

    ScoreBreakdown {
        name_score: name.score,
        name_weighted,
        name_algorithm: name.algorithm,
        reference_score: reference.score,
        reference_weighted,
        reference_tier: reference.tier,
        matched_reference: reference.matched,
        inquiry_name: inquiry.client_name.clone(),
        extracted_name: extracted.client_name.clone(),
        inquiry_reference: inquiry.reference_number.clone(),
        total,
        both_signals_zeroed,
        strategy,
    }
}

#[cfg(test)]
#[path = "tests/strategy_tests.rs"]
mod tests;
