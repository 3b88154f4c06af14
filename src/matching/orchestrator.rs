//! Match orchestration: retrieve, score, decide, explain.
//!
//! One call to [`MatchEngine::find_match`] is a bounded, synchronous
//! computation with no internal retries. Failures in the store, the
//! threshold provider, or a scorer propagate to the caller unmodified;
//! downgrading an engine failure to "no candidates" would be
//! indistinguishable from a legitimate empty result and would corrupt
//! calibration data.

use chrono::{DateTime, Utc};
use log::debug;

use crate::matching::models::explain::{ExplainabilityRecord, RetrievalFilters};
use crate::matching::models::types::{
    sort_candidates_ranked, ExtractedFields, MatchDecision, MatchStatus, ScoredCandidate,
};
use crate::matching::retrieval::{CandidateRetriever, InquiryStore};
use crate::matching::strategy::StrategyKind;
use crate::matching::thresholds::{ThresholdKind, ThresholdProvider};
use crate::types::errors::MatchResult;

/// Engine configuration. Strategy selection is configuration, not runtime
/// type inspection; the orchestration logic is identical per variant.
#[derive(Debug, Clone, Copy)]
pub struct MatcherConfig {
    pub strategy: StrategyKind,
    /// Trailing retrieval window, calibrated against observed reply
    /// latency.
    pub lookback_days: i64,
    /// Ranked candidates retained for review on non-auto-matched outcomes.
    pub top_k: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Combined,
            lookback_days: 30,
            top_k: 3,
        }
    }
}

/// Decision plus the explainability records for every scored candidate.
/// Persistence of either is the caller's concern.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub decision: MatchDecision,
    pub explainability: Vec<ExplainabilityRecord>,
}

/// The sole orchestration entry point over injected collaborators.
///
/// Stateless: thresholds are re-resolved on every call so configuration
/// changes take effect without a restart, and concurrent calls for
/// different replies share nothing mutable.
pub struct MatchEngine<'a> {
    store: &'a dyn InquiryStore,
    thresholds: ThresholdProvider,
    config: MatcherConfig,
}

impl<'a> MatchEngine<'a> {
    pub fn new(
        store: &'a dyn InquiryStore,
        thresholds: ThresholdProvider,
        config: MatcherConfig,
    ) -> Self {
        Self {
            store,
            thresholds,
            config,
        }
    }

    /// Match one reply's extracted fields against the outstanding
    /// inquiries for its sender.
    pub fn find_match(
        &self,
        extracted: &ExtractedFields,
        sender_address: &str,
        received_at: DateTime<Utc>,
        category: &str,
    ) -> MatchResult<MatchOutcome> {
        let retriever = CandidateRetriever::new(self.store, self.config.lookback_days);
        let inquiries = retriever.retrieve(sender_address, received_at)?;

        if inquiries.is_empty() {
            debug!(
                "[MATCH_ENGINE] decision: no_candidates | sender={} category={}",
                sender_address, category
            );
            return Ok(MatchOutcome {
                decision: MatchDecision::no_candidates(),
                explainability: Vec::new(),
            });
        }

        let weights = self.thresholds.resolve_weights(category)?;
        let min_score = self.thresholds.resolve(category, ThresholdKind::MinScore);
        let ambiguity_gap = self
            .thresholds
            .resolve(category, ThresholdKind::AmbiguityGap);

        let mut candidates: Vec<ScoredCandidate> = inquiries
            .iter()
            .map(|inquiry| {
                let breakdown = self.config.strategy.evaluate(inquiry, extracted, &weights);
                ScoredCandidate::new(inquiry, breakdown)
            })
            .collect();
        sort_candidates_ranked(&mut candidates);

        let verdict = decide(&candidates, min_score, ambiguity_gap);
        if verdict.status == MatchStatus::AutoMatched {
            // Exactly the winner carries the flag.
            candidates[0].selected_as_match = true;
        }

        debug!(
            "[MATCH_ENGINE] decision: {} | best={:.4} second={:.4} gap={:?} min_score={:.2} ambiguity_gap={:.2} strategy={}",
            verdict.status,
            candidates.first().map(|c| c.total()).unwrap_or(0.0),
            candidates.get(1).map(|c| c.total()).unwrap_or(0.0),
            verdict.gap,
            min_score,
            ambiguity_gap,
            self.config.strategy
        );

        let filters = RetrievalFilters {
            lookback_days: self.config.lookback_days,
            both_signals_required: true,
        };
        // One record per scored candidate, winner or not, tagged with the
        // final status of the run.
        let explainability: Vec<ExplainabilityRecord> = candidates
            .iter()
            .map(|candidate| {
                ExplainabilityRecord::build(
                    candidate,
                    verdict.status,
                    verdict.gap,
                    weights,
                    min_score,
                    ambiguity_gap,
                    filters,
                )
            })
            .collect();

        let winner = match verdict.status {
            MatchStatus::AutoMatched => Some(candidates[0].clone()),
            _ => None,
        };
        // Review outcomes hand over the top-3; auto-matched keeps the full
        // ranked list for the caller's persistence.
        if verdict.status != MatchStatus::AutoMatched {
            candidates.truncate(self.config.top_k.max(1));
        }

        Ok(MatchOutcome {
            decision: MatchDecision {
                status: verdict.status,
                winner,
                candidates,
                gap: verdict.gap,
            },
            explainability,
        })
    }
}

pub(crate) struct Verdict {
    pub status: MatchStatus,
    pub gap: Option<f64>,
}

/// Acceptance gate over a ranked candidate list. An empty list maps to
/// `no_candidates`.
///
/// Below the minimum score nothing matches. A lone qualifying candidate
/// always auto-matches. With two or more, rank 1 must lead rank 2 by at
/// least the ambiguity gap; anything closer goes to human review.
pub(crate) fn decide(
    candidates: &[ScoredCandidate],
    min_score: f64,
    ambiguity_gap: f64,
) -> Verdict {
    let Some(top) = candidates.first() else {
        return Verdict {
            status: MatchStatus::NoCandidates,
            gap: None,
        };
    };
    let gap = candidates
        .get(1)
        .map(|second| top.total() - second.total());

    if top.total() < min_score {
        return Verdict {
            status: MatchStatus::BelowThreshold,
            gap,
        };
    }

    let qualifying = candidates
        .iter()
        .filter(|candidate| candidate.total() >= min_score)
        .count();
    let clear_lead = gap.map(|value| value >= ambiguity_gap).unwrap_or(true);

    if qualifying == 1 || clear_lead {
        Verdict {
            status: MatchStatus::AutoMatched,
            gap,
        }
    } else {
        Verdict {
            status: MatchStatus::Ambiguous,
            gap,
        }
    }
}

#[cfg(test)]
#[path = "tests/orchestrator_tests.rs"]
mod tests;
