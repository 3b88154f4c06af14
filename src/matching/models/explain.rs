//! Explainability records: versioned, structured snapshots of how one
//! candidate's score was computed.
//!
//! Every scored candidate gets a record, including below-threshold and
//! ambiguous ones, since explainability exists to support retrospective
//! threshold calibration, so "uninteresting" outcomes are kept too.
//! Records are immutable after creation; retention and pruning are an
//! operational concern outside this engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::matching::models::types::{MatchStatus, ScoredCandidate};
use crate::matching::strategy::StrategyKind;
use crate::matching::thresholds::SignalWeights;

/// Bumped when the record shape changes, so stored records stay queryable.
pub const SCHEMA_VERSION: u32 = 1;

/// Numeric scores are rounded to this many decimal places before storage,
/// for stable comparison.
const SCORE_PRECISION: u32 = 4;

/// One signal's contribution, with the raw values that were compared so a
/// reviewer can audit the comparison, not just the number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalExplanation {
    /// Signal name: "name" or "reference".
    pub signal: String,
    pub raw_score: f64,
    pub weighted_score: f64,
    /// Which algorithm or tier produced the raw score.
    pub algorithm: String,
    pub inquiry_value: Option<String>,
    pub extracted_value: Option<String>,
}

/// The retrieval and scoring filters that shaped this attempt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RetrievalFilters {
    pub lookback_days: i64,
    pub both_signals_required: bool,
}

/// Snapshot of one candidate's scoring within one orchestration run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainabilityRecord {
    pub schema_version: u32,
    pub record_id: Uuid,
    pub inquiry_id: Uuid,
    /// Final status of the run this candidate was scored in.
    pub status: MatchStatus,
    pub rank: usize,
    pub selected_as_match: bool,
    pub signals: Vec<SignalExplanation>,
    pub total_score: f64,
    /// True when the both-signals-required rule forced the total to 0.0.
    pub both_signals_zeroed: bool,
    pub weights: SignalWeights,
    pub min_score_threshold: f64,
    pub ambiguity_gap_threshold: f64,
    /// Gap between rank 1 and rank 2 of the run; None with < 2 candidates.
    pub gap: Option<f64>,
    pub filters: RetrievalFilters,
    pub strategy: StrategyKind,
    pub created_at: DateTime<Utc>,
}

impl ExplainabilityRecord {
    /// Build the record for one scored candidate. Scores are rounded to
    /// [`SCORE_PRECISION`] decimal places; the record is never mutated
    /// afterwards.
    #[allow(clippy::too_many_arguments)]
    pub fn build(
        candidate: &ScoredCandidate,
        status: MatchStatus,
        gap: Option<f64>,
        weights: SignalWeights,
        min_score_threshold: f64,
        ambiguity_gap_threshold: f64,
        filters: RetrievalFilters,
    ) -> Self {
        let breakdown = &candidate.breakdown;
        let signals = vec![
            SignalExplanation {
                signal: "name".to_string(),
                raw_score: round_score(breakdown.name_score),
                weighted_score: round_score(breakdown.name_weighted),
                algorithm: format!("{:?}", breakdown.name_algorithm),
                inquiry_value: Some(breakdown.inquiry_name.clone()),
                extracted_value: breakdown.extracted_name.clone(),
            },
            SignalExplanation {
                signal: "reference".to_string(),
                raw_score: round_score(breakdown.reference_score),
                weighted_score: round_score(breakdown.reference_weighted),
                algorithm: format!("{:?}", breakdown.reference_tier),
                inquiry_value: Some(breakdown.inquiry_reference.clone()),
                extracted_value: breakdown.matched_reference.clone(),
            },
        ];

        Self {
            schema_version: SCHEMA_VERSION,
            record_id: Uuid::new_v4(),
            inquiry_id: candidate.inquiry_id,
            status,
            rank: candidate.rank,
            selected_as_match: candidate.selected_as_match,
            signals,
            total_score: round_score(breakdown.total),
            both_signals_zeroed: breakdown.both_signals_zeroed,
            weights,
            min_score_threshold,
            ambiguity_gap_threshold,
            gap: gap.map(round_score),
            filters,
            strategy: breakdown.strategy,
            created_at: Utc::now(),
        }
    }

    /// Render the record as a JSON value for storage or ad-hoc querying.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

fn round_score(value: f64) -> f64 {
    let factor = 10f64.powi(SCORE_PRECISION as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
#[path = "../tests/models/explain_tests.rs"]
mod tests;
