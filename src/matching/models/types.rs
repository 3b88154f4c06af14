//! Domain types for the matching engine.
//!
//! Contains the external input contracts (InquiryRecord, ExtractedFields)
//! and the per-attempt computation contracts (ScoreBreakdown,
//! ScoredCandidate, MatchStatus, MatchDecision).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::matching::strategy::StrategyKind;

// ==================== EXTERNAL INPUTS ====================

/// Lifecycle status of a previously-sent inquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InquiryStatus {
    /// Sent, still waiting for a reply. Only these are matched against.
    Open,
    /// A reply was already matched to this inquiry.
    Answered,
    /// Closed without a reply (withdrawn, expired).
    Closed,
}

/// A previously-sent inquiry to a creditor, owned by the inquiry store.
/// Read-only to this engine once retrieved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InquiryRecord {
    pub id: Uuid,
    /// Client name as entered by the case worker.
    pub client_name: String,
    /// Pre-normalized client name (casefolded, punctuation-stripped).
    pub client_name_normalized: String,
    pub creditor_name: String,
    pub creditor_name_normalized: String,
    /// Contact address the inquiry was sent to. Used for retrieval.
    pub creditor_address: String,
    /// Case-specific reference number quoted in the inquiry.
    pub reference_number: String,
    /// Amount the inquiry asked about, if any.
    pub expected_amount: Option<f64>,
    /// Creditor category tag, used for threshold lookup (e.g. "bank").
    pub category: String,
    pub sent_at: DateTime<Utc>,
    pub status: InquiryStatus,
}

/// Structured fields produced by the upstream extraction pipeline from one
/// raw reply. Any field may be absent; absence degrades to a 0.0 signal
/// score, never an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub client_name: Option<String>,
    pub creditor_name: Option<String>,
    /// Reference strings found in the reply, in extraction order. May
    /// contain OCR noise; the reference scorer picks the best one.
    pub reference_candidates: Vec<String>,
    pub amount: Option<f64>,
    pub sender_address: Option<String>,
    pub received_at: Option<DateTime<Utc>>,
}

// ==================== SCORING CONTRACTS ====================

/// Which of the three name similarity measures produced the name score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NameAlgorithm {
    /// Word-order-insensitive comparison over sorted tokens.
    TokenSort,
    /// Substring / near-substring comparison (truncated or partial names).
    Partial,
    /// Token-set comparison (one name a superset of the other's tokens).
    TokenSet,
    /// Either side was absent or blank; score is 0.0.
    Missing,
}

/// Which tier of the reference scorer produced the reference score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceTier {
    /// Exact after case/whitespace normalization. Short-circuits the rest.
    Exact,
    /// Partial similarity above the strict OCR-noise cutoff.
    Partial,
    /// Word-order-insensitive similarity above the cutoff.
    TokenSort,
    /// No expected reference, no candidates, or nothing cleared a cutoff.
    Missing,
}

/// Per-signal score breakdown for one (inquiry, reply) pair.
///
/// Invariant: `total` is either the weighted sum of the two signals, or
/// exactly 0.0 when the both-signals-required rule fired
/// (`both_signals_zeroed`). There is no partial-credit state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub name_score: f64,
    pub name_weighted: f64,
    pub name_algorithm: NameAlgorithm,
    pub reference_score: f64,
    pub reference_weighted: f64,
    pub reference_tier: ReferenceTier,
    /// The extracted reference candidate that won, if any.
    pub matched_reference: Option<String>,
    /// Inquiry-side and extracted-side raw values that were compared,
    /// retained for human auditing.
    pub inquiry_name: String,
    pub extracted_name: Option<String>,
    pub inquiry_reference: String,
    pub total: f64,
    /// True when one signal scored 0.0 and forced the total to 0.0.
    pub both_signals_zeroed: bool,
    /// Strategy variant that produced this breakdown.
    pub strategy: StrategyKind,
}

impl ScoreBreakdown {
    /// All-zero breakdown against one inquiry, used when a strategy finds
    /// nothing to credit.
    pub fn zero(inquiry: &InquiryRecord, extracted: &ExtractedFields, strategy: StrategyKind) -> Self {
        Self {
            name_score: 0.0,
            name_weighted: 0.0,
            name_algorithm: NameAlgorithm::Missing,
            reference_score: 0.0,
            reference_weighted: 0.0,
            reference_tier: ReferenceTier::Missing,
            matched_reference: None,
            inquiry_name: inquiry.client_name.clone(),
            extracted_name: extracted.client_name.clone(),
            inquiry_reference: inquiry.reference_number.clone(),
            total: 0.0,
            both_signals_zeroed: false,
            strategy,
        }
    }
}

/// One inquiry with its score breakdown, as ranked by the orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub inquiry_id: Uuid,
    pub client_name: String,
    pub creditor_name: String,
    pub reference_number: String,
    pub category: String,
    pub sent_at: DateTime<Utc>,
    pub breakdown: ScoreBreakdown,
    /// 1-based rank after sorting. Assigned by the orchestrator.
    pub rank: usize,
    /// True on exactly the winner of an auto-matched decision, else false.
    pub selected_as_match: bool,
}

impl ScoredCandidate {
    pub fn new(inquiry: &InquiryRecord, breakdown: ScoreBreakdown) -> Self {
        Self {
            inquiry_id: inquiry.id,
            client_name: inquiry.client_name.clone(),
            creditor_name: inquiry.creditor_name.clone(),
            reference_number: inquiry.reference_number.clone(),
            category: inquiry.category.clone(),
            sent_at: inquiry.sent_at,
            breakdown,
            rank: 0,
            selected_as_match: false,
        }
    }

    pub fn total(&self) -> f64 {
        self.breakdown.total
    }
}

// ==================== DECISION CONTRACT ====================

/// Outcome status of one orchestration run. All variants are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// Top candidate cleared the minimum score with a sufficient gap.
    AutoMatched,
    /// Two or more candidates too close to call; needs human review.
    Ambiguous,
    /// Candidates existed but none cleared the minimum score.
    BelowThreshold,
    /// No inquiry for this sender inside the lookback window.
    NoCandidates,
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStatus::AutoMatched => write!(f, "auto_matched"),
            MatchStatus::Ambiguous => write!(f, "ambiguous"),
            MatchStatus::BelowThreshold => write!(f, "below_threshold"),
            MatchStatus::NoCandidates => write!(f, "no_candidates"),
        }
    }
}

/// The single return value of one orchestration call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchDecision {
    pub status: MatchStatus,
    /// Present iff status is `AutoMatched`.
    pub winner: Option<ScoredCandidate>,
    /// Ranked candidates: top-3 for ambiguous/below-threshold outcomes,
    /// the full scored list for auto-matched ones.
    pub candidates: Vec<ScoredCandidate>,
    /// Score gap between rank 1 and rank 2. `None` when fewer than two
    /// candidates were scored.
    pub gap: Option<f64>,
}

impl MatchDecision {
    pub fn no_candidates() -> Self {
        Self {
            status: MatchStatus::NoCandidates,
            winner: None,
            candidates: Vec::new(),
            gap: None,
        }
    }
}

// ==================== DETERMINISTIC ORDERING ====================

/// Sort candidates deterministically: total score desc, then most recently
/// sent inquiry first, then inquiry id asc. The recency tie-break is an
/// explicit rule, not insertion-order luck.
pub fn sort_candidates_ranked(candidates: &mut [ScoredCandidate]) {
    candidates.sort_by(|a, b| {
        b.total()
            .partial_cmp(&a.total())
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| b.sent_at.cmp(&a.sent_at))
            .then_with(|| a.inquiry_id.cmp(&b.inquiry_id))
    });
    for (index, candidate) in candidates.iter_mut().enumerate() {
        candidate.rank = index + 1;
    }
}

#[cfg(test)]
#[path = "../tests/models/types_tests.rs"]
mod tests;
