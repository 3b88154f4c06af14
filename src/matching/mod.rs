//! Matching engine: the core of reply-match.
//!
//! Narrows the inquiry universe to plausible candidates, scores each one
//! with a multi-signal strategy, applies configurable acceptance gates,
//! and records structured explainability for every scored candidate.

pub mod analysis;
pub mod models;
pub mod orchestrator;
pub mod retrieval;
pub mod strategy;
pub mod thresholds;

// Test-only fixtures shared across module test files.
#[cfg(test)]
pub mod fixtures;

pub use models::explain::{ExplainabilityRecord, RetrievalFilters, SignalExplanation};
pub use models::types::{
    sort_candidates_ranked, ExtractedFields, InquiryRecord, InquiryStatus, MatchDecision,
    MatchStatus, NameAlgorithm, ReferenceTier, ScoreBreakdown, ScoredCandidate,
};
pub use orchestrator::{MatchEngine, MatchOutcome, MatcherConfig};
pub use retrieval::{CandidateRetriever, InMemoryInquiryStore, InquiryStore};
pub use strategy::StrategyKind;
pub use thresholds::{
    CategoryConfig, SignalWeights, ThresholdConfig, ThresholdKind, ThresholdProvider,
};
