//! reply-match assigns an incoming creditor reply (already reduced to
//! extracted fields by an upstream pipeline) to the outstanding inquiry
//! record it answers.
//!
//! The crate is a synchronous, stateless library: one call to
//! [`MatchEngine::find_match`] retrieves candidate inquiries, scores them
//! with the configured strategy, decides auto-match / ambiguous /
//! below-threshold / no-candidates, and produces an explainability record
//! for every scored candidate.

pub mod matching;
pub mod types;

pub use matching::models::explain::{ExplainabilityRecord, RetrievalFilters, SignalExplanation};
pub use matching::models::types::{
    ExtractedFields, InquiryRecord, InquiryStatus, MatchDecision, MatchStatus, NameAlgorithm,
    ReferenceTier, ScoreBreakdown, ScoredCandidate,
};
pub use matching::orchestrator::{MatchEngine, MatchOutcome, MatcherConfig};
pub use matching::retrieval::{InMemoryInquiryStore, InquiryStore};
pub use matching::strategy::StrategyKind;
pub use matching::thresholds::{
    CategoryConfig, SignalWeights, ThresholdConfig, ThresholdKind, ThresholdProvider,
};
pub use types::errors::MatchError;
