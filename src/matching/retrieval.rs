//! Candidate retrieval: narrows the inquiry universe to a plausible
//! search space by sender identity and a trailing time window.
//!
//! Without this filter every reply would be scored against the entire
//! historical inquiry store, inviting false matches against long-stale or
//! reused references. An empty result is a meaningful outcome
//! (`no_candidates`), distinct from below-threshold.

use chrono::{DateTime, Duration, Utc};
use log::debug;

use crate::matching::models::types::{InquiryRecord, InquiryStatus};
use crate::types::errors::MatchResult;

/// The external inquiry store. Injected so tests and embedding callers
/// substitute deterministic data; failures propagate unmodified.
pub trait InquiryStore: Send + Sync {
    /// All open inquiries sent to the given address, unfiltered by time.
    fn open_inquiries_for(&self, sender_address: &str) -> MatchResult<Vec<InquiryRecord>>;
}

/// In-memory store for tests and small embeddings. Matches addresses
/// case-insensitively and only surfaces open inquiries.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInquiryStore {
    records: Vec<InquiryRecord>,
}

impl InMemoryInquiryStore {
    pub fn new(records: Vec<InquiryRecord>) -> Self {
        Self { records }
    }

    pub fn push(&mut self, record: InquiryRecord) {
        self.records.push(record);
    }
}

impl InquiryStore for InMemoryInquiryStore {
    fn open_inquiries_for(&self, sender_address: &str) -> MatchResult<Vec<InquiryRecord>> {
        let wanted = normalize_address(sender_address);
        Ok(self
            .records
            .iter()
            .filter(|record| record.status == InquiryStatus::Open)
            .filter(|record| normalize_address(&record.creditor_address) == wanted)
            .cloned()
            .collect())
    }
}

/// Applies the trailing lookback window on top of the store's
/// sender-address filter.
pub struct CandidateRetriever<'a> {
    store: &'a dyn InquiryStore,
    lookback_days: i64,
}

impl<'a> CandidateRetriever<'a> {
    pub fn new(store: &'a dyn InquiryStore, lookback_days: i64) -> Self {
        Self {
            store,
            lookback_days,
        }
    }

    /// Inquiries sent to `sender_address` within
    /// `[received_at - lookback, received_at]`, both bounds inclusive.
    pub fn retrieve(
        &self,
        sender_address: &str,
        received_at: DateTime<Utc>,
    ) -> MatchResult<Vec<InquiryRecord>> {
        let window_start = received_at - Duration::days(self.lookback_days);
        let candidates: Vec<InquiryRecord> = self
            .store
            .open_inquiries_for(sender_address)?
            .into_iter()
            .filter(|record| record.sent_at >= window_start && record.sent_at <= received_at)
            .collect();

        debug!(
            "[MATCH_ENGINE] retrieval: sender={} window_days={} candidates={}",
            sender_address,
            self.lookback_days,
            candidates.len()
        );
        Ok(candidates)
    }
}

fn normalize_address(address: &str) -> String {
    address.trim().to_lowercase()
}

#[cfg(test)]
#[path = "tests/retrieval_tests.rs"]
mod tests;
