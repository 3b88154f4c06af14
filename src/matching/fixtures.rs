//! Shared test fixtures for the matching module tests.

use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use crate::matching::analysis::normalizer::normalize_name;
use crate::matching::models::types::{ExtractedFields, InquiryRecord, InquiryStatus};

/// Initialize test logging once; later calls are no-ops.
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Fixed "reply received" instant all fixtures are anchored to.
pub fn received_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 15, 10, 0, 0).unwrap()
}

/// An open inquiry sent `days_ago` days before [`received_at`].
pub fn inquiry(
    client_name: &str,
    reference: &str,
    sender: &str,
    days_ago: i64,
) -> InquiryRecord {
    InquiryRecord {
        id: Uuid::new_v4(),
        client_name: client_name.to_string(),
        client_name_normalized: normalize_name(client_name),
        creditor_name: "Acme Collections GmbH".to_string(),
        creditor_name_normalized: normalize_name("Acme Collections GmbH"),
        creditor_address: sender.to_string(),
        reference_number: reference.to_string(),
        expected_amount: Some(1250.00),
        category: "collection_agency".to_string(),
        sent_at: received_at() - Duration::days(days_ago),
        status: InquiryStatus::Open,
    }
}

/// Extracted fields with a client name and one reference candidate.
pub fn extracted(client_name: &str, reference: &str) -> ExtractedFields {
    ExtractedFields {
        client_name: Some(client_name.to_string()),
        creditor_name: Some("Acme Collections".to_string()),
        reference_candidates: vec![reference.to_string()],
        amount: Some(1250.00),
        sender_address: Some("replies@acme-collections.example".to_string()),
        received_at: Some(received_at()),
    }
}
