use super::*;
use crate::matching::fixtures::{extracted, inquiry};

const SENDER: &str = "replies@acme-collections.example";

fn scored_candidate() -> ScoredCandidate {
    let record = inquiry("Anna Schmidt", "AZ-12345", SENDER, 5);
    let fields = extracted("Schmidt, Anna", "AZ-I2345");
    let breakdown = StrategyKind::Fuzzy.evaluate(
        &record,
        &fields,
        &SignalWeights {
            name: 0.4,
            reference: 0.6,
        },
    );
    let mut candidate = ScoredCandidate::new(&record, breakdown);
    candidate.rank = 1;
    candidate
}

fn build_record(candidate: &ScoredCandidate, gap: Option<f64>) -> ExplainabilityRecord {
    ExplainabilityRecord::build(
        candidate,
        MatchStatus::AutoMatched,
        gap,
        SignalWeights {
            name: 0.4,
            reference: 0.6,
        },
        0.70,
        0.15,
        RetrievalFilters {
            lookback_days: 30,
            both_signals_required: true,
        },
    )
}

#[test]
fn test_record_carries_schema_version_and_context() {
    let candidate = scored_candidate();
    let record = build_record(&candidate, Some(0.123456789));

    assert_eq!(record.schema_version, SCHEMA_VERSION);
    assert_eq!(record.inquiry_id, candidate.inquiry_id);
    assert_eq!(record.status, MatchStatus::AutoMatched);
    assert_eq!(record.rank, 1);
    assert_eq!(record.min_score_threshold, 0.70);
    assert_eq!(record.ambiguity_gap_threshold, 0.15);
    assert_eq!(record.filters.lookback_days, 30);
    assert!(record.filters.both_signals_required);
    assert_eq!(record.strategy, StrategyKind::Fuzzy);
}

#[test]
fn test_scores_are_rounded_to_four_decimals() {
    let candidate = scored_candidate();
    let record = build_record(&candidate, Some(0.123456789));

    assert_eq!(record.gap, Some(0.1235));
    for signal in &record.signals {
        let scaled = signal.raw_score * 10_000.0;
        assert!((scaled - scaled.round()).abs() < 1e-9);
    }
    let scaled_total = record.total_score * 10_000.0;
    assert!((scaled_total - scaled_total.round()).abs() < 1e-9);
}

#[test]
fn test_record_retains_compared_raw_values_per_signal() {
    let candidate = scored_candidate();
    let record = build_record(&candidate, None);

    let name = record.signals.iter().find(|s| s.signal == "name").unwrap();
    assert_eq!(name.inquiry_value.as_deref(), Some("Anna Schmidt"));
    assert_eq!(name.extracted_value.as_deref(), Some("Schmidt, Anna"));

    let reference = record
        .signals
        .iter()
        .find(|s| s.signal == "reference")
        .unwrap();
    assert_eq!(reference.inquiry_value.as_deref(), Some("AZ-12345"));
    assert_eq!(reference.extracted_value.as_deref(), Some("AZ-I2345"));
    assert_eq!(reference.algorithm, "Partial");
}

#[test]
fn test_record_is_queryable_as_json() {
    let candidate = scored_candidate();
    let record = build_record(&candidate, Some(0.2));

    let value = record.to_json();
    assert_eq!(value["schema_version"], 1);
    assert_eq!(value["status"], "auto_matched");
    assert_eq!(value["signals"][0]["signal"], "name");
    assert_eq!(value["filters"]["both_signals_required"], true);
}

#[test]
fn test_missing_gap_stays_absent() {
    let candidate = scored_candidate();
    let record = build_record(&candidate, None);
    assert_eq!(record.gap, None);

    let value: serde_json::Value = serde_json::to_value(&record).unwrap();
    assert!(value["gap"].is_null());
}
