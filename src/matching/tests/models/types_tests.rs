use super::*;
use crate::matching::fixtures::{extracted, inquiry};

const SENDER: &str = "replies@acme-collections.example";

fn candidate_scoring(total: f64, days_ago: i64) -> ScoredCandidate {
    let record = inquiry("Anna Schmidt", "AZ-12345", SENDER, days_ago);
    let mut breakdown =
        ScoreBreakdown::zero(&record, &extracted("Anna Schmidt", "AZ-12345"), StrategyKind::Fuzzy);
    breakdown.total = total;
    ScoredCandidate::new(&record, breakdown)
}

#[test]
fn test_sort_orders_by_score_descending() {
    let mut candidates = vec![
        candidate_scoring(0.60, 5),
        candidate_scoring(0.90, 5),
        candidate_scoring(0.75, 5),
    ];
    sort_candidates_ranked(&mut candidates);

    let totals: Vec<f64> = candidates.iter().map(|c| c.total()).collect();
    assert_eq!(totals, vec![0.90, 0.75, 0.60]);
    let ranks: Vec<usize> = candidates.iter().map(|c| c.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3]);
}

#[test]
fn test_score_tie_broken_by_most_recent_inquiry() {
    let older = candidate_scoring(0.80, 20);
    let newer = candidate_scoring(0.80, 2);
    let mut candidates = vec![older.clone(), newer.clone()];
    sort_candidates_ranked(&mut candidates);

    assert_eq!(candidates[0].inquiry_id, newer.inquiry_id);
    assert_eq!(candidates[1].inquiry_id, older.inquiry_id);
}

#[test]
fn test_full_tie_broken_by_inquiry_id_for_determinism() {
    let a = candidate_scoring(0.80, 5);
    let b = candidate_scoring(0.80, 5);
    let expected_first = std::cmp::min(a.inquiry_id, b.inquiry_id);

    let mut forward = vec![a.clone(), b.clone()];
    let mut backward = vec![b, a];
    sort_candidates_ranked(&mut forward);
    sort_candidates_ranked(&mut backward);

    assert_eq!(forward[0].inquiry_id, expected_first);
    assert_eq!(backward[0].inquiry_id, expected_first);
}

#[test]
fn test_status_serializes_snake_case() {
    assert_eq!(
        serde_json::to_string(&MatchStatus::AutoMatched).unwrap(),
        "\"auto_matched\""
    );
    assert_eq!(
        serde_json::to_string(&MatchStatus::BelowThreshold).unwrap(),
        "\"below_threshold\""
    );
    assert_eq!(MatchStatus::NoCandidates.to_string(), "no_candidates");
}

#[test]
fn test_extracted_fields_default_is_fully_absent() {
    let fields = ExtractedFields::default();
    assert!(fields.client_name.is_none());
    assert!(fields.reference_candidates.is_empty());
    assert!(fields.received_at.is_none());
}
