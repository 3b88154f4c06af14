use super::*;

#[test]
fn test_identical_names_score_one() {
    let result = score_name(Some("Anna Schmidt"), Some("Anna Schmidt"));
    assert_eq!(result.score, 1.0);
    assert_eq!(result.algorithm, NameAlgorithm::TokenSort);
}

#[test]
fn test_surname_first_formatting_scores_one() {
    let result = score_name(Some("Anna Schmidt"), Some("Schmidt, Anna"));
    assert_eq!(result.score, 1.0);
    assert_eq!(result.algorithm, NameAlgorithm::TokenSort);
}

#[test]
fn test_truncated_name_wins_via_partial() {
    let result = score_name(Some("Anna Schmidt"), Some("Anna Schm"));
    assert!(result.score > 0.9);
    assert_eq!(result.algorithm, NameAlgorithm::Partial);
}

#[test]
fn test_extra_middle_name_wins_via_token_set() {
    let result = score_name(Some("Anna Maria Schmidt"), Some("Schmidt, Anna"));
    assert_eq!(result.score, 1.0);
    // TokenSort cannot reach 1.0 here; the token-set measure can.
    assert_eq!(result.algorithm, NameAlgorithm::TokenSet);
}

#[test]
fn test_absent_input_scores_zero_not_error() {
    let missing = score_name(None, Some("Anna Schmidt"));
    assert_eq!(missing.score, 0.0);
    assert_eq!(missing.algorithm, NameAlgorithm::Missing);

    let blank = score_name(Some("Anna Schmidt"), Some("   "));
    assert_eq!(blank.score, 0.0);
    assert_eq!(blank.algorithm, NameAlgorithm::Missing);
}

#[test]
fn test_unrelated_names_score_low() {
    let result = score_name(Some("Anna Schmidt"), Some("Peter Weber"));
    assert!(result.score < 0.5);
}

#[test]
fn test_score_stays_within_unit_interval() {
    let result = score_name(Some("Dr. Anna-Maria von Schmidt"), Some("schmidt anna maria"));
    assert!(result.score >= 0.0 && result.score <= 1.0);
}
