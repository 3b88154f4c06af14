use super::*;

fn refs(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn test_exact_match_short_circuits_at_one() {
    let result = score_reference("AZ-12345", &refs(&["az-12345"]));
    assert_eq!(result.score, 1.0);
    assert_eq!(result.tier, ReferenceTier::Exact);
    assert_eq!(result.matched.as_deref(), Some("az-12345"));
}

#[test]
fn test_exact_ignores_case_and_whitespace() {
    let result = score_reference("AZ-12345", &refs(&["AZ - 12345"]));
    assert_eq!(result.score, 1.0);
    assert_eq!(result.tier, ReferenceTier::Exact);
}

#[test]
fn test_ocr_confused_character_clears_partial_tier() {
    // `1` read as `I` by the OCR pipeline: one substitution over 8 chars.
    let result = score_reference("AZ-12345", &refs(&["AZ-I2345"]));
    assert!((result.score - 0.875).abs() < 1e-9);
    assert_eq!(result.tier, ReferenceTier::Partial);
}

#[test]
fn test_genuinely_different_reference_scores_zero() {
    let result = score_reference("AZ-12345", &refs(&["KX-99801"]));
    assert_eq!(result.score, 0.0);
    assert_eq!(result.tier, ReferenceTier::Missing);
    assert!(result.matched.is_none());
}

#[test]
fn test_reordered_segments_clear_token_tier() {
    let result = score_reference("12345 AZ", &refs(&["AZ 12345"]));
    assert_eq!(result.score, 1.0);
    // Normalized forms differ ("12345az" vs "az12345"), so this cannot be
    // the exact tier.
    assert_ne!(result.tier, ReferenceTier::Exact);
}

#[test]
fn test_best_candidate_wins_over_noise() {
    let result = score_reference("AZ-12345", &refs(&["scan0001", "AZ-I2345", "page 2 of 2"]));
    assert!((result.score - 0.875).abs() < 1e-9);
    assert_eq!(result.matched.as_deref(), Some("AZ-I2345"));
}

#[test]
fn test_exact_among_noise_still_wins_outright() {
    let result = score_reference("AZ-12345", &refs(&["AZ-I2345", "AZ-12345"]));
    assert_eq!(result.score, 1.0);
    assert_eq!(result.tier, ReferenceTier::Exact);
    assert_eq!(result.matched.as_deref(), Some("AZ-12345"));
}

#[test]
fn test_absent_input_scores_zero_not_error() {
    assert_eq!(score_reference("", &refs(&["AZ-12345"])).score, 0.0);
    assert_eq!(score_reference("AZ-12345", &[]).score, 0.0);
    assert_eq!(score_reference("AZ-12345", &refs(&["", "  "])).score, 0.0);
}
