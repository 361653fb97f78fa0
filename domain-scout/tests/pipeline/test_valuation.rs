//! Tests for the deterministic valuation formula and variation helpers

use domain_scout::pipeline::phase2_appraise::{estimate_value, generate_variations};
use domain_scout::pipeline::types::VariationKind;

#[test]
fn test_valuation_is_deterministic() {
    let first = estimate_value("techstartup.ai");
    let second = estimate_value("techstartup.ai");
    assert_eq!(first, second);
}

#[test]
fn test_short_label_doubles_value() {
    // "tech" is 4 characters and digit-free: 1000 * 2 * 1.5
    let valuation = estimate_value("tech.ai");
    assert_eq!(valuation.estimated_value, 3000.0);
    assert_eq!(valuation.factors.length, 4);
}

#[test]
fn test_long_digit_free_label() {
    // 11 characters, no digits: 1000 * 1.5
    let valuation = estimate_value("techstartup.ai");
    assert_eq!(valuation.estimated_value, 1500.0);
    assert_eq!(valuation.factors.length, 11);
}

#[test]
fn test_digits_suppress_multiplier() {
    // 6 characters with a digit: base value only
    let valuation = estimate_value("abc123.ai");
    assert_eq!(valuation.estimated_value, 1000.0);

    // 3 characters with a digit: short multiplier only
    let valuation = estimate_value("ab1.ai");
    assert_eq!(valuation.estimated_value, 2000.0);
}

#[test]
fn test_suffix_excluded_from_label_length() {
    // The suffix must not count toward the short-label rule
    let with_suffix = estimate_value("short.ai");
    let without_suffix = estimate_value("short");
    assert_eq!(with_suffix, without_suffix);
    assert_eq!(with_suffix.factors.length, 5);
    assert_eq!(with_suffix.estimated_value, 3000.0);
}

#[test]
fn test_fixed_factor_scores() {
    let valuation = estimate_value("anything.ai");
    assert_eq!(valuation.factors.brandability, 7.5);
    assert_eq!(valuation.factors.memorability, 8.0);
    assert_eq!(valuation.confidence, 0.8);
}

#[test]
fn test_variations_cover_both_particle_sets() {
    let variations = generate_variations("tech.ai");
    assert_eq!(variations.len(), 10);

    let prefixes: Vec<&str> = variations
        .iter()
        .filter(|v| v.kind == VariationKind::Prefix)
        .map(|v| v.name.as_str())
        .collect();
    assert_eq!(
        prefixes,
        vec!["gettech", "trytech", "usetech", "mytech", "thetech"]
    );

    let suffixes: Vec<&str> = variations
        .iter()
        .filter(|v| v.kind == VariationKind::Suffix)
        .map(|v| v.name.as_str())
        .collect();
    assert_eq!(
        suffixes,
        vec!["techapp", "techio", "techco", "technet", "techorg"]
    );

    assert!(variations
        .iter()
        .all(|v| (v.kind == VariationKind::Prefix && v.score == 0.8)
            || (v.kind == VariationKind::Suffix && v.score == 0.9)));
}

#[test]
fn test_variations_respect_registrable_length() {
    // 61-character base: only two-character particles stay within 63
    let base = "a".repeat(61);
    let variations = generate_variations(&base);

    let names: Vec<&str> = variations.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names.len(), 3);
    assert!(names.contains(&format!("my{}", base).as_str()));
    assert!(names.contains(&format!("{}io", base).as_str()));
    assert!(names.contains(&format!("{}co", base).as_str()));
}
