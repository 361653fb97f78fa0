//! Tests for the human selection gate

use super::common::*;
use domain_scout::pipeline::selection::{validate_selection, MIN_SELECTION};

#[test]
fn test_gate_rejects_empty_selection() {
    let candidates = sample_candidates(&["tech", "gettech", "techio"]);
    let result = validate_selection(&candidates, &[]);
    assert!(result.is_err());
}

#[test]
fn test_gate_rejects_single_selection() {
    let candidates = sample_candidates(&["tech", "gettech", "techio"]);
    let result = validate_selection(&candidates, &["tech.ai".to_string()]);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("at least 2"));
}

#[test]
fn test_gate_accepts_two_selections() {
    assert_eq!(MIN_SELECTION, 2);

    let candidates = sample_candidates(&["tech", "gettech", "techio"]);
    let selected = validate_selection(
        &candidates,
        &["tech.ai".to_string(), "gettech.ai".to_string()],
    )
    .unwrap();

    assert_eq!(selected, vec!["tech.ai", "gettech.ai"]);
}

#[test]
fn test_gate_normalizes_bare_labels() {
    let candidates = sample_candidates(&["tech", "gettech"]);
    let selected =
        validate_selection(&candidates, &["tech".to_string(), "GetTech".to_string()]).unwrap();

    assert_eq!(selected, vec!["tech.ai", "gettech.ai"]);
}

#[test]
fn test_gate_deduplicates_before_counting() {
    // The same name twice is one selection, which is below the minimum
    let candidates = sample_candidates(&["tech", "gettech"]);
    let result = validate_selection(&candidates, &["tech".to_string(), "tech.ai".to_string()]);
    assert!(result.is_err());
}

#[test]
fn test_gate_rejects_unknown_names() {
    let candidates = sample_candidates(&["tech", "gettech"]);
    let result = validate_selection(
        &candidates,
        &["tech.ai".to_string(), "madeup.ai".to_string()],
    );
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("not one of the generated candidates"));
}
