//! Tests for workflow configuration and CLI argument mapping

use clap::Parser;

use super::common::*;
use domain_scout::pipeline::cli::Args;
use domain_scout::pipeline::workflow::{filter_results, run_pipeline, PipelineConfig};

#[test]
fn test_config_defaults() {
    let config = PipelineConfig::default();
    assert_eq!(config.phases, vec![1, 2, 3]);
    assert_eq!(config.batch_size, 1);
    assert_eq!(config.max_length, 15);
    assert!(!config.include_numbers);
    assert!(!config.available_only);
    assert!(config.selected.is_empty());
    assert!(config.description.is_none());
}

#[test]
fn test_args_parse_phases() {
    let args = Args::parse_from(["domain-scout", "--input", "tech startup", "--phases", "2, 3"]);
    assert_eq!(args.parse_phases(), vec![2, 3]);
}

#[test]
fn test_args_parse_selected() {
    let args = Args::parse_from([
        "domain-scout",
        "--select",
        "tech.ai, gettech.ai,,techio.ai",
    ]);
    assert_eq!(
        args.parse_selected(),
        vec!["tech.ai", "gettech.ai", "techio.ai"]
    );
}

#[test]
fn test_args_into_config() {
    let args = Args::parse_from([
        "domain-scout",
        "--input",
        "tech startup",
        "--industry",
        "Technology",
        "--max-length",
        "12",
        "--batch-size",
        "3",
        "--select",
        "tech.ai,gettech.ai",
        "--available-only",
    ]);

    let config: PipelineConfig = args.into();
    assert_eq!(config.description.as_deref(), Some("tech startup"));
    assert_eq!(config.industry.as_deref(), Some("Technology"));
    assert_eq!(config.max_length, 12);
    assert_eq!(config.batch_size, 3);
    assert_eq!(config.selected, vec!["tech.ai", "gettech.ai"]);
    assert!(config.available_only);
}

#[tokio::test]
async fn test_phase1_requires_description() {
    let config = PipelineConfig::default();
    let result = run_pipeline(config).await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("--input"));
}

#[tokio::test]
async fn test_analysis_requires_candidates() {
    let temp_dir = create_temp_dir("analysis_requires_candidates");

    let config = PipelineConfig {
        phases: vec![2, 3],
        selected: vec!["tech.ai".to_string(), "gettech.ai".to_string()],
        dir: Some(temp_dir.to_string_lossy().to_string()),
        ..Default::default()
    };
    let result = run_pipeline(config).await;

    cleanup_temp_dir(&temp_dir);

    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("--candidates-file"));
}

#[test]
fn test_filter_results() {
    use chrono::Utc;
    use domain_scout::pipeline::phase2_appraise::estimate_value;
    use domain_scout::pipeline::types::{
        AvailabilityRecord, MarketAssessment, ResearchResult, RiskLevel,
    };

    let result = |domain: &str, available: bool| ResearchResult {
        domain: domain.to_string(),
        availability: AvailabilityRecord {
            domain: domain.to_string(),
            available,
            price: None,
            currency: "USD".to_string(),
            error: None,
        },
        valuation: estimate_value(domain),
        variations: vec![],
        similar_companies: vec![],
        trademark_conflicts: vec![],
        assessment: MarketAssessment {
            overall_risk: RiskLevel::Low,
            has_conflicts: false,
            brand_potential: 7.5,
            recommendation: String::new(),
        },
        generated_at: Utc::now(),
    };

    // tech.ai values at 3000, techstartup.ai at 1500
    let results = vec![
        result("tech.ai", true),
        result("techstartup.ai", true),
        result("gettech.ai", false),
    ];

    let available = filter_results(&results, None, true);
    assert_eq!(available.len(), 2);

    let valuable = filter_results(&results, Some(2000.0), true);
    assert_eq!(valuable.len(), 1);
    assert_eq!(valuable[0].domain, "tech.ai");

    let all = filter_results(&results, None, false);
    assert_eq!(all.len(), 3);
}
