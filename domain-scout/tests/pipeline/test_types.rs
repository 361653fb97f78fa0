//! Tests for the pipeline data contracts

use chrono::Utc;
use domain_scout::pipeline::types::{
    label, AvailabilityRecord, CandidateName, CompanyMatch, DomainVariation, MarketAssessment,
    ResearchRequest, ResearchResult, RiskLevel, TrademarkConflict, ValuationFactors,
    ValuationRecord, VariationKind, DOMAIN_SUFFIX,
};

#[test]
fn test_label_strips_suffix() {
    assert_eq!(label("tech.ai"), "tech");
    assert_eq!(label("tech"), "tech");
    assert_eq!(DOMAIN_SUFFIX, ".ai");
}

#[test]
fn test_request_defaults_on_deserialize() {
    let request: ResearchRequest = serde_yaml::from_str("description: tech startup").unwrap();
    assert_eq!(request.description, "tech startup");
    assert_eq!(request.industry, None);
    assert_eq!(request.max_length, 15);
    assert!(!request.include_numbers);
    assert_eq!(request.industry_label(), "unspecified");
}

#[test]
fn test_candidate_yaml_round_trip() {
    let candidate = CandidateName {
        domain: "gettech.ai".to_string(),
        rationale: "Call-to-action name".to_string(),
        industry_relevance: "Technology keyword".to_string(),
    };

    let yaml = serde_yaml::to_string(&candidate).unwrap();
    assert!(yaml.contains("gettech.ai"));

    let back: CandidateName = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(back, candidate);
}

#[test]
fn test_availability_record_defaults() {
    // A registrar wire response omits currency and error in the common case
    let record: AvailabilityRecord = serde_yaml::from_str(
        r#"
        domain: tech.ai
        available: true
        price: 12.99
        "#,
    )
    .unwrap();

    assert!(record.available);
    assert_eq!(record.currency, "USD");
    assert_eq!(record.error, None);

    // The error field is omitted from serialized output when unset
    let yaml = serde_yaml::to_string(&record).unwrap();
    assert!(!yaml.contains("error"));
}

#[test]
fn test_risk_level_serialization() {
    assert_eq!(serde_yaml::to_string(&RiskLevel::Low).unwrap().trim(), "LOW");
    assert_eq!(
        serde_yaml::to_string(&RiskLevel::Medium).unwrap().trim(),
        "MEDIUM"
    );
    assert_eq!(serde_yaml::to_string(&RiskLevel::High).unwrap().trim(), "HIGH");

    let level: RiskLevel = serde_yaml::from_str("HIGH").unwrap();
    assert_eq!(level, RiskLevel::High);
}

#[test]
fn test_risk_level_ordering() {
    assert!(RiskLevel::Low < RiskLevel::Medium);
    assert!(RiskLevel::Medium < RiskLevel::High);
    assert_eq!(
        [RiskLevel::Low, RiskLevel::High, RiskLevel::Medium]
            .into_iter()
            .max(),
        Some(RiskLevel::High)
    );
}

#[test]
fn test_research_result_yaml_round_trip() {
    let result = ResearchResult {
        domain: "tech.ai".to_string(),
        availability: AvailabilityRecord {
            domain: "tech.ai".to_string(),
            available: false,
            price: None,
            currency: "USD".to_string(),
            error: Some("transport failure".to_string()),
        },
        valuation: ValuationRecord {
            estimated_value: 3000.0,
            factors: ValuationFactors {
                length: 4,
                brandability: 7.5,
                memorability: 8.0,
            },
            confidence: 0.8,
        },
        variations: vec![DomainVariation {
            name: "gettech".to_string(),
            kind: VariationKind::Prefix,
            score: 0.8,
        }],
        similar_companies: vec![CompanyMatch {
            name: "Similartech".to_string(),
            website: "https://similartech.com".to_string(),
            similarity_score: 7.0,
            potential_conflict: false,
        }],
        trademark_conflicts: vec![TrademarkConflict {
            trademark: "TECH".to_string(),
            owner: "Sample Company Inc".to_string(),
            registration_number: Some("US123456".to_string()),
            risk_level: RiskLevel::Low,
        }],
        assessment: MarketAssessment {
            overall_risk: RiskLevel::Low,
            has_conflicts: true,
            brand_potential: 7.5,
            recommendation: "Register early.".to_string(),
        },
        generated_at: Utc::now(),
    };

    let yaml = serde_yaml::to_string(&result).unwrap();
    assert!(yaml.contains("trademark_conflicts"));
    assert!(yaml.contains("LOW"));

    let back: ResearchResult = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(back, result);
}

#[test]
fn test_variation_kind_serialization() {
    assert_eq!(
        serde_yaml::to_string(&VariationKind::Prefix).unwrap().trim(),
        "prefix"
    );
    assert_eq!(
        serde_yaml::to_string(&VariationKind::Suffix).unwrap().trim(),
        "suffix"
    );
}
