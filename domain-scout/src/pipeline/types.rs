//! Data contracts passed between pipeline phases
//!
//! Each phase exclusively produces its own record types; downstream phases
//! only read them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed top-level suffix appended to every candidate label
pub const DOMAIN_SUFFIX: &str = ".ai";

/// Number of candidates phase 1 must return
pub const SUGGESTION_COUNT: usize = 10;

/// Bare label of a domain, with the fixed suffix stripped
pub fn label(domain: &str) -> &str {
    domain.strip_suffix(DOMAIN_SUFFIX).unwrap_or(domain)
}

/// User request that seeds phase 1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchRequest {
    /// Free-text description of the business or project
    pub description: String,
    /// Industry sector, if known
    #[serde(default)]
    pub industry: Option<String>,
    /// Maximum length of the bare label
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    /// Whether digits are allowed in labels
    #[serde(default)]
    pub include_numbers: bool,
}

fn default_max_length() -> usize {
    15
}

impl ResearchRequest {
    pub fn industry_label(&self) -> &str {
        self.industry.as_deref().unwrap_or("unspecified")
    }
}

/// A generated candidate, produced by phase 1 and never mutated afterwards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateName {
    /// Full domain, label plus suffix
    pub domain: String,
    pub rationale: String,
    pub industry_relevance: String,
}

/// Registrar lookup result for a single domain
///
/// A failed lookup is recovered into `available: false` with `error` set, so
/// downstream phases always receive a well-shaped record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityRecord {
    pub domain: String,
    pub available: bool,
    pub price: Option<f64>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Named inputs to the valuation formula (fixed fields, not an open map)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationFactors {
    pub length: usize,
    pub brandability: f64,
    pub memorability: f64,
}

/// Deterministic valuation of a domain string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationRecord {
    pub estimated_value: f64,
    pub factors: ValuationFactors,
    pub confidence: f64,
}

/// How a variation was derived from the base label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariationKind {
    Prefix,
    Suffix,
}

/// A spin on the base label using a common particle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainVariation {
    pub name: String,
    pub kind: VariationKind,
    pub score: f64,
}

/// A company with a similar name or business, found by phase 3
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyMatch {
    pub name: String,
    pub website: String,
    pub similarity_score: f64,
    pub potential_conflict: bool,
}

/// Coarse trademark-conflict severity
///
/// Ordered so the maximum over a conflict list is well-defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// A potential trademark conflict for a domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrademarkConflict {
    pub trademark: String,
    pub owner: String,
    pub registration_number: Option<String>,
    pub risk_level: RiskLevel,
}

/// Qualitative risk/opportunity summary derived from the phase-3 records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketAssessment {
    pub overall_risk: RiskLevel,
    pub has_conflicts: bool,
    pub brand_potential: f64,
    pub recommendation: String,
}

/// Phase-2 output row: availability and valuation for one domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainAppraisal {
    pub domain: String,
    pub availability: AvailabilityRecord,
    pub valuation: ValuationRecord,
}

/// Terminal artifact of the pipeline, one per selected candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchResult {
    pub domain: String,
    pub availability: AvailabilityRecord,
    pub valuation: ValuationRecord,
    pub variations: Vec<DomainVariation>,
    pub similar_companies: Vec<CompanyMatch>,
    pub trademark_conflicts: Vec<TrademarkConflict>,
    pub assessment: MarketAssessment,
    pub generated_at: DateTime<Utc>,
}
