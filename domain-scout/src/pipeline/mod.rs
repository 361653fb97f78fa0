//! Domain research pipeline
//!
//! Three phases run strictly in order, each seeded by the previous phase's
//! output: name generation, availability/valuation appraisal, and market
//! research. A human selection gate sits between phases 1 and 2.

pub mod cli;
pub mod phase1_generate;
pub mod phase2_appraise;
pub mod phase3_research;
pub mod selection;
pub mod types;
pub mod workflow;

// Re-export commonly used types
pub use types::{
    AvailabilityRecord, CandidateName, CompanyMatch, DomainAppraisal, DomainVariation,
    MarketAssessment, ResearchRequest, ResearchResult, RiskLevel, TrademarkConflict,
    ValuationFactors, ValuationRecord,
};
pub use workflow::{
    analyze_selection, filter_results, generate_names, run_pipeline, run_pipeline_with,
    PipelineConfig, PipelineOutcome,
};
