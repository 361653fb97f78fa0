//! Workflow orchestration for the domain research pipeline
//!
//! Holds the three phase definitions and their dependency edges (phase 2
//! consumes phase 1's candidates, phase 3 consumes phase 2's appraisals),
//! executes them in order, and threads each phase's output forward. The
//! human selection gate sits between phases 1 and 2: without a selection the
//! run stops after generation and hands the candidates back to the caller.
//!
//! The primary entry point is [`run_pipeline`]; [`generate_names`] and
//! [`analyze_selection`] are the two presentation-boundary wrappers.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};
use tokio::fs;

use domain_scout_sdk::{
    log_phase_complete, log_phase_start, log_state_file, log_task_complete, log_task_start,
};

use crate::pipeline::phase1_generate::generate_candidates;
use crate::pipeline::phase2_appraise::appraise_domains;
use crate::pipeline::phase3_research::research_domains;
use crate::pipeline::selection::validate_selection;
use crate::pipeline::types::{
    CandidateName, DomainAppraisal, ResearchRequest, ResearchResult, DOMAIN_SUFFIX,
};
use crate::registrar::RegistrarClient;
use crate::session::ResearchSession;
use crate::suggest::{provider_from_env, SuggestionProvider};

pub const TOTAL_PHASES: usize = 3;

/// Configuration for a pipeline run
///
/// Most fields are optional to support resuming from intermediate phases
/// with saved state files.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Free-text business description (required for phase 1)
    pub description: Option<String>,
    /// Industry sector
    pub industry: Option<String>,
    /// Maximum length of generated labels
    pub max_length: usize,
    /// Whether digits are allowed in labels
    pub include_numbers: bool,
    /// Which phases to execute (1-3)
    pub phases: Vec<u32>,
    /// Number of concurrent per-domain lookups within a phase
    pub batch_size: usize,
    /// Gate-approved names; empty means stop after phase 1
    pub selected: Vec<String>,
    /// Path to saved candidates (for resuming past phase 1)
    pub candidates_file: Option<String>,
    /// Path to saved appraisals (for resuming past phase 2)
    pub appraisals_file: Option<String>,
    /// Restrict phase 3 to domains the registrar reported available
    pub available_only: bool,
    /// Base directory for OUTPUT/ and RESULTS/ state files
    pub dir: Option<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            description: None,
            industry: None,
            max_length: 15,
            include_numbers: false,
            phases: vec![1, 2, 3],
            batch_size: 1,
            selected: Vec::new(),
            candidates_file: None,
            appraisals_file: None,
            available_only: false,
            dir: None,
        }
    }
}

/// Aggregate returned at the presentation boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineOutcome {
    pub session: ResearchSession,
    pub available_domains: Vec<String>,
    pub results: Vec<ResearchResult>,
}

/// Run the pipeline with providers resolved from the environment
pub async fn run_pipeline(config: PipelineConfig) -> Result<PipelineOutcome> {
    let provider = provider_from_env();
    let registrar = RegistrarClient::from_env();
    run_pipeline_with(config, provider.as_ref(), &registrar).await
}

/// Run the pipeline against explicit collaborators (used by tests and
/// embedding callers)
pub async fn run_pipeline_with(
    config: PipelineConfig,
    provider: &dyn SuggestionProvider,
    registrar: &RegistrarClient,
) -> Result<PipelineOutcome> {
    if config.phases.contains(&1) && config.description.is_none() {
        anyhow::bail!("--input is required when running phase 1");
    }

    let base = PathBuf::from(config.dir.clone().unwrap_or_else(|| ".".to_string()));
    let output_dir = base.join("OUTPUT");
    let results_dir = base.join("RESULTS");
    fs::create_dir_all(&output_dir)
        .await
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;
    fs::create_dir_all(&results_dir)
        .await
        .with_context(|| format!("Failed to create {}", results_dir.display()))?;

    let request = ResearchRequest {
        description: config.description.clone().unwrap_or_default(),
        industry: config.industry.clone(),
        max_length: config.max_length,
        include_numbers: config.include_numbers,
    };
    let mut session = ResearchSession::new(request);

    // Phase 1: Generate candidate names
    if config.phases.contains(&1) {
        log_phase_start!(1, "Generate Names", TOTAL_PHASES);
        log_task_start!(1, "generate", "Generating candidate names");

        println!("{}", "=".repeat(80));
        println!("PHASE 1: Generating Candidate Names");
        println!("{}", "=".repeat(80));

        let candidates = generate_candidates(&session.request, provider).await?;

        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let candidates_path = output_dir.join(format!("name_candidates_{}.yaml", timestamp));
        let candidates_yaml = serde_yaml::to_string(&candidates)?;
        fs::write(&candidates_path, &candidates_yaml)
            .await
            .with_context(|| {
                format!(
                    "Failed to write candidates file: {}",
                    candidates_path.display()
                )
            })?;
        println!(
            "[Phase 1] Candidates saved to: {}",
            candidates_path.display()
        );

        log_task_complete!("generate", format!("Generated {} candidates", candidates.len()));
        log_state_file!(
            1,
            candidates_path.display().to_string(),
            "Candidate names for selection"
        );
        log_phase_complete!(1, "Generate Names");

        session.record_candidates(candidates);
    } else if let Some(candidates_file) = &config.candidates_file {
        let content = fs::read_to_string(candidates_file)
            .await
            .with_context(|| format!("Failed to read candidates file: {}", candidates_file))?;
        session.record_candidates(serde_yaml::from_str(&content).with_context(|| {
            format!("Failed to parse candidates YAML from: {}", candidates_file)
        })?);
        println!("[Phase 1] Loaded candidates from: {}", candidates_file);
    }

    let wants_analysis = config.phases.contains(&2) || config.phases.contains(&3);

    // Selection gate: without a selection, hand the candidates back for the
    // user round-trip instead of running the costlier phases. A saved
    // appraisal file is already gate-approved and proceeds.
    if config.selected.is_empty() && config.appraisals_file.is_none() {
        if wants_analysis && !session.candidates.is_empty() {
            println!();
            println!(
                "No selection provided. Pick at least 2 candidates and re-run with --select."
            );
        }
        return Ok(PipelineOutcome {
            session,
            available_domains: Vec::new(),
            results: Vec::new(),
        });
    }

    if !session.candidates.is_empty() {
        let selected = validate_selection(&session.candidates, &config.selected)?;
        session.record_selection(selected);
    } else if config.appraisals_file.is_none() {
        anyhow::bail!(
            "run phase 1 or provide --candidates-file before analyzing a selection"
        );
    }

    // Phase 2: Availability and valuation for the approved subset
    let mut appraisals: Vec<DomainAppraisal> = Vec::new();
    if config.phases.contains(&2) {
        log_phase_start!(2, "Check Availability", TOTAL_PHASES);

        appraisals = appraise_domains(&session.selected, registrar, config.batch_size).await?;

        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let appraisals_path = output_dir.join(format!("domain_appraisals_{}.yaml", timestamp));
        let appraisals_yaml = serde_yaml::to_string(&appraisals)?;
        fs::write(&appraisals_path, &appraisals_yaml)
            .await
            .with_context(|| {
                format!(
                    "Failed to write appraisals file: {}",
                    appraisals_path.display()
                )
            })?;
        println!(
            "\n[Phase 2] Appraisals saved to: {}",
            appraisals_path.display()
        );

        log_state_file!(
            2,
            appraisals_path.display().to_string(),
            "Domain appraisals for market research"
        );
        log_phase_complete!(2, "Check Availability");
    } else if let Some(appraisals_file) = &config.appraisals_file {
        let content = fs::read_to_string(appraisals_file)
            .await
            .with_context(|| format!("Failed to read appraisals file: {}", appraisals_file))?;
        appraisals = serde_yaml::from_str(&content).with_context(|| {
            format!("Failed to parse appraisals YAML from: {}", appraisals_file)
        })?;
        println!("[Phase 2] Loaded appraisals from: {}", appraisals_file);

        if !config.selected.is_empty() {
            let wanted: Vec<String> = config
                .selected
                .iter()
                .map(|s| {
                    let s = s.trim().to_lowercase();
                    if s.ends_with(DOMAIN_SUFFIX) {
                        s
                    } else {
                        format!("{}{}", s, DOMAIN_SUFFIX)
                    }
                })
                .collect();
            appraisals.retain(|a| wanted.contains(&a.domain));
        }
        // A saved appraisal set is already a gate-approved shortlist
        session.record_selection(appraisals.iter().map(|a| a.domain.clone()).collect());
    }

    // Phase 3: Market research on the appraised shortlist
    let mut results: Vec<ResearchResult> = Vec::new();
    if config.phases.contains(&3) {
        if appraisals.is_empty() {
            anyhow::bail!(
                "no appraisals available; run phase 2 first or provide --appraisals-file"
            );
        }
        log_phase_start!(3, "Market Research", TOTAL_PHASES);

        results = research_domains(&appraisals, config.batch_size, config.available_only).await?;

        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let results_path = results_dir.join(format!("research_results_{}.yaml", timestamp));
        let results_yaml = serde_yaml::to_string(&results)?;
        fs::write(&results_path, &results_yaml)
            .await
            .with_context(|| format!("Failed to write results file: {}", results_path.display()))?;
        println!("\n[Phase 3] Results saved to: {}", results_path.display());

        log_state_file!(
            3,
            results_path.display().to_string(),
            "Research results per selected domain"
        );
        log_phase_complete!(3, "Market Research");
    }

    let available_domains: Vec<String> = appraisals
        .iter()
        .filter(|a| a.availability.available)
        .map(|a| a.domain.clone())
        .collect();

    println!("\n{}", "=".repeat(80));
    println!(
        "Research complete! {} of {} selected domains available.",
        available_domains.len(),
        session.selected.len()
    );
    println!("{}", "=".repeat(80));

    Ok(PipelineOutcome {
        session,
        available_domains,
        results,
    })
}

/// Presentation entry point: run phase 1 only and return the candidates
pub async fn generate_names(
    request: ResearchRequest,
    dir: Option<String>,
) -> Result<Vec<CandidateName>> {
    let config = PipelineConfig {
        description: Some(request.description),
        industry: request.industry,
        max_length: request.max_length,
        include_numbers: request.include_numbers,
        phases: vec![1],
        dir,
        ..Default::default()
    };
    let outcome = run_pipeline(config).await?;
    Ok(outcome.session.candidates)
}

/// Presentation entry point: run the full pipeline for a gate-approved
/// selection. Phase 1 is re-run to reconstruct the candidate set the
/// selection is validated against.
pub async fn analyze_selection(
    request: ResearchRequest,
    selected: Vec<String>,
    dir: Option<String>,
) -> Result<PipelineOutcome> {
    let config = PipelineConfig {
        description: Some(request.description),
        industry: request.industry,
        max_length: request.max_length,
        include_numbers: request.include_numbers,
        selected,
        dir,
        ..Default::default()
    };
    run_pipeline(config).await
}

/// Filter terminal results at the presentation boundary
pub fn filter_results(
    results: &[ResearchResult],
    min_value: Option<f64>,
    must_be_available: bool,
) -> Vec<ResearchResult> {
    results
        .iter()
        .filter(|r| !must_be_available || r.availability.available)
        .filter(|r| min_value.map_or(true, |v| r.valuation.estimated_value >= v))
        .cloned()
        .collect()
}
