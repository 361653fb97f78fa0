/*
┌─────────────────────────────────────────────────────────────────────────────┐
│                        DOMAIN RESEARCH PIPELINE                              │
└─────────────────────────────────────────────────────────────────────────────┘

  Phase 1: GENERATE NAMES
    │
    ├─> Input: description + industry + length constraints
    ├─> Suggestion provider proposes candidates
    ├─> Normalize labels, enforce exactly 10
    └─> Output: OUTPUT/name_candidates_<timestamp>.yaml

         ↓   (selection gate: user picks at least 2 names)

  Phase 2: CHECK AVAILABILITY & VALUE
    │
    ├─> For each selected domain (concurrent, --batch-size N):
    │   ├─> Registrar availability lookup (failures recovered in-record)
    │   └─> Deterministic valuation
    └─> Output: OUTPUT/domain_appraisals_<timestamp>.yaml

         ↓

  Phase 3: MARKET RESEARCH
    │
    ├─> For each appraised domain:
    │   ├─> Similar-company lookup
    │   ├─> Trademark-conflict lookup
    │   └─> Risk/opportunity assessment
    └─> Output: RESULTS/research_results_<timestamp>.yaml

EXAMPLE COMMANDS:

  # Round 1: generate candidates only
  cargo run -- \
    --input "tech startup" \
    --industry Technology \
    --max-length 12

  # Round 2: analyze a selection (phase 1 re-runs to validate the gate)
  cargo run -- \
    --input "tech startup" \
    --industry Technology \
    --max-length 12 \
    --select gettech.ai,techio.ai

  # Resume with saved candidates, parallel lookups
  cargo run -- \
    --phases 2,3 \
    --candidates-file OUTPUT/name_candidates_20250101_120000.yaml \
    --select gettech.ai,techio.ai \
    --batch-size 3

  # Research available domains only, from saved appraisals
  cargo run -- \
    --phases 3 \
    --appraisals-file OUTPUT/domain_appraisals_20250101_120000.yaml \
    --available-only
*/

use clap::Parser;
use domain_scout::pipeline::{cli::Args, run_pipeline, PipelineConfig, PipelineOutcome};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args = Args::parse();
    let json = args.json;
    let config: PipelineConfig = args.into();
    let outcome = run_pipeline(config).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_summary(&outcome);
    }
    Ok(())
}

fn print_summary(outcome: &PipelineOutcome) {
    if outcome.results.is_empty() {
        if !outcome.session.candidates.is_empty() {
            println!();
            println!("Candidates:");
            for (i, candidate) in outcome.session.candidates.iter().enumerate() {
                println!("  {:>2}. {:<20} {}", i + 1, candidate.domain, candidate.rationale);
            }
        }
        return;
    }

    println!();
    println!("Available domains:");
    if outcome.available_domains.is_empty() {
        println!("  (none of the selected domains are available)");
    }
    for domain in &outcome.available_domains {
        println!("  ✓ {}", domain);
    }

    println!();
    println!("Research bundles:");
    for result in &outcome.results {
        println!(
            "  {:<20} value {:>7.0} {} | {} companies, {} trademark conflicts | risk {:?}",
            result.domain,
            result.valuation.estimated_value,
            result.availability.currency,
            result.similar_companies.len(),
            result.trademark_conflicts.len(),
            result.assessment.overall_risk
        );
        println!("      {}", result.assessment.recommendation);
    }
}
