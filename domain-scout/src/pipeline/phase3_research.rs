//! Phase 3: Market research for the approved shortlist
//!
//! Fetches similar-company and trademark records for each domain and bundles
//! them with the carried phase-2 appraisal into the terminal
//! [`ResearchResult`]. The lookups are simulated stand-ins with the fixed
//! shape of the real services.

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use domain_scout_sdk::{log_lookup_complete, log_lookup_start, log_task_complete, log_task_start};
use futures::{stream::FuturesUnordered, StreamExt};
use tokio::sync::Semaphore;

use crate::pipeline::phase2_appraise::generate_variations;
use crate::pipeline::types::{
    label, CompanyMatch, DomainAppraisal, MarketAssessment, ResearchResult, RiskLevel,
    TrademarkConflict,
};

/// Research every appraised domain, optionally restricted to available ones
pub async fn research_domains(
    appraisals: &[DomainAppraisal],
    batch_size: usize,
    available_only: bool,
) -> Result<Vec<ResearchResult>> {
    let shortlist: Vec<&DomainAppraisal> = appraisals
        .iter()
        .filter(|a| !available_only || a.availability.available)
        .collect();
    let total = shortlist.len();
    let sem = Arc::new(Semaphore::new(batch_size.max(1)));

    println!("{}", "=".repeat(80));
    println!(
        "PHASE 3: Researching {} Domains (concurrency: {})",
        total,
        batch_size.max(1)
    );
    println!("{}", "=".repeat(80));

    let mut tasks = FuturesUnordered::new();
    for (i, appraisal) in shortlist.into_iter().enumerate() {
        let appraisal = appraisal.clone();
        let sem = sem.clone();

        tasks.push(async move {
            let _permit = sem
                .acquire()
                .await
                .map_err(|_| anyhow::anyhow!("Semaphore closed"))?;

            let task_id = format!("research_{}", i + 1);
            log_task_start!(3, &task_id, format!("Research {}/{}", i + 1, total), total);

            log_lookup_start!(&task_id, &appraisal.domain, "Similar-company lookup");
            let companies = research_companies(&appraisal.domain);
            log_lookup_complete!(&task_id, &appraisal.domain, format!("{} matches", companies.len()));

            log_lookup_start!(&task_id, &appraisal.domain, "Trademark-conflict lookup");
            let conflicts = check_trademarks(&appraisal.domain);
            log_lookup_complete!(&task_id, &appraisal.domain, format!("{} conflicts", conflicts.len()));

            let assessment = assess_market(&appraisal, &companies, &conflicts);
            log_task_complete!(&task_id, format!("Assessed {}", appraisal.domain));

            Ok::<_, anyhow::Error>((
                i,
                ResearchResult {
                    domain: appraisal.domain.clone(),
                    availability: appraisal.availability.clone(),
                    valuation: appraisal.valuation.clone(),
                    variations: generate_variations(&appraisal.domain),
                    similar_companies: companies,
                    trademark_conflicts: conflicts,
                    assessment,
                    generated_at: Utc::now(),
                },
            ))
        });
    }

    let mut indexed = Vec::with_capacity(total);
    while let Some(result) = tasks.next().await {
        indexed.push(result?);
    }
    indexed.sort_by_key(|(i, _)| *i);

    Ok(indexed.into_iter().map(|(_, result)| result).collect())
}

/// Simulated similar-company lookup with the fixed shape of the real service
pub fn research_companies(domain: &str) -> Vec<CompanyMatch> {
    let base = label(domain);
    vec![CompanyMatch {
        name: format!("Similar{}", base),
        website: format!("https://similar{}.com", base),
        similarity_score: 7.0,
        potential_conflict: false,
    }]
}

/// Simulated trademark lookup with the fixed shape of the real service
pub fn check_trademarks(domain: &str) -> Vec<TrademarkConflict> {
    vec![TrademarkConflict {
        trademark: label(domain).to_uppercase(),
        owner: "Sample Company Inc".to_string(),
        registration_number: Some("US123456".to_string()),
        risk_level: RiskLevel::Low,
    }]
}

/// Derive the qualitative risk/opportunity summary for one domain
pub fn assess_market(
    appraisal: &DomainAppraisal,
    companies: &[CompanyMatch],
    conflicts: &[TrademarkConflict],
) -> MarketAssessment {
    let overall_risk = conflicts
        .iter()
        .map(|c| c.risk_level)
        .max()
        .unwrap_or(RiskLevel::Low);
    let has_conflicts =
        companies.iter().any(|c| c.potential_conflict) || !conflicts.is_empty();

    let risk_penalty = match overall_risk {
        RiskLevel::Low => 0.0,
        RiskLevel::Medium => 1.0,
        RiskLevel::High => 2.5,
    };
    let brand_potential = (appraisal.valuation.factors.brandability - risk_penalty).max(0.0);

    let recommendation = if !appraisal.availability.available {
        format!(
            "{} is not available to register; consider one of the variations.",
            appraisal.domain
        )
    } else {
        match overall_risk {
            RiskLevel::High => format!(
                "{} carries serious trademark exposure; seek counsel before registering.",
                appraisal.domain
            ),
            RiskLevel::Medium => format!(
                "{} is promising but register only after reviewing the flagged marks.",
                appraisal.domain
            ),
            RiskLevel::Low => format!(
                "{} is a strong candidate with no blocking conflicts; register early.",
                appraisal.domain
            ),
        }
    };

    MarketAssessment {
        overall_risk,
        has_conflicts,
        brand_potential,
        recommendation,
    }
}
