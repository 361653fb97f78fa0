//! Phase 2: Availability checks and valuation
//!
//! Runs the per-domain registrar lookups concurrently with a configurable
//! batch size and attaches the deterministic valuation to each record. The
//! valuation and variation helpers are pure and offline.

use std::sync::Arc;

use anyhow::Result;
use domain_scout_sdk::{log_lookup_complete, log_lookup_start, log_task_complete, log_task_start};
use futures::{stream::FuturesUnordered, StreamExt};
use tokio::sync::Semaphore;

use crate::pipeline::types::{
    label, DomainAppraisal, DomainVariation, ValuationFactors, ValuationRecord, VariationKind,
};
use crate::registrar::RegistrarClient;
use crate::suggest::{NAME_PREFIXES, NAME_SUFFIXES};

const BASE_VALUE: f64 = 1000.0;
const SHORT_LABEL_MULTIPLIER: f64 = 2.0;
const NO_DIGIT_MULTIPLIER: f64 = 1.5;
const SHORT_LABEL_LIMIT: usize = 6;
const BRANDABILITY_SCORE: f64 = 7.5;
const MEMORABILITY_SCORE: f64 = 8.0;
const CONFIDENCE_SCORE: f64 = 0.8;

/// Registered labels may not exceed 63 characters
const MAX_LABEL_LENGTH: usize = 63;

/// Check availability and estimate value for each selected domain
pub async fn appraise_domains(
    domains: &[String],
    registrar: &RegistrarClient,
    batch_size: usize,
) -> Result<Vec<DomainAppraisal>> {
    let total = domains.len();
    let sem = Arc::new(Semaphore::new(batch_size.max(1)));

    println!("{}", "=".repeat(80));
    println!(
        "PHASE 2: Appraising {} Domains (concurrency: {})",
        total,
        batch_size.max(1)
    );
    println!("{}", "=".repeat(80));

    let mut tasks = FuturesUnordered::new();
    for (i, domain) in domains.iter().enumerate() {
        let domain = domain.clone();
        let sem = sem.clone();

        tasks.push(async move {
            let _permit = sem
                .acquire()
                .await
                .map_err(|_| anyhow::anyhow!("Semaphore closed"))?;

            let task_id = format!("appraise_{}", i + 1);
            log_task_start!(2, &task_id, format!("Appraisal {}/{}", i + 1, total), total);
            log_lookup_start!(&task_id, &domain, "Registrar availability lookup");

            let availability = registrar.check_availability(&domain).await;

            log_lookup_complete!(
                &task_id,
                &domain,
                if availability.available {
                    "available"
                } else {
                    "taken or unknown"
                }
            );

            let valuation = estimate_value(&domain);
            log_task_complete!(
                &task_id,
                format!("{} valued at {:.0}", domain, valuation.estimated_value)
            );

            Ok::<_, anyhow::Error>((
                i,
                DomainAppraisal {
                    domain,
                    availability,
                    valuation,
                },
            ))
        });
    }

    let mut indexed = Vec::with_capacity(total);
    while let Some(result) = tasks.next().await {
        indexed.push(result?);
    }
    indexed.sort_by_key(|(i, _)| *i);

    Ok(indexed.into_iter().map(|(_, appraisal)| appraisal).collect())
}

/// Estimate the market value of a domain.
///
/// Pure function of the domain string: base value, doubled for labels under
/// six characters, times 1.5 for digit-free labels. Brandability and
/// memorability are fixed placeholder scores.
pub fn estimate_value(domain: &str) -> ValuationRecord {
    let name = label(domain);
    let length = name.chars().count();
    let has_digit = name.chars().any(|c| c.is_ascii_digit());

    let mut value = BASE_VALUE;
    if length < SHORT_LABEL_LIMIT {
        value *= SHORT_LABEL_MULTIPLIER;
    }
    if !has_digit {
        value *= NO_DIGIT_MULTIPLIER;
    }

    ValuationRecord {
        estimated_value: value,
        factors: ValuationFactors {
            length,
            brandability: BRANDABILITY_SCORE,
            memorability: MEMORABILITY_SCORE,
        },
        confidence: CONFIDENCE_SCORE,
    }
}

/// Derive prefix/suffix variations of a domain's label
pub fn generate_variations(domain: &str) -> Vec<DomainVariation> {
    let base = label(domain).to_lowercase();
    let mut variations = Vec::new();

    for prefix in NAME_PREFIXES {
        let name = format!("{}{}", prefix, base);
        if name.len() <= MAX_LABEL_LENGTH {
            variations.push(DomainVariation {
                name,
                kind: VariationKind::Prefix,
                score: 0.8,
            });
        }
    }
    for suffix in NAME_SUFFIXES {
        let name = format!("{}{}", base, suffix);
        if name.len() <= MAX_LABEL_LENGTH {
            variations.push(DomainVariation {
                name,
                kind: VariationKind::Suffix,
                score: 0.9,
            });
        }
    }

    variations
}
