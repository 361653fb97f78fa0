//! Phase 1: Candidate name generation
//!
//! Delegates ideation to a [`SuggestionProvider`] and then enforces the phase
//! contract on whatever comes back: exactly [`SUGGESTION_COUNT`] candidates,
//! each a lowercase alphanumeric label within the requested length, digits
//! stripped unless the request allows them, fixed suffix appended.

use std::collections::HashSet;

use anyhow::{Context, Result};
use domain_scout_sdk::{log_lookup_complete, log_lookup_failed, log_lookup_start};

use crate::pipeline::types::{label, CandidateName, ResearchRequest, DOMAIN_SUFFIX, SUGGESTION_COUNT};
use crate::suggest::SuggestionProvider;

/// Generate the fixed-size candidate batch for a request
pub async fn generate_candidates(
    request: &ResearchRequest,
    provider: &dyn SuggestionProvider,
) -> Result<Vec<CandidateName>> {
    let task_id = "generate";
    log_lookup_start!(task_id, "suggestion-provider", "Requesting name suggestions");

    let raw = match provider.suggest(request).await {
        Ok(raw) => raw,
        Err(e) => {
            log_lookup_failed!(task_id, "suggestion-provider", format!("{:#}", e));
            return Err(e).context("name generation failed");
        }
    };

    log_lookup_complete!(
        task_id,
        "suggestion-provider",
        format!("{} raw suggestions", raw.len())
    );

    let mut seen: HashSet<String> = HashSet::new();
    let mut candidates: Vec<CandidateName> = Vec::new();
    for suggestion in raw {
        if candidates.len() == SUGGESTION_COUNT {
            break;
        }
        if let Some(clean) = sanitize(&suggestion, request) {
            if seen.insert(clean.domain.clone()) {
                candidates.push(clean);
            }
        }
    }

    if candidates.len() != SUGGESTION_COUNT {
        anyhow::bail!(
            "name generation produced {} usable candidates, expected {}",
            candidates.len(),
            SUGGESTION_COUNT
        );
    }

    Ok(candidates)
}

/// Normalize one suggestion into a syntactically valid candidate, or drop it
fn sanitize(candidate: &CandidateName, request: &ResearchRequest) -> Option<CandidateName> {
    let cleaned: String = label(&candidate.domain)
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() && (request.include_numbers || !c.is_ascii_digit()))
        .take(request.max_length)
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    Some(CandidateName {
        domain: format!("{}{}", cleaned, DOMAIN_SUFFIX),
        rationale: candidate.rationale.clone(),
        industry_relevance: candidate.industry_relevance.clone(),
    })
}
