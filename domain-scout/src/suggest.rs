//! Name-suggestion collaborator boundary
//!
//! Phase 1 delegates candidate generation to a [`SuggestionProvider`]. The
//! HTTP provider forwards the structured request to an external generative
//! service and trusts nothing about its internals; the heuristic provider is
//! the built-in deterministic fallback that combines request keywords with
//! common name particles. Either way, phase 1 re-validates the output shape.

use std::collections::HashSet;
use std::time::Duration;

use anyhow::{Context, Result};
use domain_scout_sdk::async_trait;
use serde::{Deserialize, Serialize};

use crate::pipeline::types::{CandidateName, ResearchRequest, DOMAIN_SUFFIX, SUGGESTION_COUNT};

/// Particles used for combination names and for variations
pub const NAME_PREFIXES: [&str; 5] = ["get", "try", "use", "my", "the"];
pub const NAME_SUFFIXES: [&str; 5] = ["app", "io", "co", "net", "org"];

const ENV_SUGGEST_URL: &str = "DOMAIN_SCOUT_SUGGEST_URL";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    async fn suggest(&self, request: &ResearchRequest) -> Result<Vec<CandidateName>>;
}

/// Pick the HTTP provider when an endpoint is configured, otherwise fall back
/// to the built-in heuristic generator.
pub fn provider_from_env() -> Box<dyn SuggestionProvider> {
    match HttpSuggestionProvider::from_env() {
        Some(provider) => Box::new(provider),
        None => Box::new(HeuristicSuggestionProvider),
    }
}

/// Wire request for the external suggestion service
#[derive(Debug, Serialize)]
struct WireRequest<'a> {
    description: &'a str,
    industry: &'a str,
    max_length: usize,
    include_numbers: bool,
    count: usize,
}

#[derive(Debug, Deserialize)]
struct WireSuggestion {
    domain_name: String,
    #[serde(default)]
    rationale: String,
    #[serde(default)]
    industry_relevance: String,
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    suggestions: Vec<WireSuggestion>,
}

/// Opaque external generative collaborator
pub struct HttpSuggestionProvider {
    http: reqwest::Client,
    url: String,
}

impl HttpSuggestionProvider {
    pub fn new(url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            url,
        }
    }

    pub fn from_env() -> Option<Self> {
        std::env::var(ENV_SUGGEST_URL).ok().map(Self::new)
    }
}

#[async_trait]
impl SuggestionProvider for HttpSuggestionProvider {
    async fn suggest(&self, request: &ResearchRequest) -> Result<Vec<CandidateName>> {
        let body = WireRequest {
            description: &request.description,
            industry: request.industry_label(),
            max_length: request.max_length,
            include_numbers: request.include_numbers,
            count: SUGGESTION_COUNT,
        };

        let response: WireResponse = self
            .http
            .post(&self.url)
            .json(&body)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .context("suggestion request failed")?
            .error_for_status()
            .context("suggestion service rejected the request")?
            .json()
            .await
            .context("unexpected suggestion response shape")?;

        Ok(response
            .suggestions
            .into_iter()
            .map(|s| CandidateName {
                domain: s.domain_name,
                rationale: s.rationale,
                industry_relevance: s.industry_relevance,
            })
            .collect())
    }
}

/// Built-in deterministic generator combining request keywords with the
/// prefix/suffix particles
pub struct HeuristicSuggestionProvider;

#[async_trait]
impl SuggestionProvider for HeuristicSuggestionProvider {
    async fn suggest(&self, request: &ResearchRequest) -> Result<Vec<CandidateName>> {
        let stems = keyword_stems(request);
        let industry = request.industry_label().to_string();

        let max_length = request.max_length;
        let mut seen: HashSet<String> = HashSet::new();
        let mut out: Vec<CandidateName> = Vec::new();

        for stem in &stems {
            push_candidate(
                &mut seen,
                &mut out,
                max_length,
                stem.clone(),
                format!("Uses '{}' directly for a literal, memorable name.", stem),
                format!("Drawn straight from the {} brief.", industry),
            );
            for prefix in NAME_PREFIXES {
                let trimmed = truncate(stem, max_length.saturating_sub(prefix.len()));
                if trimmed.is_empty() {
                    continue;
                }
                push_candidate(
                    &mut seen,
                    &mut out,
                    max_length,
                    format!("{}{}", prefix, trimmed),
                    format!(
                        "Pairs '{}' with the action particle '{}' for a call-to-action name.",
                        trimmed, prefix
                    ),
                    format!("Keeps the {} keyword '{}' front and center.", industry, stem),
                );
            }
            for suffix in NAME_SUFFIXES {
                let trimmed = truncate(stem, max_length.saturating_sub(suffix.len()));
                if trimmed.is_empty() {
                    continue;
                }
                push_candidate(
                    &mut seen,
                    &mut out,
                    max_length,
                    format!("{}{}", trimmed, suffix),
                    format!(
                        "Extends '{}' with '{}' for a product-style name.",
                        trimmed, suffix
                    ),
                    format!("Signals a {} offering built around '{}'.", industry, stem),
                );
            }
            if out.len() >= SUGGESTION_COUNT {
                break;
            }
        }

        // Pairwise stem combinations as a last resort for sparse requests
        if out.len() < SUGGESTION_COUNT {
            for a in &stems {
                for b in &stems {
                    if a == b {
                        continue;
                    }
                    push_candidate(
                        &mut seen,
                        &mut out,
                        max_length,
                        truncate(&format!("{}{}", a, b), max_length),
                        format!("Fuses '{}' and '{}' into a coined name.", a, b),
                        format!("Blends two keywords from the {} brief.", industry),
                    );
                }
            }
        }

        Ok(out)
    }
}

fn push_candidate(
    seen: &mut HashSet<String>,
    out: &mut Vec<CandidateName>,
    max_length: usize,
    label: String,
    rationale: String,
    industry_relevance: String,
) {
    if label.is_empty() || label.chars().count() > max_length {
        return;
    }
    if seen.insert(label.clone()) {
        out.push(CandidateName {
            domain: format!("{}{}", label, DOMAIN_SUFFIX),
            rationale,
            industry_relevance,
        });
    }
}

/// Lowercased alphanumeric stems from the request, in order of appearance
fn keyword_stems(request: &ResearchRequest) -> Vec<String> {
    const STOPWORDS: [&str; 13] = [
        "a", "an", "and", "the", "for", "of", "in", "on", "to", "with", "my", "our", "your",
    ];

    let mut text = request.description.to_lowercase();
    if let Some(industry) = &request.industry {
        text.push(' ');
        text.push_str(&industry.to_lowercase());
    }

    let mut seen = HashSet::new();
    let mut stems: Vec<String> = Vec::new();
    for word in text.split(|c: char| !c.is_ascii_alphanumeric()) {
        let stem: String = word
            .chars()
            .filter(|c| {
                c.is_ascii_alphanumeric() && (request.include_numbers || !c.is_ascii_digit())
            })
            .collect();
        if stem.len() < 2 || STOPWORDS.contains(&stem.as_str()) {
            continue;
        }
        if seen.insert(stem.clone()) {
            stems.push(stem);
        }
    }

    if stems.is_empty() {
        stems.push("brand".to_string());
    }
    stems
}

fn truncate(stem: &str, budget: usize) -> String {
    stem.chars().take(budget).collect()
}
