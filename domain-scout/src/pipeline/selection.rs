//! Human selection gate between generation and the costlier analysis phases
//!
//! The gate itself is a UI concern; the pipeline only enforces its contract:
//! at least [`MIN_SELECTION`] names, every one of them a phase-1 candidate.

use anyhow::Result;

use crate::pipeline::types::{CandidateName, DOMAIN_SUFFIX};

/// Minimum number of names required to proceed past the gate
pub const MIN_SELECTION: usize = 2;

/// Validate a user selection against the generated candidates.
///
/// Accepts names with or without the fixed suffix, deduplicates while
/// preserving order, and rejects the selection as a blocking condition when
/// it is too small or names a domain that was never generated.
pub fn validate_selection(
    candidates: &[CandidateName],
    selected: &[String],
) -> Result<Vec<String>> {
    let mut normalized: Vec<String> = Vec::new();
    for name in selected {
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            continue;
        }
        let domain = if name.ends_with(DOMAIN_SUFFIX) {
            name
        } else {
            format!("{}{}", name, DOMAIN_SUFFIX)
        };
        if !normalized.contains(&domain) {
            normalized.push(domain);
        }
    }

    if normalized.len() < MIN_SELECTION {
        anyhow::bail!(
            "select at least {} names before analysis ({} given)",
            MIN_SELECTION,
            normalized.len()
        );
    }

    for domain in &normalized {
        if !candidates.iter().any(|c| c.domain == *domain) {
            anyhow::bail!("'{}' is not one of the generated candidates", domain);
        }
    }

    Ok(normalized)
}
