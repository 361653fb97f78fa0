//! Registrar availability lookups
//!
//! Thin client over a GoDaddy-style availability endpoint. Lookup failures of
//! any kind (missing credentials, transport, bad status, malformed body) are
//! recovered into an error-flagged `AvailabilityRecord` so the pipeline keeps
//! going with partial data.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::pipeline::types::AvailabilityRecord;

const DEFAULT_BASE_URL: &str = "https://api.godaddy.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// API key/secret pair plus endpoint, from the environment
#[derive(Debug, Clone)]
pub struct RegistrarConfig {
    pub api_key: String,
    pub api_secret: String,
    pub base_url: String,
}

impl RegistrarConfig {
    /// Read `GODADDY_API_KEY` / `GODADDY_API_SECRET` (and an optional
    /// `GODADDY_API_URL` override). Returns `None` when no credentials are
    /// configured.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("GODADDY_API_KEY").ok()?;
        let api_secret = std::env::var("GODADDY_API_SECRET").ok()?;
        let base_url =
            std::env::var("GODADDY_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Some(Self {
            api_key,
            api_secret,
            base_url,
        })
    }
}

/// Wire shape of the availability endpoint response
#[derive(Debug, Deserialize)]
struct AvailabilityResponse {
    #[serde(default)]
    available: bool,
    price: Option<f64>,
    currency: Option<String>,
}

pub struct RegistrarClient {
    http: reqwest::Client,
    config: Option<RegistrarConfig>,
}

impl RegistrarClient {
    pub fn new(config: Option<RegistrarConfig>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(RegistrarConfig::from_env())
    }

    /// Check whether `domain` is available for registration.
    ///
    /// Never returns an error: a failed lookup yields
    /// `available: false` with the failure reason attached.
    pub async fn check_availability(&self, domain: &str) -> AvailabilityRecord {
        match self.try_check(domain).await {
            Ok(record) => record,
            Err(e) => AvailabilityRecord {
                domain: domain.to_string(),
                available: false,
                price: None,
                currency: "USD".to_string(),
                error: Some(format!("{:#}", e)),
            },
        }
    }

    async fn try_check(&self, domain: &str) -> Result<AvailabilityRecord> {
        let config = self
            .config
            .as_ref()
            .context("registrar credentials not configured (GODADDY_API_KEY/GODADDY_API_SECRET)")?;

        let url = format!(
            "{}/v1/domains/available?domain={}",
            config.base_url.trim_end_matches('/'),
            domain
        );

        let response = self
            .http
            .get(&url)
            .header(
                "Authorization",
                format!("sso-key {}:{}", config.api_key, config.api_secret),
            )
            .header("Content-Type", "application/json")
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .with_context(|| format!("availability request failed for {}", domain))?
            .error_for_status()
            .with_context(|| format!("availability endpoint rejected {}", domain))?;

        let body: AvailabilityResponse = response
            .json()
            .await
            .with_context(|| format!("unexpected availability response for {}", domain))?;

        Ok(AvailabilityRecord {
            domain: domain.to_string(),
            available: body.available,
            price: body.price,
            currency: body.currency.unwrap_or_else(|| "USD".to_string()),
            error: None,
        })
    }
}
