//! Synthetic enrichment used when no Gemini credential is configured.
//!
//! Schema-identical to the live pipeline's output so callers cannot tell the
//! variants apart by shape, only by content provenance. Keeps the UI fully
//! exercisable in development without any upstream accounts.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tracing::instrument;

use crate::enrich::{
    dtos::{EnrichmentResult, SourceRef},
    errors::EnrichError,
    provider::{EnrichmentProvider, ProviderMode},
};

/// Artificial delay preserving the perceived latency of a real enrichment.
pub const FALLBACK_DELAY: Duration = Duration::from_millis(1500);

pub struct FallbackProvider;

impl FallbackProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FallbackProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EnrichmentProvider for FallbackProvider {
    #[instrument(skip(self))]
    async fn enrich(&self, domain: &str) -> Result<EnrichmentResult, EnrichError> {
        tokio::time::sleep(FALLBACK_DELAY).await;
        Ok(synthetic_result(domain))
    }

    fn mode(&self) -> ProviderMode {
        ProviderMode::Fallback
    }
}

/// Deterministic, generic but plausible-looking result. The summary
/// interpolates the domain; everything else is fixed.
fn synthetic_result(domain: &str) -> EnrichmentResult {
    let now = Utc::now();
    EnrichmentResult {
        summary: format!(
            "{domain} is an innovative technology company building next-generation solutions \
             for the modern enterprise. They combine cutting-edge AI with intuitive user \
             experiences to deliver measurable business outcomes."
        ),
        what_they_do: vec![
            "Provides a cloud-native platform for enterprise workflow automation".to_string(),
            "Offers AI-powered analytics and insights dashboards".to_string(),
            "Integrates with major SaaS tools via a universal connector API".to_string(),
            "Delivers real-time collaboration features for distributed teams".to_string(),
        ],
        keywords: vec![
            "SaaS".to_string(),
            "AI/ML".to_string(),
            "enterprise".to_string(),
            "automation".to_string(),
            "analytics".to_string(),
            "cloud-native".to_string(),
            "API-first".to_string(),
            "workflow".to_string(),
        ],
        signals: vec![
            "Active hiring page with 12+ open engineering roles".to_string(),
            "Recent blog posts suggest strong product velocity".to_string(),
            "Pricing page indicates self-serve motion alongside enterprise sales".to_string(),
            "Integration marketplace signals ecosystem strategy".to_string(),
        ],
        sources: vec![
            SourceRef {
                url: format!("https://{domain}"),
                fetched_at: now,
            },
            SourceRef {
                url: format!("https://{domain}/about"),
                fetched_at: now,
            },
        ],
        cached_at: now,
        error: None,
    }
}
