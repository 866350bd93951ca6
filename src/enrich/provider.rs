use std::fmt::{Display, Formatter};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::config::Config;
use crate::enrich::{
    dtos::EnrichmentResult, errors::EnrichError, fallback::FallbackProvider,
    pipeline::LiveProvider,
};
use crate::llm::GeminiClient;
use crate::reader::ReaderClient;

/// Which provider variant is serving enrichments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderMode {
    Live,
    Fallback,
}

impl Display for ProviderMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderMode::Live => write!(f, "live"),
            ProviderMode::Fallback => write!(f, "fallback"),
        }
    }
}

/// The enrichment contract. Selected once at startup; callers never branch
/// on which variant is active.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrichmentProvider: Send + Sync {
    async fn enrich(&self, domain: &str) -> Result<EnrichmentResult, EnrichError>;

    /// Which variant this is, for health reporting and startup logs.
    fn mode(&self) -> ProviderMode;
}

/// Pick the provider by credential presence: a configured Gemini key selects
/// the live pipeline, absence selects the synthetic fallback.
pub fn from_config(config: &Config) -> Arc<dyn EnrichmentProvider + Send + Sync> {
    match config.gemini_api_key() {
        Some(key) => {
            let reader = ReaderClient::new(config.reader_base_url());
            let completions = Arc::new(GeminiClient::new(
                config.gemini_base_url(),
                key,
                config.gemini_model(),
            ));
            Arc::new(LiveProvider::new(reader, completions))
        }
        None => {
            info!("no Gemini API key configured, enrichment runs in fallback mode");
            Arc::new(FallbackProvider::new())
        }
    }
}
