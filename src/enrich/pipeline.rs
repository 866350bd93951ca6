//! The live enrichment pipeline: fetch, extract, prompt, parse, normalize.
//!
//! Strictly sequential per invocation. Candidate pages are tried one after
//! another, the loop exits early once enough extractions succeed, and
//! neither the fetch loop nor the completion call is ever retried. Every
//! invocation starts from scratch; there is no cross-call state.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{error, info, instrument, warn};

use crate::enrich::{
    dtos::{EnrichmentResult, SourceRef},
    errors::EnrichError,
    prompt,
    provider::{EnrichmentProvider, ProviderMode},
};
use crate::llm::CompletionClient;
use crate::reader::{FetchedPage, ReaderClient};

/// Upper bound on pages fed into the prompt; the fetch loop stops as soon as
/// this many extractions have succeeded.
pub const MAX_PAGES: usize = 2;

/// Candidate page URLs for a domain: the bare domain (https-prefixed unless
/// a scheme was given) and its /about page. Exactly these two; no sitemap
/// discovery, no crawling.
pub fn candidate_urls(domain: &str) -> Vec<String> {
    let base = if domain.starts_with("http") {
        domain.to_string()
    } else {
        format!("https://{domain}")
    };
    vec![base.clone(), format!("{base}/about")]
}

/// Try each candidate in order, skipping failures, until [`MAX_PAGES`]
/// extractions have succeeded or the candidates run out.
pub async fn collect_pages(reader: &ReaderClient, candidates: &[String]) -> Vec<FetchedPage> {
    let mut pages = Vec::new();
    for url in candidates {
        match reader.fetch_page(url).await {
            Ok(page) => pages.push(page),
            Err(err) => warn!(url = %url, error = %err, "candidate page skipped"),
        }
        if pages.len() >= MAX_PAGES {
            break;
        }
    }
    pages
}

/// What we ask the model for. Anything it omits defaults to empty, and any
/// extra keys it invents are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ModelFields {
    summary: String,
    what_they_do: Vec<String>,
    keywords: Vec<String>,
    signals: Vec<String>,
}

fn parse_model_output(raw: &str) -> Result<ModelFields, EnrichError> {
    let clean = prompt::strip_code_fences(raw);
    serde_json::from_str(&clean).map_err(|err| {
        warn!(error = %err, "model output was not valid JSON");
        EnrichError::UnparseableResponse
    })
}

fn normalize(fields: ModelFields, pages: &[FetchedPage]) -> EnrichmentResult {
    EnrichmentResult {
        summary: fields.summary,
        what_they_do: fields.what_they_do,
        keywords: fields.keywords,
        signals: fields.signals,
        sources: pages
            .iter()
            .map(|page| SourceRef {
                url: page.url.clone(),
                fetched_at: page.fetched_at,
            })
            .collect(),
        cached_at: chrono::Utc::now(),
        error: None,
    }
}

/// Real enrichment: scrape through the reader proxy, ask the model for
/// strict JSON, sanitize and normalize its answer.
pub struct LiveProvider {
    reader: ReaderClient,
    completions: Arc<dyn CompletionClient>,
}

impl LiveProvider {
    pub fn new(reader: ReaderClient, completions: Arc<dyn CompletionClient>) -> Self {
        Self {
            reader,
            completions,
        }
    }
}

#[async_trait]
impl EnrichmentProvider for LiveProvider {
    #[instrument(skip(self))]
    async fn enrich(&self, domain: &str) -> Result<EnrichmentResult, EnrichError> {
        let candidates = candidate_urls(domain);
        let pages = collect_pages(&self.reader, &candidates).await;
        if pages.is_empty() {
            return Err(EnrichError::NoPagesFetched {
                domain: domain.to_string(),
            });
        }
        info!(pages = pages.len(), "page content extracted");

        let prompt = prompt::build_prompt(&prompt::combine_pages(&pages));
        let raw = self.completions.complete(&prompt).await.map_err(|err| {
            error!(error = %err, "completion call failed");
            EnrichError::Completion(err.to_string())
        })?;

        let fields = parse_model_output(&raw)?;
        Ok(normalize(fields, &pages))
    }

    fn mode(&self) -> ProviderMode {
        ProviderMode::Live
    }
}
