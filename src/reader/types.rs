use chrono::{DateTime, Utc};

/// Plain-text content of one page, as returned by the reader proxy. Held
/// only for the duration of a single enrichment call.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// The page URL that was read, not the proxy URL.
    pub url: String,
    /// Extracted text, already truncated to the pipeline's page budget.
    pub text: String,
    pub fetched_at: DateTime<Utc>,
}
