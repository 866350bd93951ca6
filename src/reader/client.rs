use crate::reader::{errors::ReaderError, types::FetchedPage};
use chrono::Utc;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::instrument;

/// Per-request timeout for the reader proxy. The proxy itself renders and
/// extracts the target page, so slow sites show up here as slow responses.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(12);

/// Extractions shorter than this are treated as empty (cookie walls,
/// bot-block interstitials, parked domains).
pub const MIN_TEXT_LEN: usize = 100;

/// Successful extractions are cut to this many characters before use.
pub const MAX_TEXT_LEN: usize = 8000;

const USER_AGENT: &str = "VCScout/1.0";

/// Client for a Jina-Reader-style "read this URL as plain text" proxy: the
/// target URL is appended to the proxy base and the response body is the
/// extracted page text.
#[derive(Debug, Clone)]
pub struct ReaderClient {
    http: Client,
    base_url: String,
}

impl ReaderClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = ClientBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(reqwest::header::ACCEPT, "text/plain".parse().unwrap());
                headers
            })
            .build()
            .expect("Failed to build HTTP client");
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Read `target` through the proxy, returning its plain-text content
    /// truncated to [`MAX_TEXT_LEN`] characters.
    #[instrument(skip_all, fields(url = %target))]
    pub async fn fetch_page(&self, target: &str) -> Result<FetchedPage, ReaderError> {
        let reader_url = url::Url::parse(&format!("{}/{}", self.base_url, target))?;

        let response = self
            .http
            .get(reader_url)
            .send()
            .await
            .map_err(ReaderError::from_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReaderError::Http { status });
        }

        let text = response
            .text()
            .await
            .map_err(|e| ReaderError::Io(e.to_string()))?;

        let char_count = text.chars().count();
        if char_count <= MIN_TEXT_LEN {
            return Err(ReaderError::TooShort(char_count));
        }

        Ok(FetchedPage {
            url: target.to_string(),
            text: truncate_chars(&text, MAX_TEXT_LEN),
            fetched_at: Utc::now(),
        })
    }
}

/// Keep the first `max` characters. Operates on char boundaries so multibyte
/// content never gets split mid-codepoint.
fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_noop_when_short() {
        assert_eq!(truncate_chars("hello", 8000), "hello");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        let text = "日本語テキスト";
        assert_eq!(truncate_chars(text, 3), "日本語");
    }

    #[test]
    fn truncate_exact_boundary() {
        let text = "a".repeat(MAX_TEXT_LEN + 1);
        assert_eq!(truncate_chars(&text, MAX_TEXT_LEN).chars().count(), MAX_TEXT_LEN);
    }

    #[test]
    fn base_url_trailing_slash_stripped() {
        let client = ReaderClient::new("http://localhost:4011/");
        assert_eq!(client.base_url, "http://localhost:4011");
    }
}
