use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct EnrichRequest {
    /// Bare hostname or URL. No well-formedness check beyond non-empty;
    /// malformed domains fail naturally at the fetch stage.
    pub domain: Option<String>,
}

impl EnrichRequest {
    /// Returns the trimmed domain, or an error when the field is missing or
    /// blank.
    pub fn validate(&self) -> Result<&str, String> {
        match self.domain.as_deref().map(str::trim) {
            Some(domain) if !domain.is_empty() => Ok(domain),
            _ => Err("domain is required".to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SourceRef {
    pub url: String,
    pub fetched_at: DateTime<Utc>,
}

/// The one persisted artifact of an enrichment. Persistence is entirely the
/// caller's concern; the pipeline builds a fresh one on every invocation.
///
/// The array fields are always present, defaulting to empty when the model
/// omits them. Callers can rely on never seeing null here.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentResult {
    pub summary: String,
    pub what_they_do: Vec<String>,
    pub keywords: Vec<String>,
    pub signals: Vec<String>,
    /// One entry per page that was successfully fetched (0 to 2 entries).
    pub sources: Vec<SourceRef>,
    pub cached_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_trims_domain() {
        let request = EnrichRequest {
            domain: Some("  acme.io  ".to_string()),
        };
        assert_eq!(request.validate().unwrap(), "acme.io");
    }

    #[test]
    fn validate_rejects_missing_domain() {
        let request = EnrichRequest { domain: None };
        assert!(request.validate().is_err());
    }

    #[test]
    fn validate_rejects_blank_domain() {
        let request = EnrichRequest {
            domain: Some("   ".to_string()),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn result_serializes_camel_case() {
        let result = EnrichmentResult {
            summary: "s".to_string(),
            what_they_do: vec![],
            keywords: vec![],
            signals: vec![],
            sources: vec![],
            cached_at: Utc::now(),
            error: None,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("whatTheyDo").is_some());
        assert!(value.get("cachedAt").is_some());
        // error is omitted entirely when absent, never null
        assert!(value.get("error").is_none());
    }
}
