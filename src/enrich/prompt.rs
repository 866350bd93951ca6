//! Prompt construction and model-output sanitization.
//!
//! The fence-stripping here is part of the contract, not a workaround:
//! models wrap JSON in markdown fences often enough that any consumer of
//! their output has to strip them before parsing.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::reader::FetchedPage;

/// Opening or closing code fence, optionally with a `json` language tag.
static CODE_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"```(?:json)?\n?").unwrap());

const INSTRUCTIONS: &str = r#"You are a VC analyst assistant. Analyze this company website content and extract structured information.

Return ONLY valid JSON (no markdown, no explanation) with exactly this structure:
{
  "summary": "1-2 sentence company summary",
  "whatTheyDo": ["bullet 1", "bullet 2", "bullet 3"],
  "keywords": ["keyword1", "keyword2", "keyword3", "keyword4", "keyword5"],
  "signals": ["signal 1", "signal 2", "signal 3"]
}

Rules:
- summary: concise, informative, 1-2 sentences
- whatTheyDo: 3-6 concrete bullets describing the product/service
- keywords: 5-10 relevant technical/business keywords
- signals: 2-4 signals inferred from the site (e.g., "Active hiring page with 8 open roles", "Recent changelog suggests active product development", "Blog last updated within 30 days", "Pricing page present indicating self-serve motion")"#;

/// Concatenate extracted pages into one block, each demarcated by a marker
/// carrying its source URL.
pub fn combine_pages(pages: &[FetchedPage]) -> String {
    pages
        .iter()
        .map(|page| format!("=== PAGE: {} ===\n{}", page.url, page.text))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn build_prompt(content: &str) -> String {
    format!("{INSTRUCTIONS}\n\nWEBSITE CONTENT:\n{content}")
}

/// Strip any code-fence markup the model wrapped around its JSON despite
/// instructions, then trim surrounding whitespace.
pub fn strip_code_fences(raw: &str) -> String {
    CODE_FENCE.replace_all(raw, "").trim().to_string()
}
