//! Turning raw backend text into a `StructuredOutput`.

use crate::{
    errors::IntelError, prompts::fallback::NO_RESULTS_CONTEXT, providers::search::OrganicResult,
    types::StructuredOutput,
};
use regex::Regex;
use serde_json::Value;
use tracing::warn;

/// Extracts the body of the first fenced code block (```json or bare ```).
pub fn extract_fenced_block(text: &str) -> Result<Option<&str>, IntelError> {
    let re = Regex::new(r"```(?:json|JSON)?[ \t]*\r?\n?([\s\S]*?)```")?;
    Ok(re
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim()))
}

/// Interprets `raw_text` as the JSON answer to a schema-constrained request.
///
/// A fenced block is tried when the whole text does not parse. Parse
/// failures are reported in the returned value, never as an error.
pub fn parse_structured(raw_text: &str) -> StructuredOutput {
    let trimmed = raw_text.trim();
    if trimmed.is_empty() {
        return StructuredOutput::ParseError {
            raw: raw_text.to_string(),
            message: "empty response".to_string(),
        };
    }

    let first_error = match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => return StructuredOutput::Parsed { value },
        Err(e) => e,
    };

    if let Ok(Some(block)) = extract_fenced_block(trimmed) {
        if let Ok(value) = serde_json::from_str::<Value>(block) {
            return StructuredOutput::Parsed { value };
        }
    }

    warn!("Answer is not valid JSON: {first_error}");
    StructuredOutput::ParseError {
        raw: raw_text.to_string(),
        message: first_error.to_string(),
    }
}

/// Builds the fallback LLM context block from search results.
pub fn build_search_context(results: &[OrganicResult]) -> String {
    if results.is_empty() {
        return NO_RESULTS_CONTEXT.to_string();
    }
    results
        .iter()
        .map(|r| format!("Title: {}\nSnippet: {}\nLink: {}", r.title, r.snippet, r.link))
        .collect::<Vec<_>>()
        .join("\n\n")
}
