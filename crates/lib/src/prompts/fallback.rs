//! Prompts for the search-plus-LLM fallback path.

use super::render;

/// Context used when the fallback search returns no organic results.
pub const NO_RESULTS_CONTEXT: &str = "No recent news found.";

/// System prompt when the caller expects JSON. Placeholder: `{schema}`.
pub const FALLBACK_SCHEMA_SYSTEM_PROMPT: &str = "You are a civic data parser. Use the provided context to answer. Return ONLY raw JSON matching this schema: {schema}";

/// System prompt for free-text fallback answers.
pub const FALLBACK_SUMMARY_SYSTEM_PROMPT: &str =
    "You are a civic intelligence assistant. Summarize the provided context objectively.";

/// Placeholders: `{context}`, `{prompt}`.
pub const FALLBACK_USER_PROMPT: &str = "CONTEXT:\n{context}\n\nQUERY: {prompt}";

/// Renders the fallback system prompt, embedding the serialized schema if any.
pub fn fallback_system_prompt(schema_json: Option<&str>) -> String {
    match schema_json {
        Some(schema) => render(FALLBACK_SCHEMA_SYSTEM_PROMPT, &[("schema", schema)]),
        None => FALLBACK_SUMMARY_SYSTEM_PROMPT.to_string(),
    }
}

pub fn fallback_user_prompt(context: &str, prompt: &str) -> String {
    render(
        FALLBACK_USER_PROMPT,
        &[("context", context), ("prompt", prompt)],
    )
}
