//! # Prompt Template Modules
//!
//! This module organizes all prompt templates used throughout the library.
//! It is divided into sub-modules based on the context or purpose of the prompts.

pub mod assistant;
pub mod fallback;
pub mod intel;

/// Fills `{name}` placeholders in `template` from `vars` in a single pass.
///
/// Inserted values are never rescanned, so text that happens to look like a
/// placeholder survives verbatim. Unknown placeholders are left as they are.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let key = &after[..close];
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
