use crate::schema::Schema;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::warn;

/// A single request to the grounded-query executor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryRequest {
    pub prompt: String,
    #[serde(default)]
    pub schema: Option<Schema>,
    #[serde(default)]
    pub use_grounded_search: bool,
}

impl QueryRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    /// Requests JSON output matching `schema`.
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Requests live web grounding, which also enables the fallback path.
    pub fn grounded(mut self) -> Self {
        self.use_grounded_search = true;
        self
    }
}

/// A source that supports a generated answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub title: String,
    pub uri: String,
}

/// The backend that actually served a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    Primary,
    Fallback,
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Engine::Primary => write!(f, "Gemini"),
            Engine::Fallback => write!(f, "DeepSeek+SERP"),
        }
    }
}

/// The outcome of interpreting the answer as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StructuredOutput {
    /// No schema was supplied; the answer is free text.
    NotRequested,
    Parsed { value: Value },
    /// A schema was supplied but the answer is not JSON.
    ParseError { raw: String, message: String },
}

/// The normalized answer returned by both the primary and the fallback path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub raw_text: String,
    pub structured: StructuredOutput,
    pub sources: Vec<Citation>,
    pub engine: Engine,
}

impl QueryResult {
    /// The parsed JSON, or `None` when no schema was requested or the answer
    /// could not be parsed. `None` means "no data available", not a failure.
    pub fn parsed_json(&self) -> Option<&Value> {
        match &self.structured {
            StructuredOutput::Parsed { value } => Some(value),
            _ => None,
        }
    }

    /// Deserializes the parsed JSON into `T`.
    ///
    /// Returns `None` when there is no parsed value, when it is JSON `null`,
    /// or when its shape does not fit `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Option<T> {
        let value = self.parsed_json()?;
        if value.is_null() {
            return None;
        }
        match serde_json::from_value(value.clone()) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                warn!(engine = %self.engine, "Parsed answer does not fit the expected shape: {e}");
                None
            }
        }
    }

    /// Deserializes a JSON array answer element by element.
    ///
    /// Elements that do not fit `T` are skipped. An object whose only field
    /// is an array is unwrapped first, since JSON-object response modes wrap
    /// top-level arrays that way. Anything else yields an empty list.
    pub fn decode_list<T: DeserializeOwned>(&self) -> Vec<T> {
        let items = match self.parsed_json() {
            Some(Value::Array(items)) => items,
            Some(Value::Object(map)) if map.len() == 1 => match map.values().next() {
                Some(Value::Array(items)) => items,
                _ => return Vec::new(),
            },
            _ => return Vec::new(),
        };

        items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value(item.clone()) {
                Ok(decoded) => Some(decoded),
                Err(e) => {
                    warn!(engine = %self.engine, index, "Skipping list element that does not fit the expected shape: {e}");
                    None
                }
            })
            .collect()
    }
}
