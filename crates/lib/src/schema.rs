//! # Response Schema Descriptors
//!
//! A declarative description of the JSON shape a caller expects back from a
//! generative backend. The serialized form is the `responseSchema` accepted by
//! the Gemini API, and the same string is embedded into the fallback system
//! instruction so both backends are asked for the same shape.

use crate::errors::IntelError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A node in a response schema tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Schema {
    Object {
        properties: BTreeMap<String, Schema>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        required: Option<Vec<String>>,
    },
    Array {
        items: Box<Schema>,
    },
    String {
        #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
        values: Option<Vec<String>>,
    },
    Number,
    Integer,
    Boolean,
}

impl Schema {
    /// Creates an object node. `required` must only name declared properties.
    pub fn object<I, K>(properties: I, required: &[&str]) -> Self
    where
        I: IntoIterator<Item = (K, Schema)>,
        K: Into<String>,
    {
        Schema::Object {
            properties: properties
                .into_iter()
                .map(|(name, schema)| (name.into(), schema))
                .collect(),
            required: Some(required.iter().map(|name| name.to_string()).collect()),
        }
    }

    pub fn array(items: Schema) -> Self {
        Schema::Array {
            items: Box::new(items),
        }
    }

    pub fn string() -> Self {
        Schema::String { values: None }
    }

    /// A string restricted to one of the given values.
    pub fn string_enum(values: &[&str]) -> Self {
        Schema::String {
            values: Some(values.iter().map(|v| v.to_string()).collect()),
        }
    }

    pub fn number() -> Self {
        Schema::Number
    }

    pub fn integer() -> Self {
        Schema::Integer
    }

    pub fn boolean() -> Self {
        Schema::Boolean
    }

    /// Checks that every object node declares its required fields and that
    /// each required field is one of its properties.
    pub fn validate(&self) -> Result<(), IntelError> {
        self.validate_at("$")
    }

    fn validate_at(&self, path: &str) -> Result<(), IntelError> {
        match self {
            Schema::Object {
                properties,
                required,
            } => {
                let required = match required {
                    Some(required) => required,
                    None if properties.is_empty() => return Ok(()),
                    None => {
                        return Err(IntelError::InvalidSchema(format!(
                            "object at `{path}` does not declare its required fields"
                        )))
                    }
                };
                if let Some(missing) = required.iter().find(|r| !properties.contains_key(*r)) {
                    return Err(IntelError::InvalidSchema(format!(
                        "object at `{path}` requires undeclared property `{missing}`"
                    )));
                }
                for (name, child) in properties {
                    child.validate_at(&format!("{path}.{name}"))?;
                }
                Ok(())
            }
            Schema::Array { items } => items.validate_at(&format!("{path}[]")),
            Schema::String {
                values: Some(values),
            } if values.is_empty() => Err(IntelError::InvalidSchema(format!(
                "string enum at `{path}` has no values"
            ))),
            _ => Ok(()),
        }
    }

    /// The canonical JSON form of the schema.
    pub fn to_json(&self) -> Result<Value, IntelError> {
        Ok(serde_json::to_value(self)?)
    }
}
