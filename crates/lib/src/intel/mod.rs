//! # Intelligence Features
//!
//! Thin callers of the `GroundedQueryExecutor`. Each feature owns a prompt and
//! a response schema, and decodes the normalized result into typed models that
//! serialize in camelCase for the dashboard.

pub mod assistant;
pub mod dashboard;
pub mod election;
pub mod events;
pub mod governance;
pub mod leaders;
pub mod maps;
pub mod notifications;
pub mod promises;

use crate::types::{Citation, Engine, QueryResult};
use serde::{Deserialize, Serialize};

/// Typed feature data together with the citations that support it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntelReport<T> {
    pub data: T,
    pub sources: Vec<Citation>,
    pub engine: Engine,
}

impl<T> IntelReport<T> {
    pub(crate) fn from_result(data: T, result: QueryResult) -> Self {
        Self {
            data,
            sources: result.sources,
            engine: result.engine,
        }
    }
}

/// A free-text grounded answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnswer {
    pub text: String,
    pub sources: Vec<Citation>,
}

impl From<QueryResult> for TextAnswer {
    fn from(result: QueryResult) -> Self {
        Self {
            text: result.raw_text,
            sources: result.sources,
        }
    }
}
