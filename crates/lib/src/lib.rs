//! # Civic Intelligence
//!
//! This crate answers civic and political questions with generative AI. Every
//! feature goes through the `GroundedQueryExecutor`, which asks a primary
//! backend for schema-constrained, optionally search-grounded JSON and, for
//! grounded requests, falls back to web search plus a second LLM when the
//! primary fails. Both paths return the same `QueryResult` with citations.

pub mod citations;
pub mod config;
pub mod constants;
pub mod errors;
pub mod executor;
pub mod intel;
pub mod normalize;
pub mod prompts;
pub mod providers;
pub mod schema;
pub mod types;

pub use config::ProvidersConfig;
pub use errors::IntelError;
pub use executor::{GroundedQueryExecutor, GroundedQueryExecutorBuilder};
pub use schema::Schema;
pub use types::{Citation, Engine, QueryRequest, QueryResult, StructuredOutput};
