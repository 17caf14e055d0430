pub mod deepseek;
pub mod gemini;

use crate::{errors::IntelError, schema::Schema};
use async_trait::async_trait;
use dyn_clone::DynClone;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// The output mode requested from a chat-style provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    #[default]
    Text,
    JsonObject,
}

/// A trait for chat-style AI providers that take a system and a user prompt.
///
/// The fallback path uses this to turn search context into an answer.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Generates a response from a given system and user prompt.
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        format: ResponseFormat,
    ) -> Result<String, IntelError>;
}

dyn_clone::clone_trait_object!(AiProvider);

/// A live-retrieval tool the primary backend may use to ground its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundingTool {
    GoogleSearch,
    GoogleMaps,
}

/// A geographic point used to bias maps retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

/// A single request to a grounded generative backend.
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    pub contents: String,
    pub system_instruction: Option<String>,
    /// When set, the backend is asked for JSON output matching this schema.
    pub response_schema: Option<Schema>,
    pub tools: Vec<GroundingTool>,
    pub location: Option<LatLng>,
    /// Overrides the provider's default model for this request.
    pub model: Option<String>,
}

/// A reference attached to a grounded answer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GroundingSource {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// One retrieval record from the backend's grounding metadata.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GroundingChunk {
    #[serde(default)]
    pub web: Option<GroundingSource>,
    #[serde(default)]
    pub maps: Option<GroundingSource>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationResponse {
    pub text: String,
    pub grounding_chunks: Vec<GroundingChunk>,
}

/// A trait for generative backends that support schema-constrained output
/// and search or maps grounding.
#[async_trait]
pub trait GroundedAiProvider: Send + Sync + Debug + DynClone {
    async fn generate_content(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, IntelError>;
}

dyn_clone::clone_trait_object!(GroundedAiProvider);
