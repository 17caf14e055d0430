use crate::{
    errors::IntelError,
    providers::ai::{
        GenerationRequest, GenerationResponse, GroundedAiProvider, GroundingChunk, GroundingTool,
        LatLng,
    },
    schema::Schema,
};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use tracing::debug;

// --- Gemini-specific request and response structures ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_config: Option<ToolConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
enum Tool {
    GoogleSearch {},
    GoogleMaps {},
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolConfig {
    retrieval_config: RetrievalConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RetrievalConfig {
    lat_lng: LatLng,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a Schema,
}

#[derive(Deserialize, Debug)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<ContentResponse>,
    #[serde(default)]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Deserialize, Debug)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize, Debug)]
struct PartResponse {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

// --- Gemini Provider implementation ---

/// A provider for interacting with the Google Gemini `generateContent` API.
#[derive(Clone, Debug)]
pub struct GeminiProvider {
    client: ReqwestClient,
    api_base: String,
    api_key: String,
    model: String,
}

impl GeminiProvider {
    /// Creates a new `GeminiProvider`.
    ///
    /// `api_base` is the versioned API root (e.g. `.../v1beta`); the model path
    /// is appended per request so one provider can serve several models.
    pub fn new(api_base: String, api_key: String, model: String) -> Result<Self, IntelError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(IntelError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key,
            model,
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{model}:generateContent", self.api_base)
    }
}

#[async_trait]
impl GroundedAiProvider for GeminiProvider {
    async fn generate_content(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, IntelError> {
        let tools = request
            .tools
            .iter()
            .map(|tool| match tool {
                GroundingTool::GoogleSearch => Tool::GoogleSearch {},
                GroundingTool::GoogleMaps => Tool::GoogleMaps {},
            })
            .collect();

        let request_body = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: &request.contents,
                }],
            }],
            system_instruction: request.system_instruction.as_deref().map(|text| Content {
                parts: vec![Part { text }],
            }),
            tools,
            tool_config: request.location.map(|lat_lng| ToolConfig {
                retrieval_config: RetrievalConfig { lat_lng },
            }),
            generation_config: request
                .response_schema
                .as_ref()
                .map(|schema| GenerationConfig {
                    response_mime_type: "application/json",
                    response_schema: schema,
                }),
        };

        let model = request.model.as_deref().unwrap_or(&self.model);
        debug!(model, "--> Sending generateContent request to Gemini");

        let response = self
            .client
            .post(self.endpoint(model))
            .query(&[("key", &self.api_key)])
            .json(&request_body)
            .send()
            .await
            .map_err(IntelError::AiRequest)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(IntelError::AiApi(format!("Gemini status {status}: {error_text}")));
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(IntelError::AiDeserialization)?;

        let Some(candidate) = gemini_response.candidates.into_iter().next() else {
            return Ok(GenerationResponse::default());
        };

        let text = candidate
            .content
            .map(|c| {
                c.parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        let grounding_chunks = candidate
            .grounding_metadata
            .map(|m| m.grounding_chunks)
            .unwrap_or_default();

        debug!(chunks = grounding_chunks.len(), "<-- Gemini response received");

        Ok(GenerationResponse {
            text,
            grounding_chunks,
        })
    }
}
