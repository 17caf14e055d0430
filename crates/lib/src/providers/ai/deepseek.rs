use crate::{
    errors::IntelError,
    providers::ai::{AiProvider, ResponseFormat},
};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use tracing::debug;

// --- OpenAI-compatible request and response structures ---

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    response_format: ResponseFormatPayload,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ResponseFormatPayload {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug)]
struct ChatChoice {
    message: ChatMessage,
}

// --- DeepSeek Provider implementation ---

/// A provider for the DeepSeek chat completions API, or any other
/// OpenAI-compatible endpoint that honours `response_format`.
#[derive(Clone, Debug)]
pub struct DeepSeekProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: String,
    model: String,
}

impl DeepSeekProvider {
    /// Creates a new `DeepSeekProvider`.
    pub fn new(api_url: String, api_key: String, model: String) -> Result<Self, IntelError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(IntelError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
            model,
        })
    }
}

#[async_trait]
impl AiProvider for DeepSeekProvider {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        format: ResponseFormat,
    ) -> Result<String, IntelError> {
        let messages = vec![
            ChatMessage {
                role: "system".to_string(),
                content: system_prompt.to_string(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: user_prompt.to_string(),
            },
        ];

        let request_body = ChatRequest {
            model: &self.model,
            messages,
            response_format: ResponseFormatPayload {
                kind: match format {
                    ResponseFormat::Text => "text",
                    ResponseFormat::JsonObject => "json_object",
                },
            },
        };

        debug!(model = %self.model, ?format, "--> Sending chat completion request");

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(IntelError::AiRequest)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(IntelError::AiApi(format!(
                "chat completion status {status}: {error_text}"
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(IntelError::AiDeserialization)?;

        chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| IntelError::AiApi("chat completion returned no choices".to_string()))
    }
}
