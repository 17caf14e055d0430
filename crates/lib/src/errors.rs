use thiserror::Error;

/// Custom error types for the civic intelligence library.
#[derive(Error, Debug)]
pub enum IntelError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to AI provider: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize AI provider response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("AI provider returned an error: {0}")]
    AiApi(String),
    #[error("Failed to send request to search provider: {0}")]
    SearchRequest(reqwest::Error),
    #[error("Failed to deserialize search provider response: {0}")]
    SearchDeserialization(reqwest::Error),
    #[error("Search provider returned an error: {0}")]
    SearchApi(String),
    #[error("Prompt must not be empty")]
    EmptyPrompt,
    #[error("Invalid response schema: {0}")]
    InvalidSchema(String),
    #[error("Executor is missing a provider: {0}")]
    MissingProvider(String),
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
    #[error("Fallback failed after primary error ({primary}): {source}")]
    FallbackFailed {
        primary: String,
        #[source]
        source: Box<IntelError>,
    },
}

impl IntelError {
    /// Returns `true` when the failure originated at an upstream backend
    /// rather than in the caller's input or the local configuration.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            IntelError::AiRequest(_)
                | IntelError::AiDeserialization(_)
                | IntelError::AiApi(_)
                | IntelError::SearchRequest(_)
                | IntelError::SearchDeserialization(_)
                | IntelError::SearchApi(_)
                | IntelError::FallbackFailed { .. }
        )
    }
}
