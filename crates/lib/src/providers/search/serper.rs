use crate::{
    errors::IntelError,
    providers::search::{OrganicResult, SearchProvider},
};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Serialize)]
struct SerperRequest<'a> {
    q: &'a str,
    gl: &'a str,
}

#[derive(Deserialize, Debug)]
struct SerperResponse {
    #[serde(default)]
    organic: Vec<OrganicResult>,
}

/// A provider for the Serper Google search API.
#[derive(Clone, Debug)]
pub struct SerperProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: String,
    country: String,
}

impl SerperProvider {
    /// Creates a new `SerperProvider`. `country` is sent as the `gl` locale hint.
    pub fn new(api_url: String, api_key: String, country: String) -> Result<Self, IntelError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(IntelError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
            country,
        })
    }
}

#[async_trait]
impl SearchProvider for SerperProvider {
    async fn search(&self, query: &str) -> Result<Vec<OrganicResult>, IntelError> {
        debug!(country = %self.country, "--> Sending search request to Serper");

        let response = self
            .client
            .post(&self.api_url)
            .header("X-API-KEY", &self.api_key)
            .json(&SerperRequest {
                q: query,
                gl: &self.country,
            })
            .send()
            .await
            .map_err(IntelError::SearchRequest)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(IntelError::SearchApi(format!(
                "Serper status {status}: {error_text}"
            )));
        }

        let serper_response: SerperResponse = response
            .json()
            .await
            .map_err(IntelError::SearchDeserialization)?;

        debug!(results = serper_response.organic.len(), "<-- Serper results received");
        Ok(serper_response.organic)
    }
}
