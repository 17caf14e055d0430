//! # The Grounded-Query Executor
//!
//! This module defines the `GroundedQueryExecutor`, the single entry point every
//! intelligence feature goes through. It sends a prompt to the primary backend,
//! optionally with a response schema and search grounding, and for grounded
//! requests hands off to a search-plus-LLM fallback when the primary fails.
//! Both paths are normalized into the same `QueryResult`.
//!
//! Each call is independent: the executor keeps no mutable state, so one
//! instance can serve any number of concurrent calls.

use crate::{
    citations,
    errors::IntelError,
    normalize::{build_search_context, parse_structured},
    prompts::fallback::{fallback_system_prompt, fallback_user_prompt},
    providers::{
        ai::{
            AiProvider, GenerationRequest, GroundedAiProvider, GroundingTool, LatLng,
            ResponseFormat,
        },
        search::SearchProvider,
    },
    types::{Citation, Engine, QueryRequest, QueryResult, StructuredOutput},
};
use tracing::{debug, info, warn};

/// Executes prompts against the primary backend with a grounded fallback.
#[derive(Clone, Debug)]
pub struct GroundedQueryExecutor {
    primary: Box<dyn GroundedAiProvider>,
    search: Box<dyn SearchProvider>,
    fallback: Box<dyn AiProvider>,
    maps_model: Option<String>,
}

impl GroundedQueryExecutor {
    pub fn builder() -> GroundedQueryExecutorBuilder {
        GroundedQueryExecutorBuilder::default()
    }

    /// Runs one query.
    ///
    /// A primary failure is only masked by the fallback when
    /// `use_grounded_search` is set; otherwise it is returned as is. No
    /// backend is ever tried twice.
    pub async fn execute(&self, request: &QueryRequest) -> Result<QueryResult, IntelError> {
        if request.prompt.trim().is_empty() {
            return Err(IntelError::EmptyPrompt);
        }
        if let Some(schema) = &request.schema {
            schema.validate()?;
        }

        info!(
            grounded = request.use_grounded_search,
            structured = request.schema.is_some(),
            "[execute] Attempting primary backend."
        );

        match self.execute_primary(request).await {
            Ok(result) => Ok(result),
            Err(primary_error) if request.use_grounded_search => {
                warn!("[execute] Primary backend failed, attempting fallback: {primary_error}");
                self.execute_fallback(request)
                    .await
                    .map_err(|e| IntelError::FallbackFailed {
                        primary: primary_error.to_string(),
                        source: Box::new(e),
                    })
            }
            Err(primary_error) => Err(primary_error),
        }
    }

    async fn execute_primary(&self, request: &QueryRequest) -> Result<QueryResult, IntelError> {
        let generation = GenerationRequest {
            contents: request.prompt.clone(),
            response_schema: request.schema.clone(),
            tools: if request.use_grounded_search {
                vec![GroundingTool::GoogleSearch]
            } else {
                Vec::new()
            },
            ..Default::default()
        };

        let response = self.primary.generate_content(&generation).await?;
        debug!("<-- Primary answer: {}", response.text);

        let sources = if request.use_grounded_search {
            citations::from_grounding_chunks(&response.grounding_chunks)
        } else {
            Vec::new()
        };

        Ok(Self::normalize(
            request,
            response.text,
            sources,
            Engine::Primary,
        ))
    }

    async fn execute_fallback(&self, request: &QueryRequest) -> Result<QueryResult, IntelError> {
        let results = self.search.search(&request.prompt).await?;
        info!(results = results.len(), "[execute_fallback] Search completed.");

        let context = build_search_context(&results);
        let sources = citations::from_organic_results(&results);

        let schema_json = request
            .schema
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;
        let system_prompt = fallback_system_prompt(schema_json.as_deref());
        let user_prompt = fallback_user_prompt(&context, &request.prompt);
        // JSON mode only emits objects; array answers come back wrapped in a
        // single-field object, which `QueryResult::decode_list` unwraps.
        let format = if request.schema.is_some() {
            ResponseFormat::JsonObject
        } else {
            ResponseFormat::Text
        };

        debug!(system_prompt = %system_prompt, user_prompt = %user_prompt, "--> Sending prompts to fallback provider");
        let text = self
            .fallback
            .generate(&system_prompt, &user_prompt, format)
            .await?;
        debug!("<-- Fallback answer: {text}");

        Ok(Self::normalize(request, text, sources, Engine::Fallback))
    }

    fn normalize(
        request: &QueryRequest,
        raw_text: String,
        sources: Vec<Citation>,
        engine: Engine,
    ) -> QueryResult {
        let structured = if request.schema.is_some() {
            parse_structured(&raw_text)
        } else {
            StructuredOutput::NotRequested
        };
        QueryResult {
            raw_text,
            structured,
            sources,
            engine,
        }
    }

    /// Runs a maps-grounded lookup on the primary backend.
    ///
    /// There is no fallback for maps retrieval. Map places without a title are
    /// cited as `default_title`.
    pub async fn generate_with_maps(
        &self,
        prompt: &str,
        location: Option<LatLng>,
        default_title: &str,
    ) -> Result<QueryResult, IntelError> {
        if prompt.trim().is_empty() {
            return Err(IntelError::EmptyPrompt);
        }
        let generation = GenerationRequest {
            contents: prompt.to_string(),
            tools: vec![GroundingTool::GoogleMaps],
            location,
            model: self.maps_model.clone(),
            ..Default::default()
        };
        info!(located = location.is_some(), "[generate_with_maps] Sending maps lookup.");

        let response = self.primary.generate_content(&generation).await?;
        let sources = citations::from_map_chunks(&response.grounding_chunks, default_title);
        Ok(QueryResult {
            raw_text: response.text,
            structured: StructuredOutput::NotRequested,
            sources,
            engine: Engine::Primary,
        })
    }

    /// Sends a single chat turn with a system instruction to the primary backend.
    /// Failures propagate.
    pub async fn converse(
        &self,
        system_instruction: &str,
        message: &str,
    ) -> Result<String, IntelError> {
        if message.trim().is_empty() {
            return Err(IntelError::EmptyPrompt);
        }
        let generation = GenerationRequest {
            contents: message.to_string(),
            system_instruction: Some(system_instruction.to_string()),
            ..Default::default()
        };
        let response = self.primary.generate_content(&generation).await?;
        Ok(response.text)
    }
}

/// A builder for `GroundedQueryExecutor`. All three providers are required.
#[derive(Default)]
pub struct GroundedQueryExecutorBuilder {
    primary: Option<Box<dyn GroundedAiProvider>>,
    search: Option<Box<dyn SearchProvider>>,
    fallback: Option<Box<dyn AiProvider>>,
    maps_model: Option<String>,
}

impl GroundedQueryExecutorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primary(mut self, provider: Box<dyn GroundedAiProvider>) -> Self {
        self.primary = Some(provider);
        self
    }

    pub fn search(mut self, provider: Box<dyn SearchProvider>) -> Self {
        self.search = Some(provider);
        self
    }

    pub fn fallback(mut self, provider: Box<dyn AiProvider>) -> Self {
        self.fallback = Some(provider);
        self
    }

    /// Sets the model used for maps-grounded lookups. Without it the primary
    /// provider's default model is used.
    pub fn maps_model(mut self, model: impl Into<String>) -> Self {
        self.maps_model = Some(model.into());
        self
    }

    pub fn build(self) -> Result<GroundedQueryExecutor, IntelError> {
        Ok(GroundedQueryExecutor {
            primary: self
                .primary
                .ok_or_else(|| IntelError::MissingProvider("primary".to_string()))?,
            search: self
                .search
                .ok_or_else(|| IntelError::MissingProvider("search".to_string()))?,
            fallback: self
                .fallback
                .ok_or_else(|| IntelError::MissingProvider("fallback".to_string()))?,
            maps_model: self.maps_model,
        })
    }
}
