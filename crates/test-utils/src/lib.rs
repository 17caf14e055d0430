//! # Test Utilities
//!
//! Scriptable in-memory stand-ins for the three backends the executor talks to.
//! Each mock answers from a queue of programmed outcomes and records every
//! call it receives for later assertions.

use async_trait::async_trait;
use civic_intel::errors::IntelError;
use civic_intel::providers::ai::{
    AiProvider, GenerationRequest, GenerationResponse, GroundedAiProvider, GroundingChunk,
    GroundingSource, ResponseFormat,
};
use civic_intel::providers::search::{OrganicResult, SearchProvider};
use civic_intel::GroundedQueryExecutor;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, Once};

static INIT: Once = Once::new();

/// Initializes the tracing subscriber once per test binary.
pub fn setup_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

type Scripted<T> = Arc<Mutex<VecDeque<Result<T, String>>>>;

fn next_outcome<T>(queue: &Scripted<T>, who: &str) -> Result<T, String> {
    queue
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| Err(format!("{who}: no response programmed")))
}

// --- Mock Primary Provider ---

#[derive(Clone, Debug, Default)]
pub struct MockGroundedProvider {
    responses: Scripted<GenerationResponse>,
    requests: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl MockGroundedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a plain text answer without grounding metadata.
    pub fn push_text(&self, text: &str) -> &Self {
        self.push_response(GenerationResponse {
            text: text.to_string(),
            grounding_chunks: Vec::new(),
        })
    }

    pub fn push_response(&self, response: GenerationResponse) -> &Self {
        self.responses.lock().unwrap().push_back(Ok(response));
        self
    }

    /// Queues a failure; it surfaces as `IntelError::AiApi`.
    pub fn push_error(&self, message: &str) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GroundedAiProvider for MockGroundedProvider {
    async fn generate_content(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, IntelError> {
        self.requests.lock().unwrap().push(request.clone());
        next_outcome(&self.responses, "MockGroundedProvider").map_err(IntelError::AiApi)
    }
}

/// A web grounding chunk with the given title and URI.
pub fn web_chunk(title: Option<&str>, uri: Option<&str>) -> GroundingChunk {
    GroundingChunk {
        web: Some(GroundingSource {
            title: title.map(String::from),
            uri: uri.map(String::from),
        }),
        maps: None,
    }
}

/// A maps grounding chunk with the given title and URI.
pub fn map_chunk(title: Option<&str>, uri: Option<&str>) -> GroundingChunk {
    GroundingChunk {
        web: None,
        maps: Some(GroundingSource {
            title: title.map(String::from),
            uri: uri.map(String::from),
        }),
    }
}

// --- Mock Search Provider ---

#[derive(Clone, Debug, Default)]
pub struct MockSearchProvider {
    responses: Scripted<Vec<OrganicResult>>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl MockSearchProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_results(&self, results: Vec<OrganicResult>) -> &Self {
        self.responses.lock().unwrap().push_back(Ok(results));
        self
    }

    /// Queues a failure; it surfaces as `IntelError::SearchApi`.
    pub fn push_error(&self, message: &str) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchProvider for MockSearchProvider {
    async fn search(&self, query: &str) -> Result<Vec<OrganicResult>, IntelError> {
        self.queries.lock().unwrap().push(query.to_string());
        next_outcome(&self.responses, "MockSearchProvider").map_err(IntelError::SearchApi)
    }
}

pub fn organic(title: &str, snippet: &str, link: &str) -> OrganicResult {
    OrganicResult {
        title: title.to_string(),
        snippet: snippet.to_string(),
        link: link.to_string(),
    }
}

// --- Mock Fallback AI Provider ---

/// A recorded call to [`MockAiProvider`].
#[derive(Clone, Debug, PartialEq)]
pub struct AiCall {
    pub system_prompt: String,
    pub user_prompt: String,
    pub format: ResponseFormat,
}

#[derive(Clone, Debug, Default)]
pub struct MockAiProvider {
    responses: Scripted<String>,
    calls: Arc<Mutex<Vec<AiCall>>>,
}

impl MockAiProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_text(&self, text: &str) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(text.to_string()));
        self
    }

    /// Queues a failure; it surfaces as `IntelError::AiApi`.
    pub fn push_error(&self, message: &str) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<AiCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        format: ResponseFormat,
    ) -> Result<String, IntelError> {
        self.calls.lock().unwrap().push(AiCall {
            system_prompt: system_prompt.to_string(),
            user_prompt: user_prompt.to_string(),
            format,
        });
        next_outcome(&self.responses, "MockAiProvider").map_err(IntelError::AiApi)
    }
}

// --- Executor Harness ---

/// The three mocks wired into one executor. The mocks share their queues
/// with the executor's copies, so programming them after `new` still works.
pub struct MockBackends {
    pub primary: MockGroundedProvider,
    pub search: MockSearchProvider,
    pub fallback: MockAiProvider,
    pub executor: GroundedQueryExecutor,
}

impl MockBackends {
    pub fn new() -> anyhow::Result<Self> {
        let primary = MockGroundedProvider::new();
        let search = MockSearchProvider::new();
        let fallback = MockAiProvider::new();
        let executor = GroundedQueryExecutor::builder()
            .primary(Box::new(primary.clone()))
            .search(Box::new(search.clone()))
            .fallback(Box::new(fallback.clone()))
            .maps_model("mock-maps-model")
            .build()?;
        Ok(Self {
            primary,
            search,
            fallback,
            executor,
        })
    }
}
