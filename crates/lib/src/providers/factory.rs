//! # Provider Factory
//!
//! Builds the concrete backend providers and the executor from a
//! `ProvidersConfig`. Placing this in the library lets every consumer
//! (server, cli) wire the executor the same way.

use crate::{
    config::ProvidersConfig,
    errors::IntelError,
    executor::GroundedQueryExecutor,
    providers::{
        ai::{deepseek::DeepSeekProvider, gemini::GeminiProvider},
        search::serper::SerperProvider,
    },
};
use tracing::{info, warn};

/// Creates a `GroundedQueryExecutor` backed by Gemini, Serper and DeepSeek.
///
/// Missing API keys are not rejected here; they fail when a request is made.
pub fn build_executor(config: &ProvidersConfig) -> Result<GroundedQueryExecutor, IntelError> {
    for (name, key) in [
        ("primary", &config.primary.api_key),
        ("search", &config.search.api_key),
        ("fallback", &config.fallback.api_key),
    ] {
        if key.is_empty() {
            warn!("No API key configured for the {name} backend; its requests will fail.");
        }
    }

    info!(
        model = %config.primary.model_name,
        fallback_model = %config.fallback.model_name,
        "Configuring grounded query executor."
    );

    let primary = GeminiProvider::new(
        config.primary.api_base.clone(),
        config.primary.api_key.clone(),
        config.primary.model_name.clone(),
    )?;
    let search = SerperProvider::new(
        config.search.api_url.clone(),
        config.search.api_key.clone(),
        config.search.country.clone(),
    )?;
    let fallback = DeepSeekProvider::new(
        config.fallback.api_url.clone(),
        config.fallback.api_key.clone(),
        config.fallback.model_name.clone(),
    )?;

    GroundedQueryExecutor::builder()
        .primary(Box::new(primary))
        .search(Box::new(search))
        .fallback(Box::new(fallback))
        .maps_model(config.primary.maps_model_name.clone())
        .build()
}
