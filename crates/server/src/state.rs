//! # Application State
//!
//! The shared state handed to every request handler: the loaded configuration
//! and one executor whose provider clients are reused across requests.

use crate::config::AppConfig;
use civic_intel::{providers::factory::build_executor, GroundedQueryExecutor};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub executor: Arc<GroundedQueryExecutor>,
}

/// Builds the shared application state from the configuration.
pub fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let executor = build_executor(&config.providers)?;
    Ok(AppState {
        config: Arc::new(config),
        executor: Arc::new(executor),
    })
}
