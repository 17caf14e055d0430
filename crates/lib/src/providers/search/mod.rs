pub mod serper;

use crate::errors::IntelError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// One ranked, non-sponsored result from a web search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganicResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub link: String,
}

/// A trait for web search engines used to gather context for the fallback path.
#[async_trait]
pub trait SearchProvider: Send + Sync + Debug + DynClone {
    /// Runs `query` and returns the organic results in rank order.
    async fn search(&self, query: &str) -> Result<Vec<OrganicResult>, IntelError>;
}

dyn_clone::clone_trait_object!(SearchProvider);
