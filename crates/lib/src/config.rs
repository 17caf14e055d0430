//! # Provider Configuration
//!
//! Credentials and endpoints for the three backends. Consumers (server, cli)
//! load this from their own configuration sources and hand it to
//! `providers::factory::build_executor`; the library never reads the
//! environment itself.

use crate::constants::{
    DEEPSEEK_API_URL, DEFAULT_DEEPSEEK_MODEL, DEFAULT_GEMINI_MODEL, DEFAULT_MAPS_MODEL,
    DEFAULT_SEARCH_COUNTRY, GEMINI_API_BASE, SERPER_API_URL,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub primary: PrimaryConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub fallback: FallbackLlmConfig,
}

/// The primary, grounding-capable backend (Gemini).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryConfig {
    /// An empty key is accepted and surfaces as a request failure at call time.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_gemini_api_base")]
    pub api_base: String,
    #[serde(default = "default_gemini_model")]
    pub model_name: String,
    #[serde(default = "default_maps_model")]
    pub maps_model_name: String,
}

impl Default for PrimaryConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: default_gemini_api_base(),
            model_name: default_gemini_model(),
            maps_model_name: default_maps_model(),
        }
    }
}

/// The fallback web search engine (Serper).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_serper_url")]
    pub api_url: String,
    #[serde(default = "default_search_country")]
    pub country: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_serper_url(),
            country: default_search_country(),
        }
    }
}

/// The fallback chat model (DeepSeek).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackLlmConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_deepseek_url")]
    pub api_url: String,
    #[serde(default = "default_deepseek_model")]
    pub model_name: String,
}

impl Default for FallbackLlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_deepseek_url(),
            model_name: default_deepseek_model(),
        }
    }
}

fn default_gemini_api_base() -> String {
    GEMINI_API_BASE.to_string()
}

fn default_gemini_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

fn default_maps_model() -> String {
    DEFAULT_MAPS_MODEL.to_string()
}

fn default_serper_url() -> String {
    SERPER_API_URL.to_string()
}

fn default_search_country() -> String {
    DEFAULT_SEARCH_COUNTRY.to_string()
}

fn default_deepseek_url() -> String {
    DEEPSEEK_API_URL.to_string()
}

fn default_deepseek_model() -> String {
    DEFAULT_DEEPSEEK_MODEL.to_string()
}
