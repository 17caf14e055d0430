//! # Shared Constants
//!
//! Default endpoints and model names for the backends. Every value here can be
//! overridden through `ProvidersConfig`.

/// Base URL of the Gemini REST API. Model paths are appended to it.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// The model used for grounded and schema-constrained intelligence queries.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";

/// The model used for maps-grounded location lookups.
pub const DEFAULT_MAPS_MODEL: &str = "gemini-2.5-flash";

/// Endpoint of the Serper web search API.
pub const SERPER_API_URL: &str = "https://google.serper.dev/search";

/// Country hint sent with every fallback search.
pub const DEFAULT_SEARCH_COUNTRY: &str = "in";

/// Endpoint of the DeepSeek chat completions API.
pub const DEEPSEEK_API_URL: &str = "https://api.deepseek.com/v1/chat/completions";

/// The fallback chat model.
pub const DEFAULT_DEEPSEEK_MODEL: &str = "deepseek-chat";
