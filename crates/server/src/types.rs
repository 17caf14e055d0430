use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `?debug=true` asks a handler to include which backend served the request.
#[derive(Debug, Deserialize, Default)]
pub struct DebugParams {
    pub debug: Option<bool>,
}

/// The envelope every JSON endpoint responds with.
#[derive(Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<Value>,
    pub result: T,
}
