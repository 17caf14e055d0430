//! # General Route Handlers
//!
//! The root, health check and the raw `/query` endpoint that exposes the
//! grounded-query executor directly.

use super::{engine_debug, wrap_response, ApiResponse, AppError, AppState, DebugParams};
use axum::{
    extract::{Query, State},
    Json,
};
use civic_intel::{QueryRequest, QueryResult};
use tracing::info;

/// The handler for the root (`/`) endpoint.
pub async fn root() -> &'static str {
    "civic-intel server is running."
}

/// The handler for the health check (`/health`) endpoint.
pub async fn health_check() -> &'static str {
    "OK"
}

/// Runs one query through the executor and returns the normalized result.
pub async fn query_handler(
    State(app_state): State<AppState>,
    debug_params: Query<DebugParams>,
    Json(payload): Json<QueryRequest>,
) -> Result<Json<ApiResponse<QueryResult>>, AppError> {
    info!(
        grounded = payload.use_grounded_search,
        structured = payload.schema.is_some(),
        "Received query: '{}'",
        payload.prompt
    );
    let result = app_state.executor.execute(&payload).await?;
    let debug_info = engine_debug(result.engine);
    Ok(wrap_response(result, debug_params, debug_info))
}
