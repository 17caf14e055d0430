//! # API Route Handlers
//!
//! This module organizes all the Axum route handlers for the `civic-intel-server`.
//! The handlers are split into sub-modules by feature area.

pub mod assistant;
pub mod general;
pub mod intel;
pub mod leaders;
pub mod location;

pub use assistant::*;
pub use general::*;
pub use intel::*;
pub use leaders::*;
pub use location::*;

// Shared items used by multiple handler modules.
use super::{
    errors::AppError,
    state::AppState,
    types::{ApiResponse, DebugParams},
};
use axum::{extract::Query, Json};
use civic_intel::Engine;
use serde_json::{json, Value};

/// Wraps a successful result in the standard `ApiResponse` format, including
/// debug information only if requested.
pub(crate) fn wrap_response<T>(
    result: T,
    debug_params: Query<DebugParams>,
    debug_info: Option<Value>,
) -> Json<ApiResponse<T>> {
    let debug = if debug_params.debug.unwrap_or(false) {
        debug_info
    } else {
        None
    };
    Json(ApiResponse { debug, result })
}

/// Debug payload naming the backend that served a request.
pub(crate) fn engine_debug(engine: Engine) -> Option<Value> {
    Some(json!({ "engine": engine.to_string() }))
}
