use super::{wrap_response, ApiResponse, AppState, DebugParams};
use axum::{
    extract::{Query, State},
    Json,
};
use civic_intel::intel::assistant::{reply, DEFAULT_LANGUAGE};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct AssistantRequest {
    pub user: String,
    pub language: Option<String>,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct AssistantResponse {
    pub reply: String,
}

/// One civic assistant turn. Backend failures become an apology reply.
pub async fn assistant_handler(
    State(app_state): State<AppState>,
    debug_params: Query<DebugParams>,
    Json(payload): Json<AssistantRequest>,
) -> Json<ApiResponse<AssistantResponse>> {
    let language = payload.language.as_deref().unwrap_or(DEFAULT_LANGUAGE);
    let text = reply(&app_state.executor, &payload.user, language, &payload.message).await;
    wrap_response(AssistantResponse { reply: text }, debug_params, None)
}
