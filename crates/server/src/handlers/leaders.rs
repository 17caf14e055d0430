//! # Leader Handlers

use super::{wrap_response, ApiResponse, AppError, AppState, DebugParams};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use civic_intel::intel::{
    leaders::{
        compare_leaders, discover_batch_leaders, discover_leader_profile,
        fetch_leader_legal_standing, search_leader_info, DiscoveredLeader, LeaderLegalStanding,
        LeaderProfile,
    },
    TextAnswer,
};
use serde::Deserialize;

// --- API Payloads ---

#[derive(Deserialize)]
pub struct LegalStandingParams {
    pub constituency: String,
}

#[derive(Deserialize)]
pub struct DiscoverRequest {
    #[serde(default)]
    pub excluded: Vec<String>,
}

#[derive(Deserialize)]
pub struct CompareRequest {
    pub first: String,
    pub second: String,
}

#[derive(Deserialize)]
pub struct LeaderSearchRequest {
    pub query: String,
}

// --- Handlers ---

pub async fn legal_standing_handler(
    State(app_state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<LegalStandingParams>,
    debug_params: Query<DebugParams>,
) -> Result<Json<ApiResponse<Option<LeaderLegalStanding>>>, AppError> {
    let standing =
        fetch_leader_legal_standing(&app_state.executor, &name, &params.constituency).await?;
    Ok(wrap_response(standing, debug_params, None))
}

pub async fn leader_profile_handler(
    State(app_state): State<AppState>,
    Path(name): Path<String>,
    debug_params: Query<DebugParams>,
) -> Result<Json<ApiResponse<Option<LeaderProfile>>>, AppError> {
    let profile = discover_leader_profile(&app_state.executor, &name).await?;
    Ok(wrap_response(profile, debug_params, None))
}

pub async fn discover_leaders_handler(
    State(app_state): State<AppState>,
    debug_params: Query<DebugParams>,
    Json(payload): Json<DiscoverRequest>,
) -> Result<Json<ApiResponse<Vec<DiscoveredLeader>>>, AppError> {
    let leaders = discover_batch_leaders(&app_state.executor, &payload.excluded).await?;
    Ok(wrap_response(leaders, debug_params, None))
}

pub async fn compare_leaders_handler(
    State(app_state): State<AppState>,
    debug_params: Query<DebugParams>,
    Json(payload): Json<CompareRequest>,
) -> Result<Json<ApiResponse<TextAnswer>>, AppError> {
    let answer = compare_leaders(&app_state.executor, &payload.first, &payload.second).await?;
    Ok(wrap_response(answer, debug_params, None))
}

pub async fn search_leaders_handler(
    State(app_state): State<AppState>,
    debug_params: Query<DebugParams>,
    Json(payload): Json<LeaderSearchRequest>,
) -> Result<Json<ApiResponse<TextAnswer>>, AppError> {
    let answer = search_leader_info(&app_state.executor, &payload.query).await?;
    Ok(wrap_response(answer, debug_params, None))
}
