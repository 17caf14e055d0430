//! # Intelligence Feed Handlers
//!
//! Elections, governance briefings, the dashboard, notifications, promises
//! and live events.

use super::{engine_debug, wrap_response, ApiResponse, AppError, AppState, DebugParams};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use civic_intel::intel::{
    dashboard::{load_dashboard, DashboardBriefing},
    election::{fetch_election_intelligence, ElectionIntelligence},
    events::{fetch_live_events, LiveEvent},
    governance::{fetch_national_intelligence, fetch_state_intelligence, NationalIntel, StateIntel},
    notifications::{fetch_civic_notifications, CivicNotification, NotificationContext},
    promises::{fetch_and_verify_promises, VerifiedPromise},
    IntelReport,
};
use serde::Deserialize;
use tracing::info;

// --- API Payloads ---

#[derive(Deserialize)]
pub struct DashboardParams {
    pub user: Option<String>,
    pub state: Option<String>,
}

#[derive(Deserialize)]
pub struct NotificationParams {
    pub state: Option<String>,
    /// Comma-separated names of followed leaders.
    pub leaders: Option<String>,
}

#[derive(Deserialize)]
pub struct PromiseParams {
    pub query: Option<String>,
}

// --- Handlers ---

pub async fn elections_handler(
    State(app_state): State<AppState>,
    debug_params: Query<DebugParams>,
) -> Result<Json<ApiResponse<IntelReport<Option<ElectionIntelligence>>>>, AppError> {
    let report = fetch_election_intelligence(&app_state.executor).await?;
    let debug_info = engine_debug(report.engine);
    Ok(wrap_response(report, debug_params, debug_info))
}

pub async fn national_handler(
    State(app_state): State<AppState>,
    debug_params: Query<DebugParams>,
) -> Result<Json<ApiResponse<IntelReport<Option<NationalIntel>>>>, AppError> {
    let report = fetch_national_intelligence(&app_state.executor).await?;
    let debug_info = engine_debug(report.engine);
    Ok(wrap_response(report, debug_params, debug_info))
}

pub async fn state_handler(
    State(app_state): State<AppState>,
    Path(state): Path<String>,
    debug_params: Query<DebugParams>,
) -> Result<Json<ApiResponse<IntelReport<Option<StateIntel>>>>, AppError> {
    let report = fetch_state_intelligence(&app_state.executor, &state).await?;
    let debug_info = engine_debug(report.engine);
    Ok(wrap_response(report, debug_params, debug_info))
}

/// Loads the dashboard panels concurrently. Panels that fail are `null`.
pub async fn dashboard_handler(
    State(app_state): State<AppState>,
    Query(params): Query<DashboardParams>,
    debug_params: Query<DebugParams>,
) -> Json<ApiResponse<DashboardBriefing>> {
    let user = params.user.as_deref().unwrap_or("Citizen");
    info!(state = ?params.state, "Loading dashboard.");
    let briefing = load_dashboard(&app_state.executor, user, params.state.as_deref()).await;
    wrap_response(briefing, debug_params, None)
}

pub async fn notifications_handler(
    State(app_state): State<AppState>,
    Query(params): Query<NotificationParams>,
    debug_params: Query<DebugParams>,
) -> Result<Json<ApiResponse<Vec<CivicNotification>>>, AppError> {
    let context = NotificationContext {
        state: params.state,
        followed_leaders: params
            .leaders
            .map(|leaders| {
                leaders
                    .split(',')
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default(),
    };
    let notifications = fetch_civic_notifications(&app_state.executor, &context).await?;
    Ok(wrap_response(notifications, debug_params, None))
}

pub async fn promises_handler(
    State(app_state): State<AppState>,
    Query(params): Query<PromiseParams>,
    debug_params: Query<DebugParams>,
) -> Result<Json<ApiResponse<IntelReport<Vec<VerifiedPromise>>>>, AppError> {
    let report = fetch_and_verify_promises(&app_state.executor, params.query.as_deref()).await?;
    let debug_info = engine_debug(report.engine);
    Ok(wrap_response(report, debug_params, debug_info))
}

pub async fn live_events_handler(
    State(app_state): State<AppState>,
    debug_params: Query<DebugParams>,
) -> Result<Json<ApiResponse<IntelReport<Vec<LiveEvent>>>>, AppError> {
    let report = fetch_live_events(&app_state.executor).await?;
    let debug_info = engine_debug(report.engine);
    Ok(wrap_response(report, debug_params, debug_info))
}
