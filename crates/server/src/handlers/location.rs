//! # Maps Handlers
//!
//! Maps lookups degrade to placeholder answers instead of failing, so these
//! handlers always return `200 OK`.

use super::{wrap_response, ApiResponse, AppState, DebugParams};
use axum::{
    extract::{Query, State},
    Json,
};
use civic_intel::{
    intel::maps::{find_nearby_civic_services, search_place, NearbyService, PlaceLookup},
    providers::ai::LatLng,
};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct PlaceSearchRequest {
    pub query: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Deserialize)]
pub struct NearbyRequest {
    pub latitude: f64,
    pub longitude: f64,
}

/// A location bias is only applied when both coordinates are given.
pub async fn place_search_handler(
    State(app_state): State<AppState>,
    debug_params: Query<DebugParams>,
    Json(payload): Json<PlaceSearchRequest>,
) -> Json<ApiResponse<PlaceLookup>> {
    let location = match (payload.latitude, payload.longitude) {
        (Some(latitude), Some(longitude)) => Some(LatLng {
            latitude,
            longitude,
        }),
        _ => None,
    };
    let lookup = search_place(&app_state.executor, &payload.query, location).await;
    wrap_response(lookup, debug_params, None)
}

pub async fn nearby_services_handler(
    State(app_state): State<AppState>,
    debug_params: Query<DebugParams>,
    Json(payload): Json<NearbyRequest>,
) -> Json<ApiResponse<Vec<NearbyService>>> {
    let location = LatLng {
        latitude: payload.latitude,
        longitude: payload.longitude,
    };
    let services = find_nearby_civic_services(&app_state.executor, location).await;
    wrap_response(services, debug_params, None)
}
