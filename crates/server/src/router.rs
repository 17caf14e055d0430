use super::{handlers, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/query", post(handlers::query_handler))
        .route("/intel/elections", get(handlers::elections_handler))
        .route("/intel/national", get(handlers::national_handler))
        .route("/intel/states/{state}", get(handlers::state_handler))
        .route("/intel/dashboard", get(handlers::dashboard_handler))
        .route("/leaders/{name}/legal", get(handlers::legal_standing_handler))
        .route("/leaders/{name}/profile", get(handlers::leader_profile_handler))
        .route("/leaders/discover", post(handlers::discover_leaders_handler))
        .route("/leaders/compare", post(handlers::compare_leaders_handler))
        .route("/leaders/search", post(handlers::search_leaders_handler))
        .route("/notifications", get(handlers::notifications_handler))
        .route("/promises", get(handlers::promises_handler))
        .route("/events/live", get(handlers::live_events_handler))
        .route("/maps/search", post(handlers::place_search_handler))
        .route("/maps/nearby", post(handlers::nearby_services_handler))
        .route("/assistant", post(handlers::assistant_handler))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
