use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::health;
use super::state::AppState;
use super::teams;
use crate::config::ServerConfig;

/// Create the router with health and team endpoints
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Team endpoints
        .route("/teams", get(teams::list_teams))
        .route("/add-team", post(teams::add_team))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Create the router served to clients, with CORS applied per configuration
pub fn create_app(state: AppState, server: &ServerConfig) -> Router {
    let router = create_router_with_state(state);

    if server.cors_permissive {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
