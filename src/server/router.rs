//! Router builder for the registry's HTTP surface

use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::server::handlers::{
    AppState, health, list_categories, list_donations, list_locations,
};

/// Build the application router.
///
/// - GET /donations  - paginated donation search
/// - GET /categories - categories with nested sub-categories
/// - GET /locations  - storage locations
/// - GET /health     - liveness probe
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/donations", get(list_donations))
        .route("/categories", get(list_categories))
        .route("/locations", get(list_locations))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
