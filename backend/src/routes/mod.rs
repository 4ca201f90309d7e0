//! Route definitions for the Crop Advisor platform

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Auth routes (public)
        .nest("/auth", auth_routes())
        // Protected routes - crop recommendation and selection
        .nest("/crops", crop_routes())
        // Protected routes - land conditions
        .nest("/land", land_routes())
}

/// Authentication routes (public)
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
}

/// Crop recommendation and selection routes (protected)
fn crop_routes() -> Router<AppState> {
    Router::new()
        .route("/recommendations", get(handlers::get_recommendations))
        .route(
            "/selection",
            get(handlers::get_dashboard).post(handlers::select_crop),
        )
        .route("/:crop_name/projection", get(handlers::get_crop_projection))
        .route("/:crop_name/timeline", get(handlers::get_crop_timeline))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Land condition routes (protected)
fn land_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_land_conditions))
        .route_layer(middleware::from_fn(auth_middleware))
}
