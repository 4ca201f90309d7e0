//! Crop Advisor - Backend Library
//!
//! A recommendation platform for farmers: nearest-neighbor crop matching
//! over a reference dataset of agronomic conditions, with per-crop
//! economics scaled to the user's land area.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

pub use config::Config;

use external::WeatherClient;
use services::{CropFactsTable, RecommendationEngine, SoilTable};
use store::Store;

/// Application state shared across handlers.
///
/// The corpus and static tables are built once at startup and read-only
/// thereafter; everything here is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Store,
    pub engine: RecommendationEngine,
    pub facts: Arc<CropFactsTable>,
    pub soil: Arc<SoilTable>,
    pub weather: WeatherClient,
}

impl AppState {
    /// Build application state from configuration, loading the reference
    /// corpus from the configured dataset path. Fails fast if the corpus
    /// is missing or empty.
    pub fn from_config(config: Config) -> error::AppResult<Self> {
        let corpus = services::dataset::load_corpus(&config.dataset.path)?;
        tracing::info!("Loaded reference corpus: {} records", corpus.len());

        let weather = WeatherClient::new(
            config.weather.api_key.clone(),
            config.weather.api_endpoint.clone(),
        );

        Ok(Self {
            config: Arc::new(config),
            store: Store::new(),
            engine: RecommendationEngine::new(Arc::new(corpus)),
            facts: Arc::new(CropFactsTable::new()),
            soil: Arc::new(SoilTable::new()),
            weather,
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Crop Advisor API v1.0"
}
