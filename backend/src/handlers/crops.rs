//! HTTP handlers for crop recommendation, selection, and projections

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use shared::models::{CropProjection, TimelineEntry, UserCrop, WeatherObservation};

use crate::error::{AppError, AppResult};
use crate::middleware::CurrentUser;
use crate::services::recommendation::DEFAULT_RECOMMENDATIONS;
use crate::services::{CropLogService, EconomicsProjector};
use crate::AppState;

/// Query parameters for the recommendations endpoint
#[derive(Debug, Deserialize)]
pub struct RecommendationsQuery {
    /// Maximum number of distinct crops to return (default 12)
    pub limit: Option<usize>,
}

#[derive(Serialize)]
pub struct RecommendationsResponse {
    pub city: String,
    /// True when the weather service was unavailable and the ranking is
    /// degraded
    pub weather_degraded: bool,
    pub crops: Vec<String>,
}

/// Recommend crops for the current user's city.
///
/// Assembles the query point from the city's soil baseline and current
/// weather, then ranks the reference corpus. Weather outages degrade the
/// ranking instead of failing the request.
pub async fn get_recommendations(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Query(query): Query<RecommendationsQuery>,
) -> AppResult<Json<RecommendationsResponse>> {
    let city = current_user.0.city;
    let weather = state.weather.current_for_city(&city).await;
    if weather.is_degraded() {
        tracing::warn!("Serving degraded recommendations for {}", city);
    }

    let query_point = state.soil.build_query_point(&city, &weather);
    let k = query.limit.unwrap_or(DEFAULT_RECOMMENDATIONS);
    let crops = state.engine.recommend(&query_point, k);

    Ok(Json(RecommendationsResponse {
        city,
        weather_degraded: weather.is_degraded(),
        crops,
    }))
}

/// Projected economics for a crop on the current user's land
pub async fn get_crop_projection(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(crop_name): Path<String>,
) -> AppResult<Json<CropProjection>> {
    let record = state
        .store
        .user_by_id(current_user.0.user_id)?
        .ok_or_else(|| AppError::NotFound("User".to_string()))?;

    let projector = EconomicsProjector::new(state.facts.clone());
    let projection = projector.project(&crop_name, record.user.land_area_sqft)?;
    Ok(Json(projection))
}

#[derive(Serialize)]
pub struct TimelineResponse {
    pub crop_name: String,
    pub duration_days: u32,
    pub timeline: Vec<TimelineEntry>,
}

/// Cultivation timeline for a crop
pub async fn get_crop_timeline(
    State(state): State<AppState>,
    Path(crop_name): Path<String>,
) -> AppResult<Json<TimelineResponse>> {
    let projector = EconomicsProjector::new(state.facts.clone());
    let timeline = projector.timeline(&crop_name);
    let duration_days = projector.duration_of(&crop_name);

    Ok(Json(TimelineResponse {
        crop_name,
        duration_days,
        timeline,
    }))
}

#[derive(Deserialize)]
pub struct SelectCropRequest {
    pub crop_name: String,
}

/// Select a crop to grow, replacing any previous selection
pub async fn select_crop(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(body): Json<SelectCropRequest>,
) -> AppResult<(StatusCode, Json<UserCrop>)> {
    let service = CropLogService::new(state.store.clone(), state.facts.clone());
    let crop = service.select_crop(current_user.0.user_id, &body.crop_name)?;
    tracing::info!(
        "User {} selected crop {}",
        current_user.0.user_id,
        crop.crop_name
    );
    Ok((StatusCode::CREATED, Json(crop)))
}

#[derive(Serialize)]
pub struct DashboardResponse {
    pub crop: UserCrop,
    pub weather: WeatherObservation,
    pub timeline: Vec<TimelineEntry>,
}

/// Dashboard data: the current crop selection with its timeline and the
/// city's current weather. `NotFound` if no crop has been selected yet.
pub async fn get_dashboard(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<DashboardResponse>> {
    let service = CropLogService::new(state.store.clone(), state.facts.clone());
    let crop = service.current_crop(current_user.0.user_id)?;

    let weather = state.weather.current_for_city(&current_user.0.city).await;

    let projector = EconomicsProjector::new(state.facts.clone());
    let timeline = projector.timeline(&crop.crop_name);

    Ok(Json(DashboardResponse {
        crop,
        weather,
        timeline,
    }))
}
