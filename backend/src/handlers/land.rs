//! Check-my-land handler: soil baseline and current weather for the
//! user's city

use axum::{extract::State, Json};
use serde::Serialize;

use shared::models::WeatherObservation;
use shared::types::SoilBaseline;

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::AppState;

#[derive(Serialize)]
pub struct LandConditionsResponse {
    pub city: String,
    pub soil: SoilBaseline,
    pub weather: WeatherObservation,
}

/// Soil and weather conditions for the current user's city
pub async fn get_land_conditions(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<LandConditionsResponse>> {
    let city = current_user.0.city;
    let weather = state.weather.current_for_city(&city).await;
    let soil = *state.soil.baseline(&city);

    Ok(Json(LandConditionsResponse {
        city,
        soil,
        weather,
    }))
}
