//! Weather API client for fetching current conditions by city
//!
//! Integrates with the OpenWeatherMap current-weather API. Failures never
//! propagate to the caller: the client degrades to NaN sentinel readings
//! so a recommendation request survives a weather outage.

use reqwest::Client;
use serde::Deserialize;

use shared::models::WeatherObservation;

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    main: OwmMain,
    rain: Option<OwmRain>,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwmRain {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Fetch current weather for a city.
    ///
    /// Contract: on any failure (transport error, non-success status,
    /// unparseable body) this returns [`WeatherObservation::unavailable`]
    /// rather than an error; degraded readings flow through the
    /// recommendation engine as NaN distances.
    pub async fn current_for_city(&self, city: &str) -> WeatherObservation {
        let url = format!(
            "{}/weather?q={}&units=metric&appid={}",
            self.base_url, city, self.api_key
        );

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Weather request for {} failed: {}", city, e);
                return WeatherObservation::unavailable();
            }
        };

        if !response.status().is_success() {
            tracing::warn!(
                "Weather API returned {} for city {}",
                response.status(),
                city
            );
            return WeatherObservation::unavailable();
        }

        let data: OwmCurrentResponse = match response.json().await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("Failed to parse weather response for {}: {}", city, e);
                return WeatherObservation::unavailable();
            }
        };

        WeatherObservation::new(
            data.main.temp,
            data.main.humidity,
            // No rain block means no rainfall in the last hour
            data.rain.and_then(|r| r.one_hour).unwrap_or(0.0),
        )
    }
}
