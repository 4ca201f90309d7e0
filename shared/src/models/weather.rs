//! Weather data models

use serde::{Deserialize, Serialize};

/// Current weather conditions for a city, as reported by the weather
/// collaborator.
///
/// When the weather service is unreachable the collaborator returns
/// [`WeatherObservation::unavailable`] instead of failing: all fields are
/// `NaN` sentinels, which flow through the recommendation engine as
/// degraded (never erroring) results.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: f64,
    /// Rainfall over the last hour, in millimetres
    pub rainfall: f64,
}

impl WeatherObservation {
    pub fn new(temperature: f64, humidity: f64, rainfall: f64) -> Self {
        Self {
            temperature,
            humidity,
            rainfall,
        }
    }

    /// Sentinel value reported when the weather service cannot be reached
    pub fn unavailable() -> Self {
        Self {
            temperature: f64::NAN,
            humidity: f64::NAN,
            rainfall: f64::NAN,
        }
    }

    /// True if any field carries the unavailable sentinel
    pub fn is_degraded(&self) -> bool {
        self.temperature.is_nan() || self.humidity.is_nan() || self.rainfall.is_nan()
    }
}
