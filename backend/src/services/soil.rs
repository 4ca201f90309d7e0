//! Soil/weather adapter
//!
//! Simulated per-city soil baselines with a Default fallback, merged with
//! the live weather reading into the 7-feature query point the
//! recommendation engine consumes. Weather fields are taken verbatim;
//! sentinel NaN readings propagate into the distance computation rather
//! than erroring.

use std::collections::HashMap;

use shared::models::{QueryPoint, WeatherObservation};
use shared::types::SoilBaseline;

/// Case-insensitive per-city soil baseline table
pub struct SoilTable {
    entries: HashMap<String, SoilBaseline>,
    default: SoilBaseline,
}

impl SoilTable {
    /// Build the simulated soil table. Keys are lowercased once here.
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        let mut add = |city: &str, baseline: SoilBaseline| {
            entries.insert(city.to_lowercase(), baseline);
        };

        add("Mumbai", SoilBaseline::new(85.0, 45.0, 22.0, 6.8));
        add("Delhi", SoilBaseline::new(95.0, 50.0, 25.0, 7.1));
        add("Bangalore", SoilBaseline::new(75.0, 35.0, 18.0, 6.5));
        add("Vadodara", SoilBaseline::new(88.0, 48.0, 30.0, 7.5));
        add("Pune", SoilBaseline::new(82.0, 40.0, 20.0, 6.7));
        add("Chennai", SoilBaseline::new(78.0, 38.0, 15.0, 6.9));

        Self {
            entries,
            default: SoilBaseline::new(90.0, 42.0, 43.0, 6.5),
        }
    }

    /// Soil baseline for a city, case-insensitively; unknown cities get
    /// the Default baseline. Never fails.
    pub fn baseline(&self, city: &str) -> &SoilBaseline {
        self.entries
            .get(&city.to_lowercase())
            .unwrap_or(&self.default)
    }

    /// Assemble the query point for a recommendation request: soil
    /// nutrients and pH from the baseline, temperature/humidity/rainfall
    /// from the weather reading, merged verbatim.
    pub fn build_query_point(&self, city: &str, weather: &WeatherObservation) -> QueryPoint {
        let soil = self.baseline(city);
        QueryPoint {
            n: soil.n,
            p: soil.p,
            k: soil.k,
            temperature: weather.temperature,
            humidity: weather.humidity,
            ph: soil.ph,
            rainfall: weather.rainfall,
        }
    }
}

impl Default for SoilTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_is_case_insensitive() {
        let table = SoilTable::new();
        assert_eq!(table.baseline("vadodara").n, 88.0);
        assert_eq!(table.baseline("VADODARA").ph, 7.5);
    }

    #[test]
    fn test_unknown_city_gets_default_baseline() {
        let table = SoilTable::new();
        let soil = table.baseline("Springfield");
        assert_eq!(soil.n, 90.0);
        assert_eq!(soil.k, 43.0);
    }

    #[test]
    fn test_build_query_point_merges_soil_and_weather() {
        let table = SoilTable::new();
        let weather = WeatherObservation::new(28.5, 74.0, 1.2);
        let query = table.build_query_point("Pune", &weather);
        assert_eq!(query.n, 82.0);
        assert_eq!(query.ph, 6.7);
        assert_eq!(query.temperature, 28.5);
        assert_eq!(query.rainfall, 1.2);
    }

    #[test]
    fn test_unavailable_weather_propagates_nan() {
        let table = SoilTable::new();
        let query = table.build_query_point("Delhi", &WeatherObservation::unavailable());
        assert!(query.temperature.is_nan());
        assert!(query.humidity.is_nan());
        // Soil fields stay intact
        assert_eq!(query.n, 95.0);
    }
}
