//! Crop recommendation models
//!
//! The reference corpus, query points, crop facts, and the derived
//! projection/timeline types produced by the recommendation engine.

use serde::{Deserialize, Serialize};

/// One labeled row of the reference dataset: seven agronomic features
/// plus the crop grown under those conditions.
///
/// Records are loaded once at startup and immutable thereafter. A record
/// may carry `NaN` features if its source row was malformed; such records
/// never win a ranking but are kept for corpus fidelity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgronomicRecord {
    /// Soil nitrogen level
    pub n: f64,
    /// Soil phosphorus level
    pub p: f64,
    /// Soil potassium level
    pub k: f64,
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: f64,
    /// Soil pH
    pub ph: f64,
    /// Rainfall in millimetres
    pub rainfall: f64,
    /// Crop label, non-empty
    pub label: String,
}

impl AgronomicRecord {
    /// The record's position in feature space
    pub fn features(&self) -> [f64; 7] {
        [
            self.n,
            self.p,
            self.k,
            self.temperature,
            self.humidity,
            self.ph,
            self.rainfall,
        ]
    }
}

/// Live conditions for a user's location: the same seven features as
/// [`AgronomicRecord`], minus the label.
///
/// Assembled fresh per recommendation request from the soil baseline and
/// current weather; never persisted. Weather sentinels propagate as `NaN`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QueryPoint {
    pub n: f64,
    pub p: f64,
    pub k: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub ph: f64,
    pub rainfall: f64,
}

impl QueryPoint {
    pub fn features(&self) -> [f64; 7] {
        [
            self.n,
            self.p,
            self.k,
            self.temperature,
            self.humidity,
            self.ph,
            self.rainfall,
        ]
    }

    /// Unweighted, unnormalized Euclidean distance to a reference record.
    /// All seven features contribute equally regardless of scale. Any `NaN`
    /// feature on either side makes the distance `NaN`.
    pub fn distance_to(&self, record: &AgronomicRecord) -> f64 {
        self.features()
            .iter()
            .zip(record.features().iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }
}

/// Agronomic and economic constants for a single crop.
///
/// Hand-curated; one entry per supported crop plus a Default used for
/// unrecognized names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropFacts {
    /// Sowing-to-harvest duration in days
    pub duration_days: u32,
    /// Current market price per kilogram
    pub price_per_kg: f64,
    /// Water requirement per acre, in megaliters per season
    pub water_per_acre: f64,
    /// Cultivation budget per acre, per season
    pub budget_per_acre: f64,
    /// Expected yield per acre, in kilograms
    pub yield_per_acre: f64,
    /// Suitable temperature range, display string
    pub req_temp_range: String,
    /// Suitable humidity range, display string
    pub req_humidity_range: String,
    /// Main cultivation risk
    pub risk_note: String,
    /// Main selling point
    pub advantage_note: String,
}

/// Yield, revenue, and input figures for a crop scaled to a land area.
///
/// Recomputed on demand from [`CropFacts`] and the user's land area;
/// never persisted. Numeric fields are rounded to 2 decimal places;
/// thousands grouping is left to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropProjection {
    pub crop_name: String,
    /// Currency tag for all monetary fields
    pub currency: String,
    pub current_price_per_kg: f64,
    /// Projected future price: flat 10% markup over the current price
    pub estimated_price_per_kg: f64,
    /// Total expected yield in kilograms
    pub total_yield_kg: f64,
    pub total_revenue: f64,
    /// Water requirement in megaliters per season
    pub water_megaliters: f64,
    /// Cultivation budget per season
    pub budget: f64,
    /// Days from sowing to harvest
    pub tentative_harvest_days: u32,
    pub req_temp_range: String,
    pub req_humidity_range: String,
    pub risk_factors: String,
    pub advantages: String,
}

/// One milestone in a crop's cultivation timeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineEntry {
    pub task: String,
    /// Days after sowing
    pub day_offset: u32,
}
