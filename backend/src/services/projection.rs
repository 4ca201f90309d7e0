//! Economics projector and cultivation timeline generator
//!
//! Scales a crop's per-acre constants to the user's land area and derives
//! revenue from a flat 10% future-price markup. Projections are computed
//! on demand and never stored.

use std::sync::Arc;

use shared::models::{CropProjection, TimelineEntry};
use shared::types::{round2, CURRENCY, SQFT_PER_ACRE};

use crate::error::{AppError, AppResult};
use crate::services::crop_facts::CropFactsTable;

/// Flat markup applied to the current price to estimate the future price
const FUTURE_PRICE_MARKUP: f64 = 1.1;

/// Cultivation milestones as fractions of the crop's total duration
const TIMELINE_MILESTONES: [(&str, f64); 7] = [
    ("Sow Seeds", 0.0),
    ("Germination & Early Growth", 0.10),
    ("Fertilizer Application", 0.25),
    ("Pest & Disease Inspection", 0.50),
    ("Flowering & Pollination", 0.70),
    ("Final Ripening", 0.90),
    ("Harvest", 1.0),
];

/// Projects crop economics onto a user's land area
#[derive(Clone)]
pub struct EconomicsProjector {
    facts: Arc<CropFactsTable>,
}

impl EconomicsProjector {
    pub fn new(facts: Arc<CropFactsTable>) -> Self {
        Self { facts }
    }

    /// Compute scaled yield, revenue, water, and budget figures for a crop
    /// on `land_area_sqft` square feet of land.
    ///
    /// Unrecognized crop names resolve to the Default facts entry and
    /// still produce a projection. Fails only for a non-positive land
    /// area (a NaN area also fails the guard).
    pub fn project(&self, crop_name: &str, land_area_sqft: f64) -> AppResult<CropProjection> {
        if land_area_sqft.is_nan() || land_area_sqft <= 0.0 {
            return Err(AppError::InvalidInput(
                "land area must be greater than zero square feet".to_string(),
            ));
        }

        let facts = self.facts.lookup(crop_name);
        let land_area_acres = land_area_sqft / SQFT_PER_ACRE;

        let total_yield = facts.yield_per_acre * land_area_acres;
        let estimated_price = facts.price_per_kg * FUTURE_PRICE_MARKUP;
        let total_revenue = total_yield * estimated_price;

        Ok(CropProjection {
            crop_name: crop_name.to_string(),
            currency: CURRENCY.to_string(),
            current_price_per_kg: round2(facts.price_per_kg),
            estimated_price_per_kg: round2(estimated_price),
            total_yield_kg: round2(total_yield),
            total_revenue: round2(total_revenue),
            water_megaliters: round2(facts.water_per_acre * land_area_acres),
            budget: round2(facts.budget_per_acre * land_area_acres),
            tentative_harvest_days: facts.duration_days,
            req_temp_range: facts.req_temp_range.clone(),
            req_humidity_range: facts.req_humidity_range.clone(),
            risk_factors: facts.risk_note.clone(),
            advantages: facts.advantage_note.clone(),
        })
    }

    /// The seven fixed cultivation milestones for a crop, with day offsets
    /// computed as rounded percentages of its total duration. Pure; no
    /// failure modes — unknown crops use the Default duration.
    pub fn timeline(&self, crop_name: &str) -> Vec<TimelineEntry> {
        let duration = self.facts.duration_of(crop_name);
        TIMELINE_MILESTONES
            .iter()
            .map(|(task, fraction)| TimelineEntry {
                task: task.to_string(),
                day_offset: (f64::from(duration) * fraction).round() as u32,
            })
            .collect()
    }

    /// Sowing-to-harvest duration for a crop, in days
    pub fn duration_of(&self, crop_name: &str) -> u32 {
        self.facts.duration_of(crop_name)
    }
}
