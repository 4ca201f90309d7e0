//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Simulated soil baseline for a city: nutrient levels and pH
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SoilBaseline {
    pub n: f64,
    pub p: f64,
    pub k: f64,
    pub ph: f64,
}

impl SoilBaseline {
    pub fn new(n: f64, p: f64, k: f64, ph: f64) -> Self {
        Self { n, p, k, ph }
    }
}

/// Currency used for all monetary figures
pub const CURRENCY: &str = "INR";

/// Square feet per acre, used to scale per-acre crop constants
pub const SQFT_PER_ACRE: f64 = 43560.0;

/// Round a monetary or quantity figure to 2 decimal places for display
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(2.5551), 2.56);
        assert_eq!(round2(48400.0), 48400.0);
    }

    #[test]
    fn test_round2_propagates_nan() {
        assert!(round2(f64::NAN).is_nan());
    }
}
