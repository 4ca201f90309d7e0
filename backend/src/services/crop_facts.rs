//! Static crop facts table
//!
//! A closed, hand-curated table of agronomic and economic constants for
//! every crop the reference dataset can recommend, plus a Default entry
//! used for any unrecognized name. Lookups are case-insensitive and never
//! fail. Keys are lowercased once at construction.

use std::collections::HashMap;

use shared::models::CropFacts;

/// Case-insensitive crop facts lookup table
pub struct CropFactsTable {
    entries: HashMap<String, CropFacts>,
    default: CropFacts,
}

#[allow(clippy::too_many_arguments)]
fn facts(
    duration_days: u32,
    price_per_kg: f64,
    water_per_acre: f64,
    budget_per_acre: f64,
    yield_per_acre: f64,
    req_temp_range: &str,
    req_humidity_range: &str,
    risk_note: &str,
    advantage_note: &str,
) -> CropFacts {
    CropFacts {
        duration_days,
        price_per_kg,
        water_per_acre,
        budget_per_acre,
        yield_per_acre,
        req_temp_range: req_temp_range.to_string(),
        req_humidity_range: req_humidity_range.to_string(),
        risk_note: risk_note.to_string(),
        advantage_note: advantage_note.to_string(),
    }
}

impl CropFactsTable {
    /// Build the table. Constructed once at startup and shared read-only.
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        let mut add = |name: &str, f: CropFacts| {
            entries.insert(name.to_lowercase(), f);
        };

        add("rice", facts(120, 20.0, 1200.0, 15000.0, 2200.0, "21-37 °C", "80-82 %", "High risk of blast disease", "High demand staple food."));
        add("maize", facts(90, 15.0, 600.0, 10000.0, 3000.0, "21-27 °C", "65-75 %", "Susceptible to stalk borers", "Versatile use (food, feed)."));
        add("chickpea", facts(100, 50.0, 400.0, 8000.0, 800.0, "18-26 °C", "50-60 %", "Prone to pod borer attack", "Nitrogen-fixing crop."));
        add("kidneybeans", facts(80, 80.0, 500.0, 12000.0, 1000.0, "20-27 °C", "60-65 %", "Sensitive to high temperatures", "High protein content."));
        add("pigeonpeas", facts(150, 70.0, 450.0, 9000.0, 700.0, "27-35 °C", "50-60 %", "Wilt disease is a major concern", "Drought tolerant."));
        add("mothbeans", facts(75, 60.0, 300.0, 7000.0, 500.0, "27-32 °C", "45-55 %", "Low yield potential", "Excellent for arid regions."));
        add("mungbean", facts(65, 90.0, 350.0, 11000.0, 600.0, "28-35 °C", "85-90 %", "Yellow mosaic virus", "Short duration, fits in crop cycles."));
        add("blackgram", facts(85, 85.0, 400.0, 10000.0, 750.0, "27-35 °C", "65-70 %", "Leaf spot and rust", "Improves soil fertility."));
        add("lentil", facts(110, 75.0, 350.0, 8500.0, 900.0, "24-26 °C", "60-65 %", "Rust and wilt are common", "Good winter crop."));
        add("pomegranate", facts(1095, 120.0, 800.0, 50000.0, 8000.0, "25-35 °C", "90-95 %", "Bacterial blight", "High market value."));
        add("banana", facts(365, 30.0, 1000.0, 40000.0, 25000.0, "26-28 °C", "80-85 %", "Panama disease", "Year-round production."));
        add("mango", facts(1825, 80.0, 700.0, 60000.0, 10000.0, "24-27 °C", "50-55 %", "Mango malformation", "King of fruits, high demand."));
        add("grapes", facts(730, 100.0, 900.0, 70000.0, 12000.0, "25-32 °C", "80-85 %", "Downy mildew", "Used for wine and table."));
        add("watermelon", facts(80, 10.0, 500.0, 12000.0, 20000.0, "24-26 °C", "80-85 %", "Fusarium wilt", "Popular summer fruit."));
        add("muskmelon", facts(70, 25.0, 450.0, 11000.0, 18000.0, "27-30 °C", "85-90 %", "Powdery mildew", "Refreshing and aromatic."));
        add("apple", facts(1825, 150.0, 800.0, 100000.0, 15000.0, "21-24 °C", "90-95 %", "Apple scab", "High profitability in temperate zones."));
        add("orange", facts(1095, 60.0, 750.0, 55000.0, 17000.0, "20-30 °C", "90-95 %", "Citrus canker", "Rich in Vitamin C."));
        add("papaya", facts(270, 40.0, 900.0, 20000.0, 30000.0, "25-35 °C", "90-95 %", "Papaya ring spot virus", "Quick returns."));
        add("coconut", facts(2555, 40.0, 1300.0, 80000.0, 10000.0, "27-29 °C", "90-95 %", "Root wilt disease", "Multiple uses (oil, water, fruit)."));
        add("cotton", facts(180, 60.0, 800.0, 25000.0, 1500.0, "28-30 °C", "75-80 %", "Bollworm attacks", "Important cash crop."));
        add("jute", facts(120, 45.0, 1000.0, 18000.0, 2500.0, "25-27 °C", "70-90 %", "Stem rot", "Biodegradable fiber."));
        add("coffee", facts(1460, 250.0, 900.0, 90000.0, 500.0, "20-28 °C", "90-95 %", "Coffee leaf rust", "High-value beverage crop."));

        let default = facts(
            100,
            30.0,
            500.0,
            10000.0,
            1000.0,
            "20-30 °C",
            "60-80 %",
            "General pest and disease risks",
            "Standard crop benefits.",
        );

        Self { entries, default }
    }

    /// Look up facts for a crop, case-insensitively. Unrecognized names
    /// resolve to the Default entry; this never fails.
    pub fn lookup(&self, crop_name: &str) -> &CropFacts {
        self.entries
            .get(&crop_name.to_lowercase())
            .unwrap_or(&self.default)
    }

    /// Sowing-to-harvest duration in days for a crop
    pub fn duration_of(&self, crop_name: &str) -> u32 {
        self.lookup(crop_name).duration_days
    }

    /// Number of curated entries (excluding the Default fallback)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CropFactsTable {
    fn default() -> Self {
        Self::new()
    }
}
