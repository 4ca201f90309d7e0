//! Recommendation engine integration tests
//!
//! Exercises the engine against the real reference corpus and checks its
//! ranking guarantees over arbitrary query points with proptest.

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;

use crop_advisor_backend::services::dataset::load_corpus;
use crop_advisor_backend::services::{RecommendationEngine, SoilTable};
use shared::models::{AgronomicRecord, QueryPoint, WeatherObservation};

fn real_corpus() -> Arc<Vec<AgronomicRecord>> {
    let path = format!(
        "{}/../data/crop_recommendation.csv",
        env!("CARGO_MANIFEST_DIR")
    );
    Arc::new(load_corpus(path).expect("reference dataset should load"))
}

fn real_engine() -> RecommendationEngine {
    RecommendationEngine::new(real_corpus())
}

#[test]
fn test_rice_conditions_recommend_rice_first() {
    let engine = real_engine();
    // Hot, humid, high-rainfall conditions straight from a rice row
    let query = QueryPoint {
        n: 90.0,
        p: 42.0,
        k: 43.0,
        temperature: 24.0,
        humidity: 82.0,
        ph: 6.5,
        rainfall: 220.0,
    };
    let result = engine.recommend(&query, 12);
    assert_eq!(result[0], "rice");
    assert_eq!(result.len(), 12);
}

#[test]
fn test_oversized_k_returns_every_distinct_label() {
    let engine = real_engine();
    let query = QueryPoint {
        n: 50.0,
        p: 50.0,
        k: 50.0,
        temperature: 25.0,
        humidity: 70.0,
        ph: 6.5,
        rainfall: 100.0,
    };
    let result = engine.recommend(&query, 1000);
    assert_eq!(result.len(), 22);
}

#[test]
fn test_degraded_weather_still_produces_recommendations() {
    // When the weather lookup fails the query carries NaN features; the
    // engine must still return labels rather than erroring.
    let engine = real_engine();
    let soil = SoilTable::new();
    let query = soil.build_query_point("Pune", &WeatherObservation::unavailable());
    let result = engine.recommend(&query, 12);
    assert_eq!(result.len(), 12);
}

fn finite_feature() -> impl Strategy<Value = f64> {
    -500.0..500.0f64
}

fn arb_query() -> impl Strategy<Value = QueryPoint> {
    (
        finite_feature(),
        finite_feature(),
        finite_feature(),
        finite_feature(),
        finite_feature(),
        finite_feature(),
        finite_feature(),
    )
        .prop_map(|(n, p, k, temperature, humidity, ph, rainfall)| QueryPoint {
            n,
            p,
            k,
            temperature,
            humidity,
            ph,
            rainfall,
        })
}

proptest! {
    #[test]
    fn prop_at_most_k_labels_and_no_duplicates(query in arb_query(), k in 0usize..30) {
        let engine = real_engine();
        let result = engine.recommend(&query, k);

        prop_assert!(result.len() <= k);

        let distinct: HashSet<&str> = result.iter().map(String::as_str).collect();
        prop_assert_eq!(distinct.len(), result.len());
    }

    #[test]
    fn prop_first_label_owns_the_closest_record(query in arb_query()) {
        let corpus = real_corpus();
        let engine = RecommendationEngine::new(corpus.clone());
        let result = engine.recommend(&query, 12);
        prop_assert!(!result.is_empty());

        let best = corpus
            .iter()
            .map(|r| query.distance_to(r))
            .fold(f64::INFINITY, f64::min);
        let first_best = corpus
            .iter()
            .filter(|r| r.label == result[0])
            .map(|r| query.distance_to(r))
            .fold(f64::INFINITY, f64::min);

        prop_assert_eq!(first_best, best);
    }

    #[test]
    fn prop_labels_ordered_by_best_distance(query in arb_query()) {
        let corpus = real_corpus();
        let engine = RecommendationEngine::new(corpus.clone());
        let result = engine.recommend(&query, 12);

        let best_for = |label: &str| {
            corpus
                .iter()
                .filter(|r| r.label == label)
                .map(|r| query.distance_to(r))
                .fold(f64::INFINITY, f64::min)
        };

        for pair in result.windows(2) {
            prop_assert!(best_for(&pair[0]) <= best_for(&pair[1]));
        }
    }
}
