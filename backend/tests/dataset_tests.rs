//! Reference dataset loader integration tests
//!
//! Loads the real reference corpus shipped with the repository and checks
//! the loader's contract: permissive numeric parsing, label filtering,
//! and determinism.

use crop_advisor_backend::error::AppError;
use crop_advisor_backend::services::dataset::{load_corpus, parse_corpus};

fn dataset_path() -> String {
    format!(
        "{}/../data/crop_recommendation.csv",
        env!("CARGO_MANIFEST_DIR")
    )
}

#[test]
fn test_load_real_corpus() {
    let corpus = load_corpus(dataset_path()).expect("reference dataset should load");
    assert!(!corpus.is_empty());
    assert!(corpus.iter().all(|r| !r.label.is_empty()));
}

#[test]
fn test_real_corpus_covers_expected_crops() {
    let corpus = load_corpus(dataset_path()).unwrap();
    let labels: std::collections::HashSet<&str> =
        corpus.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels.len(), 22);
    assert!(labels.contains("rice"));
    assert!(labels.contains("coffee"));
}

#[test]
fn test_loading_twice_is_deterministic() {
    let first = load_corpus(dataset_path()).unwrap();
    let second = load_corpus(dataset_path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_file_is_data_load_error() {
    let err = load_corpus("/no/such/dataset.csv").unwrap_err();
    assert!(matches!(err, AppError::DataLoad(_)));
}

#[test]
fn test_malformed_rows_are_kept_with_nan_features() {
    let data = "N,P,K,temperature,humidity,ph,rainfall,label\n\
                90,42,43,not-a-number,82.0,6.5,202.94,rice\n\
                85,58,41,21.77,80.32,7.04,226.66,rice\n";
    let corpus = parse_corpus(data.as_bytes()).unwrap();
    assert_eq!(corpus.len(), 2);
    assert!(corpus[0].temperature.is_nan());
    assert_eq!(corpus[1].temperature, 21.77);
}

#[test]
fn test_header_row_is_discarded() {
    let data = "N,P,K,temperature,humidity,ph,rainfall,label\n\
                90,42,43,20.88,82.0,6.5,202.94,rice\n";
    let corpus = parse_corpus(data.as_bytes()).unwrap();
    assert_eq!(corpus.len(), 1);
    assert_eq!(corpus[0].label, "rice");
}
