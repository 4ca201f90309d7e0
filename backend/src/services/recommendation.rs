//! Crop recommendation engine
//!
//! Nearest-neighbor search over the reference corpus. Many corpus rows
//! share a label, so a naive top-K would return the same crop repeatedly;
//! the dedup walk keeps "best match first" ordering while guaranteeing
//! variety.

use std::collections::HashSet;
use std::sync::Arc;

use shared::models::{AgronomicRecord, QueryPoint};

/// Number of recommendations shown to the user by default
pub const DEFAULT_RECOMMENDATIONS: usize = 12;

/// Ranked candidate produced while scoring the corpus
struct RankedCandidate<'a> {
    distance: f64,
    label: &'a str,
}

/// Recommendation engine over an immutable reference corpus.
///
/// Cheap to clone and safe to share: the corpus is read-only after load,
/// so concurrent `recommend` calls need no synchronization.
#[derive(Clone)]
pub struct RecommendationEngine {
    corpus: Arc<Vec<AgronomicRecord>>,
}

impl RecommendationEngine {
    pub fn new(corpus: Arc<Vec<AgronomicRecord>>) -> Self {
        Self { corpus }
    }

    /// Number of records in the reference corpus
    pub fn corpus_size(&self) -> usize {
        self.corpus.len()
    }

    /// Rank every corpus record by Euclidean distance to the query point
    /// and return the k best-matching distinct crop labels.
    ///
    /// The sort is stable and uses `total_cmp`, so ties keep corpus order
    /// and NaN distances (malformed records, unavailable weather) rank
    /// after every real match. Returns fewer than k labels when the corpus
    /// has fewer distinct labels; an empty corpus or k == 0 yields an
    /// empty result, not an error.
    pub fn recommend(&self, query: &QueryPoint, k: usize) -> Vec<String> {
        if k == 0 {
            return Vec::new();
        }

        let mut candidates: Vec<RankedCandidate> = self
            .corpus
            .iter()
            .map(|record| RankedCandidate {
                distance: query.distance_to(record),
                label: record.label.as_str(),
            })
            .collect();

        candidates.sort_by(|a, b| a.distance.total_cmp(&b.distance));

        let mut seen = HashSet::new();
        let mut recommendations = Vec::new();
        for candidate in &candidates {
            if seen.insert(candidate.label) {
                recommendations.push(candidate.label.to_string());
                if recommendations.len() >= k {
                    break;
                }
            }
        }

        recommendations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(features: [f64; 7], label: &str) -> AgronomicRecord {
        AgronomicRecord {
            n: features[0],
            p: features[1],
            k: features[2],
            temperature: features[3],
            humidity: features[4],
            ph: features[5],
            rainfall: features[6],
            label: label.to_string(),
        }
    }

    fn query(features: [f64; 7]) -> QueryPoint {
        QueryPoint {
            n: features[0],
            p: features[1],
            k: features[2],
            temperature: features[3],
            humidity: features[4],
            ph: features[5],
            rainfall: features[6],
        }
    }

    #[test]
    fn test_exact_match_ranks_first() {
        let corpus = Arc::new(vec![
            record([10.0, 10.0, 10.0, 20.0, 60.0, 6.0, 100.0], "maize"),
            record([90.0, 42.0, 43.0, 21.0, 82.0, 6.5, 203.0], "rice"),
        ]);
        let engine = RecommendationEngine::new(corpus);
        let result = engine.recommend(&query([90.0, 42.0, 43.0, 21.0, 82.0, 6.5, 203.0]), 2);
        assert_eq!(result, vec!["rice", "maize"]);
    }

    #[test]
    fn test_duplicate_labels_deduplicated() {
        let corpus = Arc::new(vec![
            record([1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], "rice"),
            record([2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], "rice"),
            record([3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], "maize"),
        ]);
        let engine = RecommendationEngine::new(corpus);
        let result = engine.recommend(&query([0.0; 7]), 3);
        assert_eq!(result, vec!["rice", "maize"]);
    }

    #[test]
    fn test_empty_corpus_yields_empty_result() {
        let engine = RecommendationEngine::new(Arc::new(Vec::new()));
        assert!(engine.recommend(&query([0.0; 7]), 12).is_empty());
    }

    #[test]
    fn test_k_zero_yields_empty_result() {
        let corpus = Arc::new(vec![record([0.0; 7], "rice")]);
        let engine = RecommendationEngine::new(corpus);
        assert!(engine.recommend(&query([0.0; 7]), 0).is_empty());
    }

    #[test]
    fn test_nan_record_ranks_last() {
        let corpus = Arc::new(vec![
            record([f64::NAN, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], "poisoned"),
            record([5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], "rice"),
        ]);
        let engine = RecommendationEngine::new(corpus);
        let result = engine.recommend(&query([0.0; 7]), 2);
        assert_eq!(result, vec!["rice", "poisoned"]);
    }

    #[test]
    fn test_degraded_query_still_returns_labels() {
        // All-NaN query (weather unavailable): every distance is NaN, so
        // the ranking degrades to corpus order, but nothing errors.
        let corpus = Arc::new(vec![
            record([1.0; 7], "rice"),
            record([2.0; 7], "maize"),
        ]);
        let engine = RecommendationEngine::new(corpus);
        let result = engine.recommend(&query([f64::NAN; 7]), 2);
        assert_eq!(result, vec!["rice", "maize"]);
    }
}
