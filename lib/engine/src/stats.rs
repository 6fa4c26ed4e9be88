//! Run statistics.

use std::collections::BTreeMap;
use std::time::Duration;

use ahash::AHashSet;
use categorix_core::MatchResult;
use serde::{Deserialize, Serialize};

/// Summary figures for one categorization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    /// Number of target records that were scored.
    pub total_processed: usize,
    /// Number of distinct category labels in the results, sentinels included.
    pub categories_found: usize,
    /// Mean confidence over all results, rounded to one decimal.
    pub avg_confidence: f32,
    /// Wall-clock duration of the run in seconds, rounded to one decimal.
    pub processing_time_seconds: f32,
}

impl RunStats {
    #[must_use]
    pub fn from_results(results: &[MatchResult], elapsed: Duration) -> Self {
        let distinct: AHashSet<&str> = results.iter().map(|r| r.category.as_str()).collect();

        let avg_confidence = if results.is_empty() {
            0.0
        } else {
            let sum: f32 = results.iter().map(|r| r.confidence).sum();
            round_to_tenth(sum / results.len() as f32)
        };

        Self {
            total_processed: results.len(),
            categories_found: distinct.len(),
            avg_confidence,
            processing_time_seconds: round_to_tenth(elapsed.as_secs_f32()),
        }
    }
}

/// Result count per category label, sorted by label.
#[must_use]
pub fn category_counts(results: &[MatchResult]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for result in results {
        *counts.entry(result.category.clone()).or_insert(0) += 1;
    }
    counts
}

#[inline]
fn round_to_tenth(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}
