//! Best-category search against the reference corpus.
//!
//! The matcher scores one target vector against every reference vector
//! (there is no indexing or pruning; the full run is O(targets × references),
//! acceptable at corpus sizes in the low thousands) and assigns the category
//! of the highest-scoring reference. Ties keep the first-seen reference.

use crate::record::{MatchOutcome, ReferenceRecord};
use crate::vector::FeatureVector;
use crate::vectorizer::Vocabulary;

/// Maximum number of characters of reference text echoed back in an outcome.
pub const SIMILAR_REFERENCE_MAX_CHARS: usize = 100;

/// Matcher over a fixed reference corpus.
///
/// Reference vectors are computed once at construction. All lookups are
/// read-only, so one matcher can be shared across threads for parallel
/// per-target scoring.
#[derive(Debug, Clone)]
pub struct Matcher {
    references: Vec<ReferenceRecord>,
    vectors: Vec<FeatureVector>,
}

impl Matcher {
    /// Vectorize the reference corpus against the shared vocabulary.
    #[must_use]
    pub fn new(references: Vec<ReferenceRecord>, vocabulary: &Vocabulary) -> Self {
        let vectors = references
            .iter()
            .map(|r| vocabulary.vectorize(&r.problem))
            .collect();
        Self { references, vectors }
    }

    #[inline]
    #[must_use]
    pub fn reference_count(&self) -> usize {
        self.references.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Find the best category for one target vector.
    ///
    /// Never fails: an empty reference corpus yields the uncategorized
    /// sentinel, and a non-finite score (defensive, not a reachable path for
    /// term-frequency vectors) yields the error sentinel.
    #[must_use]
    pub fn best_match(&self, target: &FeatureVector) -> MatchOutcome {
        if self.references.is_empty() {
            return MatchOutcome::uncategorized();
        }

        let mut best_index = 0;
        let mut best_similarity = f32::NEG_INFINITY;
        for (index, vector) in self.vectors.iter().enumerate() {
            let sim = target.cosine_similarity(vector);
            // Strictly greater: on ties the first-seen reference wins.
            if sim > best_similarity {
                best_similarity = sim;
                best_index = index;
            }
        }

        if !best_similarity.is_finite() {
            return MatchOutcome::failure();
        }

        let best = &self.references[best_index];
        MatchOutcome {
            category: best.category.clone(),
            confidence: round_to_tenth((best_similarity * 100.0).min(100.0)),
            similar_reference: truncate_chars(&best.problem, SIMILAR_REFERENCE_MAX_CHARS),
        }
    }

    /// Convenience wrapper that vectorizes the target text first.
    #[must_use]
    pub fn best_match_text(&self, vocabulary: &Vocabulary, problem: &str) -> MatchOutcome {
        self.best_match(&vocabulary.vectorize(problem))
    }
}

#[inline]
fn round_to_tenth(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

/// Truncate to `max` characters, marking the cut with an ellipsis.
///
/// Counts `char`s, not bytes, so multi-byte text (Turkish included) is never
/// split mid-character.
fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max).collect();
    format!("{truncated}...")
}
