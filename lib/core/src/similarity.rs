//! Pairwise text similarity.
//!
//! `similarity` scores two raw texts in `[0, 1]` by vectorizing both against
//! a vocabulary built from the pair, then taking the cosine of the vectors.
//! It never fails: degenerate inputs score 0.0.

use crate::vectorizer::Vocabulary;

/// Cosine similarity between two texts, in `[0, 1]`.
///
/// Symmetric, and maximal (≈1.0) for a text compared with itself whenever it
/// contains at least one token. Two texts with no shared dimensions, or any
/// token-free text, score 0.0.
#[must_use]
pub fn similarity(text_a: &str, text_b: &str) -> f32 {
    let vocabulary = Vocabulary::build([text_a, text_b]);
    if vocabulary.is_empty() {
        return 0.0;
    }

    let a = vocabulary.vectorize(text_a);
    let b = vocabulary.vectorize(text_b);
    a.cosine_similarity(&b)
}
