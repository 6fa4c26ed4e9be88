//! Bag-of-words vectorization over a shared vocabulary.
//!
//! Texts are lowercased and split on whitespace; a [`Vocabulary`] assigns one
//! dimension per distinct token in lexicographic order, built once from the
//! union of all texts taking part in a run. Every vector produced from the
//! same vocabulary shares dimension semantics, so cosine similarity between
//! them compares like with like.

use std::collections::BTreeSet;

use ahash::AHashMap;

use crate::vector::FeatureVector;

/// Split a text into lowercase whitespace-delimited tokens.
#[inline]
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Shared token-to-dimension mapping for one categorization run.
///
/// Dimension order is the lexicographic order of the distinct tokens, which
/// makes vectorization fully deterministic: the same corpus always produces
/// the same vocabulary and the same vectors.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    index: AHashMap<String, usize>,
}

impl Vocabulary {
    /// Build a vocabulary from the distinct tokens of all given texts.
    pub fn build<'a, I>(texts: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut tokens: BTreeSet<String> = BTreeSet::new();
        for text in texts {
            tokens.extend(tokenize(text));
        }

        let index = tokens
            .into_iter()
            .enumerate()
            .map(|(dim, token)| (token, dim))
            .collect();

        Self { index }
    }

    /// Number of dimensions (distinct tokens).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Dimension index of a token, if the token is part of the vocabulary.
    #[inline]
    #[must_use]
    pub fn dimension_of(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    /// Map a text to its L1-normalized term-frequency vector.
    ///
    /// Tokens outside the vocabulary are ignored. A text with no tokens that
    /// hit the vocabulary yields an all-zero vector; there is no division by
    /// zero and no failure path.
    #[must_use]
    pub fn vectorize(&self, text: &str) -> FeatureVector {
        let mut data = vec![0.0f32; self.index.len()];
        let mut total = 0.0f32;

        for token in tokenize(text) {
            if let Some(&dim) = self.index.get(&token) {
                data[dim] += 1.0;
                total += 1.0;
            }
        }

        if total > 0.0 {
            for weight in &mut data {
                *weight /= total;
            }
        }

        FeatureVector::new(data)
    }
}
