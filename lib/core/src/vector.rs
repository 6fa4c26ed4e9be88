use serde::{Deserialize, Serialize};

/// An ordered sequence of term weights for one text.
///
/// Entries are L1-normalized term frequencies: they sum to 1 unless the text
/// produced no tokens, in which case every entry is zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureVector {
    data: Vec<f32>,
}

impl FeatureVector {
    #[inline]
    #[must_use]
    pub fn new(data: Vec<f32>) -> Self {
        Self { data }
    }

    /// An all-zero vector of the given dimension.
    #[inline]
    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        Self {
            data: vec![0.0; dim],
        }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Sum of all entries (the L1 mass).
    #[inline]
    #[must_use]
    pub fn l1_sum(&self) -> f32 {
        self.data.iter().sum()
    }

    /// True when every entry is zero, i.e. the source text had no tokens.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&x| x == 0.0)
    }

    /// Cosine similarity with another vector, clamped to `[0, 1]`.
    ///
    /// Returns 0.0 when the dimensions differ or either magnitude is zero.
    /// Term-frequency vectors are non-negative, so the lower clamp is a
    /// defensive floor rather than a reachable code path.
    pub fn cosine_similarity(&self, other: &FeatureVector) -> f32 {
        if self.dim() != other.dim() {
            return 0.0;
        }

        let dot: f32 = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum();
        let norm_a: f32 = self.data.iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm_b: f32 = other.data.iter().map(|x| x * x).sum::<f32>().sqrt();

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
    }
}
