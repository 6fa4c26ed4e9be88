use serde::{Deserialize, Serialize};

/// Label used when no reference corpus is available to match against.
pub const UNCATEGORIZED: &str = "Kategorisiz";

/// Placeholder reference text paired with [`UNCATEGORIZED`].
pub const NO_REFERENCE: &str = "Referans bulunamadı";

/// Label used when scoring a single record failed.
pub const MATCH_ERROR: &str = "Hata";

/// Placeholder reference text paired with [`MATCH_ERROR`].
pub const PROCESSING_ERROR: &str = "İşlem hatası";

/// A labeled example problem from the reference corpus.
///
/// Immutable once parsed; lives for the duration of one categorization run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceRecord {
    pub problem: String,
    pub category: String,
}

impl ReferenceRecord {
    #[inline]
    #[must_use]
    pub fn new(problem: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            problem: problem.into(),
            category: category.into(),
        }
    }
}

/// An unlabeled problem from the target corpus.
///
/// `original_index` preserves source ordering so results can be written back
/// into the output document in the same positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRecord {
    pub problem: String,
    pub original_index: usize,
}

impl TargetRecord {
    #[inline]
    #[must_use]
    pub fn new(problem: impl Into<String>, original_index: usize) -> Self {
        Self {
            problem: problem.into(),
            original_index,
        }
    }
}

/// What the matcher decided for a single target record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Category of the best-matching reference record.
    pub category: String,
    /// Percentage-scaled similarity, in `[0, 100]`, rounded to one decimal.
    pub confidence: f32,
    /// Problem text of the best-matching reference record, truncated.
    pub similar_reference: String,
}

impl MatchOutcome {
    /// Outcome when the reference corpus is empty.
    #[must_use]
    pub fn uncategorized() -> Self {
        Self {
            category: UNCATEGORIZED.to_string(),
            confidence: 0.0,
            similar_reference: NO_REFERENCE.to_string(),
        }
    }

    /// Outcome when scoring a record failed. The run continues with this
    /// sentinel instead of aborting.
    #[must_use]
    pub fn failure() -> Self {
        Self {
            category: MATCH_ERROR.to_string(),
            confidence: 0.0,
            similar_reference: PROCESSING_ERROR.to_string(),
        }
    }
}

/// One categorized target problem.
///
/// The result sequence of a run has exactly one entry per target record,
/// ordered by `original_index`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub problem: String,
    pub category: String,
    pub confidence: f32,
    pub similar_reference: String,
}

impl MatchResult {
    #[must_use]
    pub fn new(problem: impl Into<String>, outcome: MatchOutcome) -> Self {
        Self {
            problem: problem.into(),
            category: outcome.category,
            confidence: outcome.confidence,
            similar_reference: outcome.similar_reference,
        }
    }
}
