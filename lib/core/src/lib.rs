//! # categorix Core
//!
//! Core library for the categorix categorization engine.
//!
//! This crate provides the pure, synchronous building blocks:
//!
//! - [`FeatureVector`] - L1-normalized term-frequency vector for one text
//! - [`Vocabulary`] - shared token-to-dimension mapping for one run
//! - [`similarity`] - cosine similarity between two raw texts
//! - [`Matcher`] - best-category search against a reference corpus
//! - Record types ([`ReferenceRecord`], [`TargetRecord`], [`MatchResult`])
//!
//! ## Example
//!
//! ```rust
//! use categorix_core::{Matcher, ReferenceRecord, Vocabulary};
//!
//! let references = vec![
//!     ReferenceRecord::new("sunucu çöktü", "Altyapı"),
//!     ReferenceRecord::new("kullanıcı şifre unuttu", "Destek"),
//! ];
//! let target = "sunucu çöktü tekrar";
//!
//! // One vocabulary per run, over every text taking part in it.
//! let vocabulary = Vocabulary::build(
//!     references
//!         .iter()
//!         .map(|r| r.problem.as_str())
//!         .chain([target]),
//! );
//!
//! let matcher = Matcher::new(references, &vocabulary);
//! let outcome = matcher.best_match_text(&vocabulary, target);
//! assert_eq!(outcome.category, "Altyapı");
//! ```

pub mod matcher;
pub mod record;
pub mod similarity;
pub mod vector;
pub mod vectorizer;

pub use matcher::{Matcher, SIMILAR_REFERENCE_MAX_CHARS};
pub use record::{
    MatchOutcome, MatchResult, ReferenceRecord, TargetRecord, MATCH_ERROR, NO_REFERENCE,
    PROCESSING_ERROR, UNCATEGORIZED,
};
pub use similarity::similarity;
pub use vector::FeatureVector;
pub use vectorizer::{tokenize, Vocabulary};
