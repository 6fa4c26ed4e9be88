//! # categorix
//!
//! Similarity-based text categorization for XML corpora.
//!
//! categorix reads a reference corpus of labeled problem texts and a target
//! corpus of unlabeled ones, scores every target against every reference with
//! cosine similarity over bag-of-words term frequencies, and writes back a
//! copy of the target document with a category annotation on each record.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! categorix --reference referans.xml --target sorunlar.xml --output-dir ./out
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use categorix::prelude::*;
//!
//! let reference_xml = r#"<sikayetler>
//!     <sikayet><problem>sunucu çöktü</problem><kategori>Altyapı</kategori></sikayet>
//! </sikayetler>"#;
//! let target_xml = "<problems><problem>sunucu çöktü tekrar</problem></problems>";
//!
//! let (results, output) = categorize_documents(reference_xml, target_xml).unwrap();
//! assert_eq!(results[0].category, "Altyapı");
//! assert!(output.contains("<category>Altyapı</category>"));
//! ```
//!
//! ## Crate Structure
//!
//! categorix is composed of several crates:
//!
//! - `categorix-core` - Vectorization, similarity scoring and matching
//! - `categorix-document` - XML parsing and result document assembly
//! - `categorix-engine` - Pipeline orchestration, file IO and run statistics

// Re-export core types
pub use categorix_core::{
    similarity, tokenize, FeatureVector, MatchOutcome, MatchResult, Matcher, ReferenceRecord,
    TargetRecord, Vocabulary,
};

// Re-export document handling
pub use categorix_document::{annotate_target, parse_reference, parse_target};

// Re-export the engine
pub use categorix_engine::{
    categorize_documents, category_counts, run, Error, Result, RunStats, RunSummary,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        categorize_documents, run, similarity, MatchResult, Matcher, ReferenceRecord, RunStats,
        RunSummary, TargetRecord, Vocabulary,
    };
}
