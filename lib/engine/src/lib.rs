//! # categorix Engine
//!
//! Run orchestration for categorix: file IO, the categorization pipeline and
//! run statistics. The engine owns the fail-fast policy; the crates below it
//! (core, document) never abort a run on their own.

pub mod error;
pub mod pipeline;
pub mod stats;

pub use error::{Error, Result};
pub use pipeline::{categorize_documents, run, RunSummary};
pub use stats::{category_counts, RunStats};
