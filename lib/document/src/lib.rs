//! # categorix Document
//!
//! XML ingestion and result assembly for the categorix engine.
//!
//! Parsing ([`parse_reference`], [`parse_target`]) turns loosely structured
//! corpora into typed records via ordered alias probing, and assembly
//! ([`annotate_target`]) writes categorization results back into a copy of
//! the original target document.

pub mod assembler;
pub mod error;
pub mod parser;

pub use assembler::{annotate_target, CATEGORY_ELEMENT};
pub use error::{Error, Result};
pub use parser::{parse_reference, parse_target};
