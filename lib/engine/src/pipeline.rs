//! End-to-end categorization pipeline.
//!
//! One run is self-contained: it parses both corpora, builds a vocabulary
//! over every text taking part in the run, scores each target record against
//! the reference corpus in parallel and assembles an annotated copy of the
//! target document. Nothing is shared between runs.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use categorix_core::{MatchResult, Matcher, Vocabulary};
use categorix_document::{annotate_target, parse_reference, parse_target};
use chrono::Local;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::stats::{category_counts, RunStats};

/// Everything a caller needs to report on a finished run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub stats: RunStats,
    pub category_counts: BTreeMap<String, usize>,
    pub results: Vec<MatchResult>,
    pub output_path: PathBuf,
}

/// Categorize a target corpus against a reference corpus.
///
/// Returns the per-record results in target order together with the
/// annotated result document. Fails fast when either corpus yields no
/// usable records.
pub fn categorize_documents(
    reference_xml: &str,
    target_xml: &str,
) -> Result<(Vec<MatchResult>, String)> {
    let references = parse_reference(reference_xml);
    if references.is_empty() {
        return Err(Error::NoReferenceData);
    }
    let targets = parse_target(target_xml);
    if targets.is_empty() {
        return Err(Error::NoTargetData);
    }
    info!(
        references = references.len(),
        targets = targets.len(),
        "corpora parsed"
    );

    let vocabulary = Vocabulary::build(
        references
            .iter()
            .map(|r| r.problem.as_str())
            .chain(targets.iter().map(|t| t.problem.as_str())),
    );
    debug!(dimensions = vocabulary.len(), "vocabulary built");

    let matcher = Matcher::new(references, &vocabulary);

    // Parallel map preserves target order in the collected results.
    let results: Vec<MatchResult> = targets
        .into_par_iter()
        .map(|target| {
            let outcome = matcher.best_match(&vocabulary.vectorize(&target.problem));
            MatchResult::new(target.problem, outcome)
        })
        .collect();

    let labels: Vec<&str> = results.iter().map(|r| r.category.as_str()).collect();
    let output_xml = annotate_target(target_xml, &labels)?;

    Ok((results, output_xml))
}

/// Run the pipeline on files and write the result document.
pub fn run(
    reference_path: &Path,
    target_path: &Path,
    output_dir: &Path,
) -> Result<RunSummary> {
    let started = Instant::now();

    let reference_xml = fs::read_to_string(reference_path)?;
    let target_xml = fs::read_to_string(target_path)?;

    let (results, output_xml) = categorize_documents(&reference_xml, &target_xml)?;

    fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join(output_file_name());
    fs::write(&output_path, output_xml)?;

    let stats = RunStats::from_results(&results, started.elapsed());
    info!(
        total = stats.total_processed,
        categories = stats.categories_found,
        avg_confidence = stats.avg_confidence,
        output = %output_path.display(),
        "run finished"
    );

    Ok(RunSummary {
        category_counts: category_counts(&results),
        stats,
        results,
        output_path,
    })
}

/// Unique result file name: timestamp for humans, a random suffix so that
/// two runs within the same second never collide.
fn output_file_name() -> String {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let suffix = Uuid::new_v4().simple().to_string();
    format!("kategorize_edilmis_{timestamp}_{}.xml", &suffix[..8])
}
