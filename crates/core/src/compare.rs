//! Corpus-level comparison coordinator.
//!
//! Ties extraction, aggregation, thresholds, and report building together for
//! a whole snapshot corpus. Frontends hand over the file list and options and
//! get back the ranked report plus the corpus stats they need for diagnostic
//! messages.

use std::path::PathBuf;

use thiserror::Error;

use crate::aggregate::FrequencyAggregator;
use crate::filter::FilterOptions;
use crate::report::{build_report, ReportEntry};
use crate::snapshot::{extract_strings, ReadStrategy, SnapshotError};
use crate::threshold::{thresholds, Thresholds};

/// Error type for comparison runs.
#[derive(Debug, Error)]
pub enum CompareError {
    /// The corpus contained no snapshot files at all.
    #[error("No heap snapshots found to compare")]
    NoSnapshotsFound,

    /// Exactly one snapshot; recurrence across files is undefined.
    #[error("Only one heap snapshot found ({}); nothing to compare against", .path.display())]
    OnlyOneSnapshot { path: PathBuf },

    /// A snapshot failed to read or parse. The whole run aborts so the
    /// snapshot count used for thresholds stays honest; silently skipping a
    /// corrupt file would shift the denominator behind the user's back.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// Convenience result type for comparison runs.
pub type CompareResult<T> = Result<T, CompareError>;

/// Request to compare a corpus of snapshot files.
#[derive(Debug, Clone)]
pub struct CompareRequest {
    /// Snapshot files to process, in caller-chosen order. The order does not
    /// affect the outcome.
    pub files: Vec<PathBuf>,
    /// Noise-filter configuration applied to every candidate string.
    pub filter: FilterOptions,
    /// Parsing strategy for every file in the corpus.
    pub strategy: ReadStrategy,
}

impl CompareRequest {
    /// Build a request with default filtering and strategy.
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self { files, filter: FilterOptions::default(), strategy: ReadStrategy::default() }
    }
}

/// Result of comparing a snapshot corpus.
#[derive(Debug, Clone)]
pub struct CompareOutcome {
    /// Number of snapshots processed; echoed for frontend diagnostics.
    pub total_snapshots: usize,
    /// Thresholds derived from the corpus size.
    pub thresholds: Thresholds,
    /// Ranked report entries surviving the threshold filter. May be empty;
    /// a corpus with no recurring strings is a valid outcome.
    pub entries: Vec<ReportEntry>,
}

/// Compare all snapshots in the request and build the ranked report.
///
/// Files are processed sequentially; each snapshot's deduplicated string set
/// is merged into a single owned accumulator. The first malformed or
/// unreadable snapshot aborts the run with the offending path.
pub fn run_compare(request: &CompareRequest) -> CompareResult<CompareOutcome> {
    match request.files.as_slice() {
        [] => return Err(CompareError::NoSnapshotsFound),
        [only] => return Err(CompareError::OnlyOneSnapshot { path: only.clone() }),
        _ => {}
    }

    let mut aggregator = FrequencyAggregator::new();
    for path in &request.files {
        let snapshot_strings = extract_strings(path, &request.filter, request.strategy)?;
        aggregator.merge(snapshot_strings);
    }

    let total_snapshots = aggregator.snapshots_merged();
    let thresholds = thresholds(total_snapshots);
    let entries = build_report(aggregator.counts(), &thresholds);

    Ok(CompareOutcome { total_snapshots, thresholds, entries })
}
