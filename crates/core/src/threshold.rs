//! Occurrence-count thresholds derived from the corpus size.

/// Occurrence-count bounds deciding which aggregated strings are interesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// Minimum number of snapshots a string must appear in.
    pub min_count: usize,
    /// Strings appearing in exactly this many snapshots are universal
    /// boilerplate and excluded from the report. `None` disables the
    /// exclusion.
    pub exclude_count: Option<usize>,
}

/// Compute thresholds for a corpus of `total_snapshots` files.
///
/// With exactly two snapshots, "appears in both" is the only meaningful repeat
/// signal: `min_count` is 2 and nothing is treated as universal boilerplate.
/// With more snapshots, majority presence (half the corpus, rounded half up:
/// 3→2, 4→2, 5→3, 7→4) surfaces steadily-retained strings, while a string
/// present in literally every snapshot is a constant rather than a leak
/// signal and is excluded.
///
/// Callers must reject corpora smaller than two snapshots before calling;
/// a single snapshot has nothing to be compared against.
pub fn thresholds(total_snapshots: usize) -> Thresholds {
    if total_snapshots == 2 {
        Thresholds { min_count: 2, exclude_count: None }
    } else {
        Thresholds {
            min_count: total_snapshots.div_ceil(2),
            exclude_count: Some(total_snapshots),
        }
    }
}
