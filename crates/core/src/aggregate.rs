//! Cross-snapshot frequency aggregation.

use std::collections::{HashMap, HashSet};

/// Owned accumulator mapping each string to the number of distinct snapshots
/// it appeared in.
///
/// Merging is commutative and associative, so the final counts do not depend
/// on the order snapshot sets are merged in: processing files in any
/// permutation (or in parallel, with the merges funneled through one owner)
/// yields an identical mapping. The aggregator is the only mutable state in a
/// comparison run and is passed explicitly between merge steps rather than
/// shared.
#[derive(Debug, Default)]
pub struct FrequencyAggregator {
    counts: HashMap<String, usize>,
    snapshots_merged: usize,
}

impl FrequencyAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one snapshot's deduplicated string set.
    ///
    /// Each unique string contributes exactly 1 to its global count, no matter
    /// how many times it occurred inside that snapshot: the count measures
    /// presence-across-snapshots, not total occurrences. Every count stays in
    /// `1..=snapshots_merged`.
    pub fn merge(&mut self, snapshot_strings: HashSet<String>) {
        self.snapshots_merged += 1;
        for string in snapshot_strings {
            *self.counts.entry(string).or_insert(0) += 1;
        }
    }

    /// Number of snapshot sets merged so far.
    pub fn snapshots_merged(&self) -> usize {
        self.snapshots_merged
    }

    /// Global string → distinct-snapshot-count mapping.
    pub fn counts(&self) -> &HashMap<String, usize> {
        &self.counts
    }

    /// Consume the aggregator, yielding the final counts.
    pub fn into_counts(self) -> HashMap<String, usize> {
        self.counts
    }
}
