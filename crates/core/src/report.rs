//! Report filtering, ordering, and rendering.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::threshold::Thresholds;

/// One surviving (string, count) pair destined for the ranked report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub string: String,
    pub count: usize,
}

/// Filter the aggregated counts by the thresholds and order the survivors.
///
/// An entry is kept iff `count >= min_count` and `count` is not the exclusion
/// count. Ordering is descending by count with ties broken by ascending
/// byte-wise string order, so the result never depends on map iteration order
/// or insertion order.
pub fn build_report(counts: &HashMap<String, usize>, thresholds: &Thresholds) -> Vec<ReportEntry> {
    let mut entries: Vec<ReportEntry> = counts
        .iter()
        .filter(|(_, &count)| {
            count >= thresholds.min_count && Some(count) != thresholds.exclude_count
        })
        .map(|(string, &count)| ReportEntry { string: string.clone(), count })
        .collect();

    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.string.cmp(&b.string)));
    entries
}

/// Render entries as `<string>: <count>` lines joined by single newlines, with
/// no trailing newline.
///
/// An empty slice renders as an empty string; "nothing recurred" is a valid
/// outcome, not an error.
pub fn render_report(entries: &[ReportEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("{}: {}", entry.string, entry.count))
        .collect::<Vec<_>>()
        .join("\n")
}
