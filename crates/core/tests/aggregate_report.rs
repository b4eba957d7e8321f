use std::collections::{HashMap, HashSet};

use memsieve_core::aggregate::FrequencyAggregator;
use memsieve_core::report::{build_report, render_report, ReportEntry};
use memsieve_core::threshold::{thresholds, Thresholds};

fn set(strings: &[&str]) -> HashSet<String> {
    strings.iter().map(|s| s.to_string()).collect()
}

fn counts(pairs: &[(&str, usize)]) -> HashMap<String, usize> {
    pairs.iter().map(|(s, c)| (s.to_string(), *c)).collect()
}

#[test]
fn merge_counts_presence_not_occurrences() {
    let mut aggregator = FrequencyAggregator::new();
    // The per-file set has already deduplicated; one set contributes 1 per key.
    aggregator.merge(set(&["alpha", "beta"]));
    aggregator.merge(set(&["alpha", "gamma"]));
    aggregator.merge(set(&["alpha"]));

    assert_eq!(aggregator.snapshots_merged(), 3);
    assert_eq!(aggregator.counts().get("alpha"), Some(&3));
    assert_eq!(aggregator.counts().get("beta"), Some(&1));
    assert_eq!(aggregator.counts().get("gamma"), Some(&1));
}

#[test]
fn counts_stay_within_corpus_bounds() {
    let mut aggregator = FrequencyAggregator::new();
    aggregator.merge(set(&["a", "b", "c"]));
    aggregator.merge(set(&["b", "c", "d"]));
    aggregator.merge(set(&["c", "d", "e"]));

    let merged = aggregator.snapshots_merged();
    for (string, &count) in aggregator.counts() {
        assert!(count >= 1, "count for {string} fell below 1");
        assert!(count <= merged, "count for {string} exceeds corpus size");
    }
}

#[test]
fn merge_order_is_irrelevant() {
    let sets =
        [set(&["alpha", "beta"]), set(&["beta", "gamma"]), set(&["alpha", "beta", "delta"])];

    let mut forward = FrequencyAggregator::new();
    for s in sets.iter().cloned() {
        forward.merge(s);
    }

    let mut backward = FrequencyAggregator::new();
    for s in sets.iter().rev().cloned() {
        backward.merge(s);
    }

    assert_eq!(forward.snapshots_merged(), backward.snapshots_merged());
    assert_eq!(forward.into_counts(), backward.into_counts());
}

#[test]
fn threshold_table_matches_rules() {
    assert_eq!(thresholds(2), Thresholds { min_count: 2, exclude_count: None });
    assert_eq!(thresholds(3), Thresholds { min_count: 2, exclude_count: Some(3) });
    assert_eq!(thresholds(4), Thresholds { min_count: 2, exclude_count: Some(4) });
    assert_eq!(thresholds(5), Thresholds { min_count: 3, exclude_count: Some(5) });
    assert_eq!(thresholds(7), Thresholds { min_count: 4, exclude_count: Some(7) });
}

#[test]
fn report_sorts_desc_by_count_then_lexicographic() {
    let counts = counts(&[("b", 3), ("a", 3), ("c", 5)]);
    let entries = build_report(&counts, &Thresholds { min_count: 2, exclude_count: None });

    let expected = vec![
        ReportEntry { string: "c".to_string(), count: 5 },
        ReportEntry { string: "a".to_string(), count: 3 },
        ReportEntry { string: "b".to_string(), count: 3 },
    ];
    assert_eq!(entries, expected);
}

#[test]
fn entries_below_min_count_are_dropped() {
    let counts = counts(&[("often", 4), ("rarely", 1)]);
    let entries = build_report(&counts, &Thresholds { min_count: 2, exclude_count: None });

    assert_eq!(entries, vec![ReportEntry { string: "often".to_string(), count: 4 }]);
}

#[test]
fn universal_strings_are_excluded() {
    let counts = counts(&[("Everywhere", 3), ("Majority", 2)]);
    let entries = build_report(&counts, &thresholds(3));

    assert_eq!(entries, vec![ReportEntry { string: "Majority".to_string(), count: 2 }]);
}

#[test]
fn two_snapshot_corpus_keeps_strings_present_in_both() {
    let counts = counts(&[("InBoth", 2), ("InOne", 1)]);
    let entries = build_report(&counts, &thresholds(2));

    assert_eq!(entries, vec![ReportEntry { string: "InBoth".to_string(), count: 2 }]);
}

#[test]
fn render_joins_lines_without_trailing_newline() {
    let entries = vec![
        ReportEntry { string: "LeakySingleton".to_string(), count: 4 },
        ReportEntry { string: "RetainedBuffer".to_string(), count: 3 },
    ];
    assert_eq!(render_report(&entries), "LeakySingleton: 4\nRetainedBuffer: 3");
}

#[test]
fn render_empty_report_is_empty_string() {
    assert_eq!(render_report(&[]), "");
}
