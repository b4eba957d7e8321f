//! Noise filtering for candidate strings.
//!
//! Heap-snapshot string tables are dominated by entries that are useless for
//! leak hunting: short identifiers, serialized function bodies, module paths,
//! and engine-internal artifacts. `is_noise` is the single predicate deciding
//! whether a candidate is worth counting at all.

use serde::{Deserialize, Serialize};

/// Default minimum trimmed length for a candidate to be considered.
pub const DEFAULT_MIN_LENGTH: usize = 20;

/// Default maximum trimmed length for a candidate to be considered.
pub const DEFAULT_MAX_LENGTH: usize = 500;

/// Prefixes that mark paths, accessors, or expressions rather than data.
const NOISE_PREFIXES: &[&str] =
    &["application", "get ", "system ", "../", "./", "module.exports", "("];

/// Substrings that mark code fragments or engine internals.
const NOISE_SUBSTRINGS: &[&str] = &["use strict", "function", "WeakMap"];

/// Filtering configuration for candidate strings.
///
/// Lengths are byte lengths of the trimmed candidate. `exclude` holds
/// user-supplied substrings; a candidate containing any of them is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Minimum trimmed length; shorter candidates are noise.
    pub min_length: usize,
    /// Maximum trimmed length; longer candidates are noise.
    pub max_length: usize,
    /// User-supplied exclusion substrings.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self { min_length: DEFAULT_MIN_LENGTH, max_length: DEFAULT_MAX_LENGTH, exclude: Vec::new() }
    }
}

impl FilterOptions {
    /// Create options with explicit length bounds and no exclusions.
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self { min_length, max_length, exclude: Vec::new() }
    }

    /// Builder-style helper to attach exclusion substrings.
    pub fn with_exclude(mut self, exclude: Vec<String>) -> Self {
        self.exclude = exclude;
        self
    }
}

/// Decide whether a candidate string is noise.
///
/// The candidate is trimmed before any rule is applied. Returns `true` when
/// the candidate should be dropped:
/// - trimmed length outside `[min_length, max_length]`
/// - contains a strict-mode pragma, `function`, or `WeakMap`
/// - starts with a path/accessor/expression prefix
/// - contains any user-supplied exclusion substring
///
/// Pure predicate with no side effects. Applying it twice never rejects a
/// string it previously accepted (trimming is idempotent).
pub fn is_noise(candidate: &str, options: &FilterOptions) -> bool {
    let trimmed = candidate.trim();

    trimmed.len() < options.min_length
        || trimmed.len() > options.max_length
        || NOISE_SUBSTRINGS.iter().any(|s| trimmed.contains(s))
        || NOISE_PREFIXES.iter().any(|p| trimmed.starts_with(p))
        || options.exclude.iter().any(|e| trimmed.contains(e.as_str()))
}
