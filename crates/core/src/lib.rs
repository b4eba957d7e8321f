//! memsieve-core
//!
//! Core library for comparing string tables across heap snapshots.
//!
//! This crate extracts the deduplicated string table from each snapshot file,
//! filters out noise, counts in how many distinct snapshots each string
//! appears, and builds a deterministic ranked report of the strings that recur
//! across the corpus. Strings that keep showing up from one garbage-collection
//! cycle to the next are prime suspects for retained/leaked objects.
//!
//! The goal is to keep all substantive logic here so it is fully testable and
//! reusable from multiple frontends (CLI, batch tooling, etc.). Frontends own
//! file discovery, option parsing, and report routing.

pub mod aggregate;
pub mod compare;
pub mod filter;
pub mod report;
pub mod snapshot;
pub mod threshold;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
