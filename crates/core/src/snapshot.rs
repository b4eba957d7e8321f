//! Snapshot string-table extraction.
//!
//! A heap snapshot is one large JSON object whose `strings` member holds the
//! deduplicated string table. Everything else in the document (nodes, edges,
//! sample data) is irrelevant here and, for real snapshots, enormous:
//! hundreds of megabytes to gigabytes on disk.
//!
//! Extraction therefore comes in two functionally equivalent strategies
//! unified behind [`extract_strings`]:
//! - [`ReadStrategy::Bulk`] parses the whole document into memory and indexes
//!   the string table directly. Simple, but memory scales with file size.
//! - [`ReadStrategy::Streaming`] walks the JSON incrementally, feeding each
//!   string-table element through the filter as it is parsed and skipping all
//!   other members without materializing them. Memory stays bounded by the
//!   surviving string set.
//!
//! Both strategies produce the identical filtered set for the same input.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::de::{DeserializeSeed, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;
use thiserror::Error;

use crate::filter::{is_noise, FilterOptions};

/// Top-level member holding the snapshot's string table.
pub const STRING_TABLE_KEY: &str = "strings";

/// Files at or below this size are parsed in one shot under
/// [`ReadStrategy::Auto`]; larger files stream.
const BULK_MAX_BYTES: u64 = 64 * 1024 * 1024;

/// Error type for snapshot extraction.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Underlying read failure (permissions, disk, truncated file).
    #[error("Failed to read snapshot {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON or lacks the string table.
    #[error("Malformed snapshot {}: {reason}", .path.display())]
    Malformed { path: PathBuf, reason: String },
}

/// Convenience result type for snapshot operations.
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// How to parse a snapshot file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadStrategy {
    /// Bulk for small files, streaming for large ones.
    #[default]
    Auto,
    /// Parse the entire document into memory first.
    Bulk,
    /// Incremental parse; never materializes the whole document.
    Streaming,
}

/// Extract the filtered, deduplicated string set from one snapshot file.
///
/// Entries are trimmed before filtering; an entry occurring multiple times in
/// the table contributes a single element to the returned set.
pub fn extract_strings(
    path: &Path,
    options: &FilterOptions,
    strategy: ReadStrategy,
) -> SnapshotResult<HashSet<String>> {
    match strategy {
        ReadStrategy::Bulk => extract_bulk(path, options),
        ReadStrategy::Streaming => extract_streaming(path, options),
        ReadStrategy::Auto => {
            let len = fs::metadata(path)
                .map_err(|source| SnapshotError::Io { path: path.to_path_buf(), source })?
                .len();
            if len <= BULK_MAX_BYTES {
                extract_bulk(path, options)
            } else {
                extract_streaming(path, options)
            }
        }
    }
}

/// Whole-document shape for the bulk strategy. Unknown members are ignored.
#[derive(Debug, Deserialize)]
struct SnapshotDocument {
    strings: Vec<String>,
}

fn extract_bulk(path: &Path, options: &FilterOptions) -> SnapshotResult<HashSet<String>> {
    let body = fs::read_to_string(path)
        .map_err(|source| SnapshotError::Io { path: path.to_path_buf(), source })?;
    let document: SnapshotDocument =
        serde_json::from_str(&body).map_err(|err| classify_json_error(path, err))?;

    let mut out = HashSet::new();
    for candidate in document.strings {
        let trimmed = candidate.trim();
        if !is_noise(trimmed, options) {
            out.insert(trimmed.to_string());
        }
    }
    Ok(out)
}

fn extract_streaming(path: &Path, options: &FilterOptions) -> SnapshotResult<HashSet<String>> {
    let file = fs::File::open(path)
        .map_err(|source| SnapshotError::Io { path: path.to_path_buf(), source })?;
    let mut deserializer = serde_json::Deserializer::from_reader(BufReader::new(file));

    let mut out = HashSet::new();
    let found = DocumentSeed { options, out: &mut out }
        .deserialize(&mut deserializer)
        .map_err(|err| classify_json_error(path, err))?;
    deserializer.end().map_err(|err| classify_json_error(path, err))?;

    if !found {
        return Err(SnapshotError::Malformed {
            path: path.to_path_buf(),
            reason: format!("missing `{STRING_TABLE_KEY}` string table"),
        });
    }
    Ok(out)
}

/// Split serde_json failures into transport errors and parse errors.
fn classify_json_error(path: &Path, err: serde_json::Error) -> SnapshotError {
    if err.classify() == serde_json::error::Category::Io {
        SnapshotError::Io { path: path.to_path_buf(), source: err.into() }
    } else {
        SnapshotError::Malformed { path: path.to_path_buf(), reason: err.to_string() }
    }
}

/// Seed walking the top-level snapshot object. Consumes the string table as it
/// is parsed and skips every other member via [`IgnoredAny`]. Yields whether
/// the string table was present.
struct DocumentSeed<'a> {
    options: &'a FilterOptions,
    out: &'a mut HashSet<String>,
}

impl<'de, 'a> DeserializeSeed<'de> for DocumentSeed<'a> {
    type Value = bool;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(self)
    }
}

impl<'de, 'a> Visitor<'de> for DocumentSeed<'a> {
    type Value = bool;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a heap snapshot object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let Self { options, out } = self;
        let mut found = false;
        while let Some(key) = map.next_key::<String>()? {
            if key == STRING_TABLE_KEY {
                map.next_value_seed(StringTableSeed { options, out: &mut *out })?;
                found = true;
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(found)
    }
}

/// Seed consuming the string-table array one element at a time, filtering and
/// deduplicating into the output set as elements are produced.
struct StringTableSeed<'a> {
    options: &'a FilterOptions,
    out: &'a mut HashSet<String>,
}

impl<'de, 'a> DeserializeSeed<'de> for StringTableSeed<'a> {
    type Value = ();

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(self)
    }
}

impl<'de, 'a> Visitor<'de> for StringTableSeed<'a> {
    type Value = ();

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an array of string-table entries")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while let Some(candidate) = seq.next_element::<String>()? {
            let trimmed = candidate.trim();
            if !is_noise(trimmed, self.options) {
                self.out.insert(trimmed.to_string());
            }
        }
        Ok(())
    }
}
