use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub mod commands;

/// Canonicalize the input directory if possible, falling back to the given
/// string relative to the current working directory.
pub fn canonicalize_or_current(dir: &str) -> Result<PathBuf> {
    let path = Path::new(dir);
    if path == Path::new(".") {
        Ok(env::current_dir().context("Failed to get current directory")?)
    } else {
        // Try to canonicalize; if it fails (e.g., path does not exist),
        // join it with the current dir to get an absolute path.
        match path.canonicalize() {
            Ok(p) => Ok(p),
            Err(_) => {
                let cwd = env::current_dir().context("Failed to get current directory")?;
                Ok(cwd.join(path))
            }
        }
    }
}

/// Discover snapshot files in a directory.
///
/// Regular files whose name contains `.heapsnapshot` qualify; everything else
/// is ignored. Results are sorted by path so processing order (and progress
/// output) is deterministic.
pub fn discover_snapshots(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut snapshots = Vec::new();
    for entry in
        fs::read_dir(dir).with_context(|| format!("Failed to read input dir {}", dir.display()))?
    {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if !name.contains(".heapsnapshot") {
            continue;
        }
        snapshots.push(entry.path());
    }
    snapshots.sort();
    Ok(snapshots)
}
