use std::fs;

use anyhow::{anyhow, Context, Result};
use serde::Serialize;

use crate::{canonicalize_or_current, discover_snapshots};

/// Row describing one discovered snapshot file.
#[derive(Debug, Serialize)]
pub struct SnapshotFileInfo {
    pub name: String,
    pub path: String,
    pub size_bytes: u64,
}

/// List the snapshot files a compare run would process.
pub fn list_snapshots_command(dir: &str, json: bool) -> Result<()> {
    let dir_path = canonicalize_or_current(dir)?;
    if !dir_path.is_dir() {
        return Err(anyhow!("Input dir {} does not exist", dir_path.display()));
    }

    let files = discover_snapshots(&dir_path)?;
    let mut infos = Vec::new();
    for path in &files {
        let meta =
            fs::metadata(path).with_context(|| format!("Failed to stat {}", path.display()))?;
        let name = path.file_name().and_then(|os| os.to_str()).unwrap_or_default().to_string();
        infos.push(SnapshotFileInfo {
            name,
            path: path.display().to_string(),
            size_bytes: meta.len(),
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    println!("Snapshots ({}):", infos.len());
    if infos.is_empty() {
        println!("  (none)");
        return Ok(());
    }

    for info in infos {
        println!("  - {} ({} bytes)", info.name, info.size_bytes);
    }

    Ok(())
}
