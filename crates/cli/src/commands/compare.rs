use std::fs;

use anyhow::{anyhow, Context, Result};
use memsieve_core::compare::{run_compare, CompareRequest};
use memsieve_core::filter::FilterOptions;
use memsieve_core::report::render_report;
use memsieve_core::snapshot::ReadStrategy;

use crate::{canonicalize_or_current, discover_snapshots};

/// Validate a `--strategy` value.
pub fn parse_strategy(value: &str) -> Result<ReadStrategy> {
    match value {
        "auto" => Ok(ReadStrategy::Auto),
        "bulk" => Ok(ReadStrategy::Bulk),
        "streaming" => Ok(ReadStrategy::Streaming),
        other => Err(anyhow!("Invalid strategy '{}'. Allowed: auto, bulk, streaming", other)),
    }
}

/// Compare all snapshots found in `dir` and route the rendered report to
/// `file` (overwritten) or stdout.
pub fn compare_command(
    dir: &str,
    file: Option<String>,
    exclude: Vec<String>,
    min_length: usize,
    max_length: usize,
    strategy: &str,
    json: bool,
) -> Result<()> {
    let strategy = parse_strategy(strategy)?;
    let dir_path = canonicalize_or_current(dir)?;
    if !dir_path.is_dir() {
        return Err(anyhow!("Input dir {} does not exist", dir_path.display()));
    }

    let files = discover_snapshots(&dir_path)?;
    if !json {
        for path in &files {
            println!("reading {}", path.display());
        }
    }

    let request = CompareRequest {
        files,
        filter: FilterOptions::new(min_length, max_length).with_exclude(exclude),
        strategy,
    };
    let outcome = run_compare(&request)
        .with_context(|| format!("Failed to compare snapshots in {}", dir_path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.entries)?);
        return Ok(());
    }

    println!("Read {} snapshots", outcome.total_snapshots);
    println!("Searching for strings with >= {} entries", outcome.thresholds.min_count);
    if let Some(exclude_count) = outcome.thresholds.exclude_count {
        println!("excluding strings present in all {} snapshots", exclude_count);
    }

    if outcome.entries.is_empty() {
        println!("No common strings found");
    } else {
        println!("Found {} common strings", outcome.entries.len());
    }

    let rendered = render_report(&outcome.entries);
    match file {
        Some(out_path) => {
            fs::write(&out_path, &rendered)
                .with_context(|| format!("Failed to write report to {out_path}"))?;
            println!("Report written to {out_path}");
        }
        None => {
            if !rendered.is_empty() {
                println!("{rendered}");
            }
        }
    }

    Ok(())
}
