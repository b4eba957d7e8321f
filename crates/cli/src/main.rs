use anyhow::Result;
use clap::{Parser, Subcommand};
use memsieve::commands::{compare_command, list_snapshots_command};

/// Cross-snapshot string comparison for hunting memory leaks.
///
/// This CLI is a thin wrapper around `memsieve-core` (exposed in code as
/// `memsieve_core`). All substantive logic lives in the library so it can be
/// tested thoroughly and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "memsieve",
    version,
    about = "Find strings that recur across heap snapshots",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare all snapshots in a directory and report recurring strings.
    ///
    /// Files whose name contains `.heapsnapshot` are treated as snapshot
    /// inputs; everything else in the directory is ignored. Strings present
    /// in enough snapshots (but not in all of them, for corpora of three or
    /// more) are ranked by how many snapshots retain them.
    Compare {
        /// Input directory to scan for snapshot files.
        #[arg(short = 'd', long)]
        dir: String,

        /// Write the report to this file instead of stdout (overwritten).
        #[arg(short = 'f', long)]
        file: Option<String>,

        /// Drop candidate strings containing this substring (repeatable).
        #[arg(short = 'e', long = "exclude")]
        exclude: Vec<String>,

        /// Minimal candidate string length.
        #[arg(long = "min", default_value_t = memsieve_core::filter::DEFAULT_MIN_LENGTH)]
        min_length: usize,

        /// Maximal candidate string length.
        #[arg(long = "max", default_value_t = memsieve_core::filter::DEFAULT_MAX_LENGTH)]
        max_length: usize,

        /// Parsing strategy: auto, bulk, or streaming.
        #[arg(long, default_value = "auto")]
        strategy: String,

        /// Emit report entries as JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List the snapshot files that would be compared, without parsing them.
    List {
        /// Input directory to scan for snapshot files.
        #[arg(short = 'd', long)]
        dir: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Compare { dir, file, exclude, min_length, max_length, strategy, json } => {
            compare_command(&dir, file, exclude, min_length, max_length, &strategy, json)?
        }
        Command::List { dir, json } => list_snapshots_command(&dir, json)?,
    }

    Ok(())
}
