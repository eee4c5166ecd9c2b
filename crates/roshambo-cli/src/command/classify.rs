use std::{fs, path::PathBuf};

use anyhow::Context as _;
use roshambo_engine::{HandSnapshot, classify};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ClassifyArg {
    /// Path to a JSON array of hand snapshots
    path: PathBuf,
}

/// Runs recorded snapshots through the classifier, one line per frame.
///
/// Frames that fail the confidence floor are reported as skipped, matching
/// what the capture boundary does in a live match: the frame is dropped
/// before classification is ever attempted.
pub(crate) fn run(arg: &ClassifyArg) -> anyhow::Result<()> {
    let text = fs::read_to_string(&arg.path)
        .with_context(|| format!("failed to read {}", arg.path.display()))?;
    let snapshots: Vec<HandSnapshot> = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse {}", arg.path.display()))?;

    for (index, snapshot) in snapshots.iter().enumerate() {
        if snapshot.clears_confidence_floor() {
            println!("{index}: {}", classify(snapshot));
        } else {
            println!("{index}: skipped (low confidence)");
        }
    }
    Ok(())
}
