use chrono::Utc;
use clap::Args;
use serde_json::{json, Value};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ratio_analyzer_core::compute_ratios;
use ratio_analyzer_core::export::{export_filename, export_to_csv};

use super::analysis::{load_inputs, FinancialArgs};

/// Arguments for CSV export
#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub financials: FinancialArgs,

    /// Directory to write financial-ratios-<timestamp>.csv into
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,
}

pub fn run_export(args: ExportArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let inputs = load_inputs(&args.financials)?;
    let results = compute_ratios(&inputs);

    let generated_at = Utc::now();
    let blob = export_to_csv(&inputs, &results, generated_at)?;
    let path = args.dir.join(export_filename(generated_at));

    write_atomically(&path, &blob)
        .map_err(|e| format!("Export failed, no file written ({}): {}", path.display(), e))?;

    tracing::info!(path = %path.display(), bytes = blob.len(), "wrote ratio export");

    Ok(json!({
        "result": {
            "path": path.display().to_string(),
            "bytes": blob.len(),
            "rows": blob.lines().count(),
            "generated_at": generated_at.to_rfc3339(),
        }
    }))
}

/// Write to a sibling `.partial` file and rename it into place. On failure
/// the partial file is removed, so the target is either complete or absent.
fn write_atomically(path: &Path, contents: &str) -> io::Result<()> {
    let mut partial = path.as_os_str().to_owned();
    partial.push(".partial");
    let partial = PathBuf::from(partial);

    let outcome = fs::write(&partial, contents).and_then(|_| fs::rename(&partial, path));
    if outcome.is_err() {
        let _ = fs::remove_file(&partial);
    }
    outcome
}
