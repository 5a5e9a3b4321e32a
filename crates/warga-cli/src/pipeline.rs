//! Staged cleaning run: ingest, transform, write.
//!
//! Each stage takes the output of the previous one; only file-level
//! problems abort the run. Record-level problems are resolved inside
//! the transform stage and surfaced as report counters.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info;

use warga_ingest::read_csv_table;
use warga_output::write_csv_table;
use warga_transform::{TransformConfig, TransformReport, Transformer};

/// Options for one cleaning run, fully resolved by the caller.
///
/// The reference date is resolved here, in the outermost layer; the
/// transform core never reads a clock.
#[derive(Debug, Clone)]
pub struct CleanOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub reference_date: NaiveDate,
    pub dry_run: bool,
}

/// Result of a completed cleaning run.
#[derive(Debug)]
pub struct CleanResult {
    pub input: PathBuf,
    /// Final artifact path; `None` for a dry run.
    pub output: Option<PathBuf>,
    pub report: TransformReport,
}

/// Default output path: `<input stem>_FINAL.csv` beside the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "output".to_string(), |s| s.to_string_lossy().into_owned());
    input.with_file_name(format!("{stem}_FINAL.csv"))
}

/// Run the full pipeline: read the raw CSV, transform every record,
/// publish the canonical CSV.
///
/// On any error the output path is left untouched; the writer stages
/// through a temporary file, so a failed or interrupted run never
/// leaves a partial artifact.
pub fn run_clean(options: &CleanOptions) -> Result<CleanResult> {
    info!(input = %options.input.display(), "ingesting raw registry data");
    let raw = read_csv_table(&options.input)
        .with_context(|| format!("read input {}", options.input.display()))?;

    let transformer = Transformer::new(TransformConfig::new(options.reference_date));
    let (canonical, report) = transformer.transform(&raw);

    let output = if options.dry_run {
        info!("dry run, skipping output");
        None
    } else {
        let path = options
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&options.input));
        write_csv_table(&canonical, &path)
            .with_context(|| format!("write output {}", path.display()))?;
        Some(path)
    };

    Ok(CleanResult {
        input: options.input.clone(),
        output,
        report,
    })
}
