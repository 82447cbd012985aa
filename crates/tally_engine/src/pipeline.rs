use std::io::{self, Write};
use std::path::PathBuf;

use thiserror::Error;

use tally_core::{aggregate, Mode};
use tally_logging::{tally_debug, tally_info};

use crate::input::{read_tokens, InputError};
use crate::persist::{write_atomic, PersistError};

/// Everything the pipeline needs for one run, resolved at the CLI boundary.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub mode: Mode,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Mirror an identical copy of the report to stdout.
    pub mirror_to_stdout: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub token_count: usize,
    pub total_items: usize,
    pub unique_items: usize,
    pub output_path: PathBuf,
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("input error: {0}")]
    Input(#[from] InputError),
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
    #[error("error mirroring report to console: {0}")]
    Mirror(#[source] io::Error),
}

/// Runs the whole pipeline: read and tokenize the input file, aggregate in
/// the selected mode, render once, then emit the identical text to every
/// destination (stdout mirror first, then the atomically written file).
pub fn build_frequency_report(options: &ReportOptions) -> Result<ReportSummary, PipelineError> {
    let tokens = read_tokens(&options.input_path)?;

    let table = aggregate(options.mode, &tokens);
    let report = table.render();
    tally_debug!(
        "aggregated {} records in {:?} mode",
        table.unique_items(),
        options.mode
    );

    if options.mirror_to_stdout {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(report.as_bytes())
            .and_then(|()| handle.flush())
            .map_err(PipelineError::Mirror)?;
    }

    write_atomic(&options.output_path, &report)?;

    let summary = ReportSummary {
        token_count: tokens.len(),
        total_items: table.total_items(),
        unique_items: table.unique_items(),
        output_path: options.output_path.clone(),
    };
    tally_info!(
        "report written to {}: {} total, {} unique",
        summary.output_path.display(),
        summary.total_items,
        summary.unique_items
    );
    Ok(summary)
}
