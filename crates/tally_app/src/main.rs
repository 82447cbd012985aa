//! Command-line entry point for the word / two-gram frequency reporter.

mod cli;
mod logging;

use std::env;
use std::process;

use anyhow::Context;

use cli::{CliArgs, USAGE};
use logging::LogDestination;
use tally_engine::{build_frequency_report, ReportOptions, ReportSummary};
use tally_logging::{tally_error, tally_info};

fn main() {
    let args = match cli::parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };

    logging::initialize(LogDestination::File);

    if let Err(err) = run(&args) {
        tally_error!("run failed: {err:#}");
        eprintln!("An error occurred while processing files:\n  {err:#}");
        process::exit(1);
    }
}

fn run(args: &CliArgs) -> anyhow::Result<ReportSummary> {
    let options = ReportOptions {
        mode: args.mode,
        input_path: args.input_path.clone(),
        output_path: args.output_path.clone(),
        mirror_to_stdout: args.verbose,
    };

    let summary = build_frequency_report(&options)
        .with_context(|| format!("frequency report for {}", args.input_path.display()))?;

    tally_info!(
        "processed {} tokens into {} report lines",
        summary.token_count,
        summary.unique_items
    );
    Ok(summary)
}
