//! Tally engine: file IO pipeline around the pure frequency core.
mod input;
mod persist;
mod pipeline;

pub use input::{read_tokens, InputError};
pub use persist::{write_atomic, PersistError};
pub use pipeline::{build_frequency_report, PipelineError, ReportOptions, ReportSummary};
