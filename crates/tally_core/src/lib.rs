//! Tally core: pure tokenization, aggregation, and report rendering.
mod aggregate;
mod frequency;
mod report;
mod token;
mod twogram;

pub use aggregate::{aggregate, compute_twogram_freq, compute_word_freq, FrequencyTable, Mode};
pub use frequency::Frequency;
pub use report::{render_report, unique_count};
pub use token::{tokenize_line, tokenize_lines, Token};
pub use twogram::TwoGram;
