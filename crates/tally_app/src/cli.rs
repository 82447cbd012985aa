//! Hand-rolled argument parsing for the tally binary.
//!
//! All usage errors are detected here, before any file is opened or any
//! core logic runs.

use std::path::PathBuf;

use thiserror::Error;

use tally_core::Mode;

pub const USAGE: &str = "Usage: tally <word|two-gram> <input-file> <output-file> [-v|--verbose]";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("invalid processing mode `{0}`; expected `word` or `two-gram`")]
    InvalidMode(String),
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub mode: Mode,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Mirror the report to the console in addition to the output file.
    pub verbose: bool,
}

/// Parses the arguments following the program name.
///
/// Positional order is mode, input path, output path; the verbose switch may
/// appear anywhere.
pub fn parse_args<I>(args: I) -> Result<CliArgs, UsageError>
where
    I: IntoIterator<Item = String>,
{
    let mut verbose = false;
    let mut positional = Vec::new();
    for arg in args {
        if arg == "-v" || arg == "--verbose" {
            verbose = true;
        } else {
            positional.push(arg);
        }
    }

    let mut positional = positional.into_iter();
    let mode = match positional.next() {
        Some(raw) => parse_mode(&raw)?,
        None => return Err(UsageError::MissingArgument("processing mode")),
    };
    let input_path = positional
        .next()
        .map(PathBuf::from)
        .ok_or(UsageError::MissingArgument("input file path"))?;
    let output_path = positional
        .next()
        .map(PathBuf::from)
        .ok_or(UsageError::MissingArgument("output file path"))?;
    if let Some(extra) = positional.next() {
        return Err(UsageError::UnexpectedArgument(extra));
    }

    Ok(CliArgs {
        mode,
        input_path,
        output_path,
        verbose,
    })
}

fn parse_mode(raw: &str) -> Result<Mode, UsageError> {
    match raw {
        "word" => Ok(Mode::Word),
        "two-gram" => Ok(Mode::TwoGram),
        other => Err(UsageError::InvalidMode(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn parses_both_modes() {
        let parsed = parse_args(args(&["word", "in.txt", "out.txt"])).unwrap();
        assert_eq!(parsed.mode, Mode::Word);
        assert_eq!(parsed.input_path, PathBuf::from("in.txt"));
        assert_eq!(parsed.output_path, PathBuf::from("out.txt"));
        assert!(!parsed.verbose);

        let parsed = parse_args(args(&["two-gram", "in.txt", "out.txt"])).unwrap();
        assert_eq!(parsed.mode, Mode::TwoGram);
    }

    #[test]
    fn verbose_switch_can_appear_anywhere() {
        let parsed = parse_args(args(&["-v", "word", "in.txt", "out.txt"])).unwrap();
        assert!(parsed.verbose);

        let parsed = parse_args(args(&["word", "in.txt", "out.txt", "--verbose"])).unwrap();
        assert!(parsed.verbose);
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = parse_args(args(&["wordz", "in.txt", "out.txt"])).unwrap_err();
        assert_eq!(err, UsageError::InvalidMode("wordz".to_string()));

        // The original integer selector is not accepted.
        let err = parse_args(args(&["1", "in.txt", "out.txt"])).unwrap_err();
        assert_eq!(err, UsageError::InvalidMode("1".to_string()));
    }

    #[test]
    fn reports_missing_arguments_in_order() {
        assert_eq!(
            parse_args(args(&[])).unwrap_err(),
            UsageError::MissingArgument("processing mode")
        );
        assert_eq!(
            parse_args(args(&["word"])).unwrap_err(),
            UsageError::MissingArgument("input file path")
        );
        assert_eq!(
            parse_args(args(&["word", "in.txt"])).unwrap_err(),
            UsageError::MissingArgument("output file path")
        );
    }

    #[test]
    fn rejects_trailing_arguments() {
        let err = parse_args(args(&["word", "in.txt", "out.txt", "extra"])).unwrap_err();
        assert_eq!(err, UsageError::UnexpectedArgument("extra".to_string()));
    }
}
