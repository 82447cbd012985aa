use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use tally_core::{tokenize_line, Token};
use tally_logging::tally_debug;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot open input file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("error reading input file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Reads the input file line by line and tokenizes each line.
///
/// Tokens come back in source order. The file is consumed eagerly; the core
/// operates on the materialized sequence.
pub fn read_tokens(path: &Path) -> Result<Vec<Token>, InputError> {
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.display().to_string(),
        source,
    })?;

    let reader = BufReader::new(file);
    let mut tokens = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|source| InputError::Read {
            path: path.display().to_string(),
            source,
        })?;
        tokens.extend(tokenize_line(&line));
    }

    tally_debug!("tokenized {} tokens from {}", tokens.len(), path.display());
    Ok(tokens)
}
