use std::fmt;

/// A normalized word-like unit: a maximal run of letters, digits,
/// underscores, or apostrophes, lower-cased when produced.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token(String);

impl Token {
    /// Builds a token from raw text, applying the lower-case normalization.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.chars().any(char::is_uppercase) {
            Token(raw.to_lowercase())
        } else {
            Token(raw)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\''
}

/// Splits one line of text into tokens, in left-to-right order.
///
/// The whole line is lower-cased first; maximal runs of token characters
/// (letters, digits, `_`, `'`) become tokens and every other character is a
/// discarded delimiter. A line with no token characters yields nothing.
pub fn tokenize_line(line: &str) -> Vec<Token> {
    let lowered = line.to_lowercase();
    lowered
        .split(|c: char| !is_token_char(c))
        .filter(|run| !run.is_empty())
        .map(|run| Token(run.to_string()))
        .collect()
}

/// Tokenizes a sequence of lines, preserving line order.
///
/// Tokens never span a line boundary: a token ending at end-of-line is
/// complete and the next line starts fresh.
pub fn tokenize_lines<I>(lines: I) -> Vec<Token>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut tokens = Vec::new();
    for line in lines {
        tokens.extend(tokenize_line(line.as_ref()));
    }
    tokens
}
