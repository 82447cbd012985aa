use std::fmt;

use crate::token::Token;

/// An ordered pair of consecutive tokens.
///
/// Equality is component-wise and the derived ordering is lexicographic by
/// `(first, second)`. The rendered form `<first:second>` is canonical: it is
/// stable and unique per distinct pair, so it doubles as the tie-break key
/// when sorting report lines.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TwoGram {
    first: Token,
    second: Token,
}

impl TwoGram {
    pub fn new(first: Token, second: Token) -> Self {
        Self { first, second }
    }

    pub fn first(&self) -> &Token {
        &self.first
    }

    pub fn second(&self) -> &Token {
        &self.second
    }
}

impl fmt::Display for TwoGram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}:{}>", self.first, self.second)
    }
}
