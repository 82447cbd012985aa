use std::collections::HashMap;

use crate::frequency::Frequency;
use crate::report::{render_report, unique_count};
use crate::token::Token;
use crate::twogram::TwoGram;

/// Selects what the aggregator counts: individual tokens or adjacent pairs.
///
/// Resolved once at the CLI boundary and passed into [`aggregate`]; the core
/// never inspects raw selector strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Word,
    TwoGram,
}

/// A sorted frequency table over either tokens or two-grams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrequencyTable {
    Words(Vec<Frequency<Token>>),
    TwoGrams(Vec<Frequency<TwoGram>>),
}

impl FrequencyTable {
    /// Sum of all counts; equals the number of counted occurrences.
    pub fn total_items(&self) -> usize {
        match self {
            FrequencyTable::Words(freqs) => freqs.iter().map(Frequency::count).sum(),
            FrequencyTable::TwoGrams(freqs) => freqs.iter().map(Frequency::count).sum(),
        }
    }

    /// Number of distinct counted items, deduplicated by item identity.
    pub fn unique_items(&self) -> usize {
        match self {
            FrequencyTable::Words(freqs) => unique_count(freqs),
            FrequencyTable::TwoGrams(freqs) => unique_count(freqs),
        }
    }

    /// Renders the table into the textual report format.
    pub fn render(&self) -> String {
        match self {
            FrequencyTable::Words(freqs) => render_report(freqs),
            FrequencyTable::TwoGrams(freqs) => render_report(freqs),
        }
    }
}

/// Single aggregation entry point, dispatching on the mode tag.
pub fn aggregate(mode: Mode, tokens: &[Token]) -> FrequencyTable {
    match mode {
        Mode::Word => FrequencyTable::Words(compute_word_freq(tokens)),
        Mode::TwoGram => FrequencyTable::TwoGrams(compute_twogram_freq(tokens)),
    }
}

/// Counts occurrences of each distinct token.
///
/// Returns one record per distinct token, sorted by descending count with
/// count ties broken by ascending token order. An empty input yields an
/// empty list.
pub fn compute_word_freq(tokens: &[Token]) -> Vec<Frequency<Token>> {
    let mut counts: HashMap<&Token, usize> = HashMap::new();
    for token in tokens {
        *counts.entry(token).or_insert(0) += 1;
    }
    let mut freqs: Vec<_> = counts
        .into_iter()
        .map(|(item, count)| Frequency::new(item.clone(), count))
        .collect();
    sort_frequencies(&mut freqs);
    freqs
}

/// Counts occurrences of each distinct adjacent token pair.
///
/// Pairs overlap with stride 1: a sequence of `n >= 2` tokens produces
/// `n - 1` pair occurrences. Fewer than 2 tokens yield an empty list. The
/// result is sorted by descending count, ties broken by ascending pair order.
pub fn compute_twogram_freq(tokens: &[Token]) -> Vec<Frequency<TwoGram>> {
    let mut counts: HashMap<TwoGram, usize> = HashMap::new();
    for window in tokens.windows(2) {
        let twogram = TwoGram::new(window[0].clone(), window[1].clone());
        *counts.entry(twogram).or_insert(0) += 1;
    }
    let mut freqs: Vec<_> = counts
        .into_iter()
        .map(|(item, count)| Frequency::new(item, count))
        .collect();
    sort_frequencies(&mut freqs);
    freqs
}

/// Composite ordering key: primary descending count, secondary ascending
/// item. Items are unique map keys, so this is a strict total order and the
/// sorted output is byte-for-byte reproducible.
fn sort_frequencies<T: Ord>(freqs: &mut [Frequency<T>]) {
    freqs.sort_unstable_by(|a, b| {
        b.count()
            .cmp(&a.count())
            .then_with(|| a.item().cmp(b.item()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<Token> {
        words.iter().copied().map(Token::new).collect()
    }

    #[test]
    fn word_freq_of_empty_input_is_empty() {
        assert!(compute_word_freq(&[]).is_empty());
    }

    #[test]
    fn twogram_freq_needs_at_least_two_tokens() {
        assert!(compute_twogram_freq(&[]).is_empty());
        assert!(compute_twogram_freq(&tokens(&["alone"])).is_empty());
    }

    #[test]
    fn aggregate_dispatches_on_mode() {
        let input = tokens(&["a", "b", "a"]);
        match aggregate(Mode::Word, &input) {
            FrequencyTable::Words(freqs) => assert_eq!(freqs.len(), 2),
            other => panic!("expected word table, got {other:?}"),
        }
        match aggregate(Mode::TwoGram, &input) {
            FrequencyTable::TwoGrams(freqs) => assert_eq!(freqs.len(), 2),
            other => panic!("expected two-gram table, got {other:?}"),
        }
    }
}
