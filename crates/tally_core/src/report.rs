use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

use crate::frequency::Frequency;

/// Number of distinct items in `freqs`, deduplicated by item identity.
///
/// The aggregator already guarantees one record per item, so this normally
/// equals `freqs.len()`. It is recomputed through a set on purpose: record
/// equality ignores the count field, so a caller that hands in duplicate
/// items still gets an honest unique tally.
pub fn unique_count<T: Eq + Hash>(freqs: &[Frequency<T>]) -> usize {
    freqs.iter().collect::<HashSet<_>>().len()
}

/// Renders a frequency list into the report text.
///
/// The header carries the right-justified totals, then a blank line, then
/// one line per record in the list's existing order. The same string is
/// written verbatim to every destination the caller mirrors to.
///
/// ```text
///      6 total items
///      5 unique items
///
///      2 sentence
///      1 repeats
///      ...
/// ```
pub fn render_report<T>(freqs: &[Frequency<T>]) -> String
where
    T: Display + Eq + Hash,
{
    let total_items: usize = freqs.iter().map(Frequency::count).sum();
    let unique_items = unique_count(freqs);

    let mut out = String::new();
    out.push_str(&format!("{total_items:>6} total items\n"));
    out.push_str(&format!("{unique_items:>6} unique items\n\n"));
    for freq in freqs {
        out.push_str(&format!("{:>6} {}\n", freq.count(), freq.item()));
    }
    out
}
