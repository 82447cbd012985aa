use std::sync::Once;

use pretty_assertions::assert_eq;
use tally_core::{
    aggregate, render_report, Frequency, Mode, Token, TwoGram,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(tally_logging::initialize_for_tests);
}

fn freq(word: &str, count: usize) -> Frequency<Token> {
    Frequency::new(Token::new(word), count)
}

#[test]
fn header_shows_right_justified_totals() {
    init_logging();
    let freqs = vec![
        freq("sentence", 2),
        freq("the", 1),
        freq("this", 1),
        freq("repeats", 1),
        freq("word", 1),
    ];

    let report = render_report(&freqs);
    let mut lines = report.lines();

    assert_eq!(lines.next(), Some("     6 total items"));
    assert_eq!(lines.next(), Some("     5 unique items"));
    assert_eq!(lines.next(), Some(""));
}

#[test]
fn body_preserves_the_given_order() {
    init_logging();
    // Deliberately not in sorted order; the renderer must not reorder.
    let freqs = vec![freq("zebra", 1), freq("apple", 3)];

    let report = render_report(&freqs);

    assert_eq!(
        report,
        "     4 total items\n     2 unique items\n\n     1 zebra\n     3 apple\n"
    );
}

#[test]
fn duplicate_items_shrink_the_unique_tally_only() {
    init_logging();
    // The aggregator never produces this shape, but the unique tally is
    // computed by item-identity deduplication all the same.
    let freqs = vec![freq("echo", 2), freq("echo", 1)];

    let report = render_report(&freqs);
    let mut lines = report.lines();

    assert_eq!(lines.next(), Some("     3 total items"));
    assert_eq!(lines.next(), Some("     1 unique items"));
}

#[test]
fn twogram_report_uses_bracketed_rendering() {
    init_logging();
    let freqs = vec![Frequency::new(
        TwoGram::new(Token::new("you"), Token::new("think")),
        2,
    )];

    let report = render_report(&freqs);

    assert!(report.contains("     2 <you:think>\n"));
}

#[test]
fn end_to_end_twogram_scenario() {
    init_logging();
    let tokens: Vec<Token> = ["you", "think", "you", "know", "how", "you", "think"]
        .iter()
        .copied()
        .map(Token::new)
        .collect();

    let table = aggregate(Mode::TwoGram, &tokens);

    let expected = concat!(
        "     6 total items\n",
        "     5 unique items\n",
        "\n",
        "     2 <you:think>\n",
        "     1 <how:you>\n",
        "     1 <know:how>\n",
        "     1 <think:you>\n",
        "     1 <you:know>\n",
    );
    assert_eq!(table.render(), expected);
}
