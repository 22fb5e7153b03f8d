//! Unit tests for the fill loop, breakability predicate, and width policy.
//!
//! Integration scenarios mirroring the reference behaviour live in
//! `tests/wrap.rs`; the cases here pin down the individual decisions the
//! wrapping pipeline is built from.

use rstest::rstest;

use super::{breakable, effective_width, wrap};

#[rstest]
#[case("a", None, true)]
#[case("あ", None, true)]
#[case("a", Some(" "), true)]
#[case("あ", Some(" "), true)]
#[case("a", Some("a"), false)]
#[case("a", Some("/"), false)]
#[case(".", Some("c"), false)]
#[case("a", Some("あ"), true)]
#[case("あ", Some("a"), true)]
#[case("あ", Some("い"), true)]
#[case("\n", Some("a"), true)]
fn breakable_cases(#[case] prev: &str, #[case] next: Option<&str>, #[case] expected: bool) {
    assert_eq!(breakable(prev, next), expected);
}

#[test]
fn ideographic_space_is_not_a_width_one_split() {
    // U+3000 is whitespace but double width, so the split comes from the
    // double-width rules instead of the whitespace rule.
    assert!(breakable("あ", Some("\u{3000}")));
    assert!(breakable("a", Some("\u{3000}")));
}

#[rstest]
#[case(0, 20, 20)]
#[case(4, 20, 20)]
#[case(10, 20, 20)]
#[case(11, 20, 21)]
#[case(16, 20, 26)]
#[case(30, 20, 40)]
#[case(0, 1, 1)]
fn effective_width_keeps_half_budget(
    #[case] indent_width: usize,
    #[case] max_width: usize,
    #[case] expected: usize,
) {
    assert_eq!(effective_width(indent_width, max_width), expected);
}

#[test]
fn empty_input_wraps_to_empty_output() {
    assert_eq!(wrap("", "", 20), "");
    assert_eq!(wrap("", "  ", 20), "");
}

#[test]
fn input_of_only_breaks_wraps_to_empty_output() {
    assert_eq!(wrap("\n\n\n", "", 20), "");
    assert_eq!(wrap("\r\n\r\n", "  ", 20), "");
}

#[test]
fn surrounding_breaks_are_trimmed() {
    assert_eq!(wrap("\nあい\n", "", 20), "あい");
    assert_eq!(wrap("\r\nあい\r\n", "", 20), "あい");
}

#[test]
fn carriage_return_breaks_are_normalized() {
    assert_eq!(wrap("あ\r\nい", "", 20), "あ\nい");
    assert_eq!(wrap("あ\rい", "", 20), "あ\nい");
}

#[test]
fn zero_width_is_clamped_to_one() {
    // Explicit policy: max_width 0 behaves like max_width 1.
    assert_eq!(wrap("あい", "", 0), wrap("あい", "", 1));
    assert_eq!(wrap("あい", "", 0), "あ\nい");
}

#[test]
fn width_one_splits_double_width_text_per_unit() {
    assert_eq!(wrap("あいう", "", 1), "あ\nい\nう");
}

#[test]
fn single_width_run_never_splits() {
    let word = "abcdefghij";
    assert_eq!(wrap(word, "", 4), word);
}

#[test]
fn break_prefers_space_inside_mixed_run() {
    assert_eq!(wrap("aaaa bbbb", "", 4), "aaaa\n bbbb");
}

#[test]
fn unterminated_span_open_degrades_to_ordinary_unit() {
    assert_eq!(wrap("<あいうえお", "", 10), "<あいうえお");
}

#[test]
fn combining_cluster_counts_as_one_unit() {
    // "e" + combining acute forms one cluster of width 2.
    let text = "e\u{301}e\u{301}e\u{301}";
    assert_eq!(wrap(text, "", 4), "e\u{301}e\u{301}\ne\u{301}");
}

#[test]
fn indent_prefixes_every_line() {
    assert_eq!(wrap("あいうえお", "> ", 6), "> あい\n> うえ\n> お");
}
