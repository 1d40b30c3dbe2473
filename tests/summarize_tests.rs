use briefly::summarize::{TopNFrequencyRanker, UnitRanker, tokenize_units};
use briefly::{NormalizedText, SummarizeError, summarize};
use spectral::prelude::*;

const ARTICLE: &str = "Rust compiles to fast native code. \
    The garden was quiet. \
    Rust programs avoid data races because Rust enforces ownership. \
    Dinner was served late. \
    Ownership rules make Rust memory safe. \
    Some birds flew past.";

#[test]
fn tokenizer_splits_on_sentence_punctuation_and_newlines() {
    let text = NormalizedText::from_units(["First line here", "Second one. And a third!"]);
    let units = tokenize_units(&text);

    assert_that(&units).has_length(3);
    assert_that(&units).is_equal_to(vec![
        "First line here".to_string(),
        "Second one.".to_string(),
        "And a third!".to_string(),
    ]);
}

#[test]
fn summary_selects_term_heavy_units_in_document_order() {
    let text = NormalizedText::from_raw(ARTICLE);
    let summary =
        summarize(&text, &TopNFrequencyRanker::default()).expect("Expected successful summary.");

    assert_that(&summary.as_str()).is_equal_to(
        "Rust compiles to fast native code.\n\
         Rust programs avoid data races because Rust enforces ownership.\n\
         Ownership rules make Rust memory safe.",
    );
}

#[test]
fn summary_is_strictly_shorter_than_input_by_unit_count() {
    let text = NormalizedText::from_raw(ARTICLE);
    let input_units = tokenize_units(&text).len();
    let summary =
        summarize(&text, &TopNFrequencyRanker::default()).expect("Expected successful summary.");

    let summary_units = summary.lines().count();
    assert_that(&(summary_units < input_units)).is_true();
    assert_that(&summary.is_empty()).is_false();
}

#[test]
fn summary_is_deterministic_across_calls() {
    let text = NormalizedText::from_raw(ARTICLE);
    let ranker = TopNFrequencyRanker::default();

    let first = summarize(&text, &ranker).expect("Expected successful summary.");
    let second = summarize(&text, &ranker).expect("Expected successful summary.");

    assert_that(&second).is_equal_to(first);
}

#[test]
fn summary_preserves_document_order_regardless_of_rank_order() {
    let text = NormalizedText::from_raw(ARTICLE);
    let units = tokenize_units(&text);
    let summary =
        summarize(&text, &TopNFrequencyRanker::default()).expect("Expected successful summary.");

    let positions: Vec<usize> = summary
        .lines()
        .map(|line| {
            units
                .iter()
                .position(|unit| unit == line)
                .expect("Summary line must come from the input units.")
        })
        .collect();

    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_that(&positions).is_equal_to(sorted);
}

#[test]
fn short_text_returns_every_unit() {
    let text = NormalizedText::from_raw("Only one sentence here. And a second one.");
    let summary =
        summarize(&text, &TopNFrequencyRanker::default()).expect("Expected successful summary.");

    assert_that(&summary.as_str()).is_equal_to("Only one sentence here.\nAnd a second one.");
}

#[test]
fn punctuation_only_text_is_unsummarizable() {
    let text = NormalizedText::from_raw(". . . !");
    let error = summarize(&text, &TopNFrequencyRanker::default())
        .expect_err("Expected summarization to fail.");

    assert_that(&matches!(error, SummarizeError::Unsummarizable)).is_true();
}

#[test]
fn custom_unit_count_bounds_the_selection() {
    let text = NormalizedText::from_raw(ARTICLE);
    let summary =
        summarize(&text, &TopNFrequencyRanker::new(1)).expect("Expected successful summary.");

    assert_that(&summary.lines().count()).is_equal_to(1);
}

#[test]
fn ranker_breaks_ties_by_first_occurrence() {
    let units = vec![
        "identical weight sentence alpha".to_string(),
        "identical weight sentence alpha".to_string(),
        "identical weight sentence alpha".to_string(),
        "identical weight sentence alpha".to_string(),
    ];
    let selected = TopNFrequencyRanker::new(2).select(&units);

    assert_that(&selected).is_equal_to(vec![0, 1]);
}
