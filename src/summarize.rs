//! The summarize module tokenizes normalized text into sentence-level units
//! and selects the top-ranked units into an extractive summary.

use std::collections::{HashMap, HashSet};

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::SummarizeError;
use crate::constants::{MIN_TERM_CHARS, SUMMARY_UNIT_COUNT, TERM_SPLITTER, UNIT_SPLITTER};
use crate::normalize::NormalizedText;

static UNIT_SPLITTER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(UNIT_SPLITTER).expect("Failed to compile UNIT_SPLITTER regex"));

static TERM_SPLITTER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(TERM_SPLITTER).expect("Failed to compile TERM_SPLITTER regex"));

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "had", "has",
        "have", "he", "how", "in", "is", "it", "its", "of", "on", "that", "the", "they", "this",
        "to", "was", "what", "when", "where", "which", "who", "why", "will", "with",
    ]
    .into_iter()
    .collect()
});

/// Strategy selecting which text units make up the summary.
///
/// Implementations must be deterministic: identical input slices produce
/// identical selections.
pub trait UnitRanker {
    /// Returns the indices of the selected units, highest rank first.
    fn select(&self, units: &[String]) -> Vec<usize>;
}

/// Term-frequency ranker.
///
/// Units containing higher-frequency salient terms score higher; ties keep
/// original document order. Selects at most `top_n` units.
pub struct TopNFrequencyRanker {
    top_n: usize,
}

impl TopNFrequencyRanker {
    /// Creates a ranker selecting at most `top_n` units.
    pub fn new(top_n: usize) -> Self {
        TopNFrequencyRanker { top_n }
    }
}

impl Default for TopNFrequencyRanker {
    fn default() -> Self {
        TopNFrequencyRanker::new(SUMMARY_UNIT_COUNT)
    }
}

impl UnitRanker for TopNFrequencyRanker {
    fn select(&self, units: &[String]) -> Vec<usize> {
        let frequencies = term_frequencies(units);

        let mut scored: Vec<(usize, f64)> = units
            .iter()
            .enumerate()
            .map(|(index, unit)| (index, unit_score(unit, &frequencies)))
            .collect();

        // Descending by score; equal scores keep ascending document order.
        scored.sort_by(|left, right| right.1.total_cmp(&left.1).then(left.0.cmp(&right.0)));

        scored
            .into_iter()
            .take(self.top_n)
            .map(|(index, _score)| index)
            .collect()
    }
}

/// Splits normalized text into sentence and clause level units on sentence
/// punctuation and newlines. Segments without any non-punctuation character
/// are dropped.
pub fn tokenize_units(text: &NormalizedText) -> Vec<String> {
    UNIT_SPLITTER_REGEX
        .find_iter(text.as_str())
        .map(|segment| segment.as_str().trim().to_string())
        .filter(|unit| !unit.is_empty())
        .collect()
}

/// Produces an extractive summary of `text`.
///
/// The text is tokenized into units, the ranker selects the most
/// representative ones and the selection is joined with newlines **in
/// original document order**, independent of rank, to keep the summary
/// readable. Output is byte-identical for identical input and ranker
/// configuration.
///
/// # Errors
///
/// Returns `SummarizeError::Unsummarizable` when tokenization or ranking
/// yields no units; no internal failure propagates past this function.
pub fn summarize(text: &NormalizedText, ranker: &dyn UnitRanker) -> Result<String, SummarizeError> {
    let units = tokenize_units(text);
    if units.is_empty() {
        return Err(SummarizeError::Unsummarizable);
    }

    debug!("Ranking {} text units", units.len());

    let mut selected = ranker.select(&units);
    selected.sort_unstable();
    selected.dedup();

    let summary = selected
        .iter()
        .filter_map(|&index| units.get(index))
        .cloned()
        .collect::<Vec<_>>()
        .join("\n");

    if summary.is_empty() {
        return Err(SummarizeError::Unsummarizable);
    }

    Ok(summary)
}

/// Counts how often each salient term occurs across all units.
fn term_frequencies(units: &[String]) -> HashMap<String, usize> {
    let mut frequencies = HashMap::new();
    for unit in units {
        for term in salient_terms(unit) {
            *frequencies.entry(term).or_insert(0_usize) += 1;
        }
    }

    frequencies
}

/// Yields the lowercased salient terms of a unit, skipping stop words and
/// very short tokens.
fn salient_terms(unit: &str) -> impl Iterator<Item = String> + '_ {
    TERM_SPLITTER_REGEX
        .find_iter(unit)
        .map(|term| term.as_str().to_lowercase())
        .filter(|term| term.chars().count() >= MIN_TERM_CHARS && !STOP_WORDS.contains(term.as_str()))
}

/// Mean frequency of the unit's salient terms. Normalizing by term count
/// avoids a bias toward long units.
fn unit_score(unit: &str, frequencies: &HashMap<String, usize>) -> f64 {
    let mut total = 0_usize;
    let mut term_count = 0_usize;
    for term in salient_terms(unit) {
        total += frequencies.get(&term).copied().unwrap_or(0);
        term_count += 1;
    }

    if term_count == 0 {
        return 0.0;
    }

    total as f64 / term_count as f64
}
