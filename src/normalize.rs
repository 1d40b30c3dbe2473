//! The normalize module collapses whitespace in raw extracted text and
//! guards the invariants of normalized text.

/// A whitespace-collapsed string.
///
/// Invariant: contains no consecutive whitespace runs and no leading or
/// trailing whitespace. Derived deterministically from raw extracted text
/// and never mutated after creation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NormalizedText(String);

impl NormalizedText {
    /// Creates normalized text by collapsing every whitespace run in `raw`
    /// to a single space and trimming both ends.
    pub fn from_raw(raw: &str) -> Self {
        NormalizedText(collapse(raw))
    }

    /// Creates normalized text from individual units joined with single
    /// newlines. Each unit is collapsed and trimmed on its own, so the
    /// no-consecutive-whitespace invariant holds across the separators.
    pub fn from_units<I>(units: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let joined = units
            .into_iter()
            .map(|unit| collapse(unit.as_ref()))
            .filter(|unit| !unit.is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        NormalizedText(joined)
    }

    /// Returns `true` if the normalized text contains no characters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the normalized text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NormalizedText {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Collapses all whitespace and newline runs in `raw` to single spaces and
/// trims both ends. Idempotent: collapsing already collapsed text is a no-op.
pub fn collapse(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
