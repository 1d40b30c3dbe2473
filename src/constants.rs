/// Browser-like user-agent sent with web fetches; some servers reject
/// default or empty agents.
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; briefly/0.1)";

/// Paragraph units whose trimmed length is at most this many characters are
/// discarded as boilerplate (captions, buttons, navigation labels).
pub const MIN_UNIT_CHARS: usize = 20;

/// Number of top-ranked text units selected into a summary.
pub const SUMMARY_UNIT_COUNT: usize = 3;

/// Salient terms shorter than this many characters are ignored when scoring.
pub const MIN_TERM_CHARS: usize = 3;

pub(crate) const UNIT_SPLITTER: &str = r"[^.!?\n]+[.!?]*";

pub(crate) const TERM_SPLITTER: &str = r"[\w']+";

/// Terminal message shown when a web source cannot be fetched.
pub const MSG_WEB_FETCH_FAILED: &str = "could not retrieve text from web page";

/// Terminal message shown when a PDF cannot be opened or decoded.
pub const MSG_PDF_READ_FAILED: &str = "could not read PDF";

/// Terminal message shown when a source yields no usable text.
pub const MSG_NO_TEXT: &str = "no article text found";

/// Terminal message shown when ranking produces no summary.
pub const MSG_NO_SUMMARY: &str = "could not produce a summary";
