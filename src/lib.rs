//! The briefly library ingests a document from a web page or a local PDF file,
//! normalizes it into plain text and produces a short extractive summary.

pub mod constants;
pub mod normalize;
pub mod pdf;
pub mod pipeline;
pub mod scrape;
pub mod summarize;

use thiserror::Error;

/// Enum identifying which extraction path to run and with what argument.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SourceDescriptor {
    /// A web page fetched over HTTP.
    Url(String),
    /// A PDF file on the local filesystem.
    FilePath(String),
}

impl SourceDescriptor {
    /// Returns the raw URL or file path identifying this source.
    pub fn source_id(&self) -> &str {
        match self {
            SourceDescriptor::Url(url) => url,
            SourceDescriptor::FilePath(path) => path,
        }
    }
}

/// Enum representing the web content-selection strategy.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ContentStrategy {
    /// Prefer paragraphs inside a semantic `<article>` container,
    /// fall back to all paragraphs when no such container exists.
    #[default]
    ArticleOrAllParagraphs,
    /// Use all paragraph nodes of the document unconditionally.
    AllParagraphsOnly,
}

impl std::str::FromStr for ContentStrategy {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_lowercase().as_str() {
            "article" => Ok(ContentStrategy::ArticleOrAllParagraphs),
            "paragraphs" => Ok(ContentStrategy::AllParagraphsOnly),
            _ => Err(format!("Invalid content strategy: {}", input)),
        }
    }
}

/// Represents a document extracted from a source.
///
/// This struct contains the title and normalized text content of the document.
#[derive(Debug)]
pub struct Article {
    /// The title of the document, if available.
    pub title: Option<String>,
    /// The normalized text content of the document.
    pub text: normalize::NormalizedText,
}

/// Error produced by the web and PDF extractors.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Network transport failure or non-2xx response while reaching a web source.
    #[error("fetch failed: {0}")]
    Fetch(String),
    /// Malformed or unreadable PDF document.
    #[error("unreadable document: {0}")]
    Parse(String),
    /// Source reachable but yields no usable text after filtering.
    #[error("no usable text in source")]
    Empty,
}

/// Error produced by the summarizer.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// Tokenization or ranking produced no output for this text.
    #[error("text could not be summarized")]
    Unsummarizable,
}

pub use normalize::NormalizedText;
pub use pdf::extract_pdf;
pub use scrape::{extract_web, select_content};
pub use summarize::summarize;
