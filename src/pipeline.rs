//! The pipeline module orchestrates extraction and summarization for a
//! single source and reports a typed outcome to the presentation layer.

use log::info;
use thiserror::Error;

use crate::constants::{MSG_NO_SUMMARY, MSG_NO_TEXT, MSG_PDF_READ_FAILED, MSG_WEB_FETCH_FAILED};
use crate::normalize::NormalizedText;
use crate::summarize::UnitRanker;
use crate::{ContentStrategy, ExtractError, SourceDescriptor, SummarizeError, pdf, scrape, summarize};

/// Configuration shared by pipeline runs.
pub struct PipelineContext<'a> {
    /// Web content-selection strategy.
    pub strategy: ContentStrategy,
    /// Ranking strategy used by the summarizer.
    pub ranker: &'a dyn UnitRanker,
}

/// Terminal failure of a pipeline run.
///
/// Wraps the first stage failure encountered; the controller synthesizes no
/// error kinds of its own and downstream stages are skipped.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error(transparent)]
    Summarize(#[from] SummarizeError),
}

impl PipelineError {
    /// Returns the human-readable placeholder displayed in place of a summary.
    pub fn user_message(&self) -> &'static str {
        match self {
            PipelineError::Extract(ExtractError::Fetch(_)) => MSG_WEB_FETCH_FAILED,
            PipelineError::Extract(ExtractError::Parse(_)) => MSG_PDF_READ_FAILED,
            PipelineError::Extract(ExtractError::Empty) => MSG_NO_TEXT,
            PipelineError::Summarize(SummarizeError::Unsummarizable) => MSG_NO_SUMMARY,
        }
    }
}

/// Successful result of a pipeline run.
#[derive(Debug)]
pub struct PipelineOutput {
    /// The URL or file path the run started from.
    pub source: String,
    /// Document title when the source provides one.
    pub title: Option<String>,
    /// The normalized text the summary was produced from.
    pub text: NormalizedText,
    /// The extractive summary, units joined by newlines.
    pub summary: String,
}

/// Append-only ordered list of successfully processed source identifiers.
///
/// Owned by the presentation layer for the duration of a session; the
/// pipeline itself keeps no state across runs.
#[derive(Debug, Default)]
pub struct TitleLog {
    entries: Vec<String>,
}

impl TitleLog {
    /// Appends a processed source identifier.
    pub fn append(&mut self, source: impl Into<String>) {
        self.entries.push(source.into());
    }

    /// Returns the logged identifiers in processing order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Returns `true` if nothing has been logged yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Runs extraction and summarization for one source.
///
/// The descriptor variant selects the extractor; summarization runs only
/// when extraction produced text. There are no retries: every failure is
/// terminal for this invocation and the caller may re-invoke with the same
/// descriptor to retry manually.
///
/// # Arguments
///
/// * `descriptor` - The source to process
/// * `ctx` - Context containing the content strategy and unit ranker
///
/// # Errors
///
/// Returns the first stage failure as a [`PipelineError`]; map it with
/// [`PipelineError::user_message`] for display.
pub fn run(
    descriptor: &SourceDescriptor,
    ctx: &PipelineContext<'_>,
) -> Result<PipelineOutput, PipelineError> {
    let source = descriptor.source_id().to_string();

    info!("Extracting {source}");
    let article = match descriptor {
        SourceDescriptor::Url(url) => scrape::extract_web(url, ctx.strategy)?,
        SourceDescriptor::FilePath(path) => pdf::extract_pdf(path)?,
    };

    info!(
        "Summarizing {source} ({} characters)",
        article.text.as_str().len()
    );
    let summary = summarize::summarize(&article.text, ctx.ranker)?;

    Ok(PipelineOutput {
        source,
        title: article.title,
        text: article.text,
        summary,
    })
}
