//! The scrape module fetches a web page and extracts its article text by
//! filtering paragraph-level nodes.

use log::{debug, info};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::constants::{MIN_UNIT_CHARS, USER_AGENT};
use crate::normalize::{self, NormalizedText};
use crate::{Article, ContentStrategy, ExtractError};

static ARTICLE_PARAGRAPHS: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("article p").expect("Failed to compile article paragraph selector")
});

static ALL_PARAGRAPHS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("Failed to compile paragraph selector"));

/// Fetches `url` and extracts its article text.
///
/// The request carries a browser-like user-agent; servers may reject default
/// or empty agents. No URL validation is performed here, invalid URLs fail
/// via the fetch step. Repeated calls re-fetch the page.
///
/// # Arguments
///
/// * `url` - The URL of the page to summarize
/// * `strategy` - The content-selection strategy applied to the fetched markup
///
/// # Errors
///
/// Returns `ExtractError::Fetch` on transport failure or a non-2xx response,
/// and `ExtractError::Empty` when filtering leaves no usable paragraph.
pub fn extract_web(url: &str, strategy: ContentStrategy) -> Result<Article, ExtractError> {
    info!("Fetching {url}");

    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|build_error| ExtractError::Fetch(build_error.to_string()))?;

    let response = client
        .get(url)
        .send()
        .and_then(|response| response.error_for_status())
        .map_err(|fetch_error| ExtractError::Fetch(fetch_error.to_string()))?;

    let html = response
        .text()
        .map_err(|body_error| ExtractError::Fetch(body_error.to_string()))?;

    select_content(&html, strategy)
}

/// Extracts the article title and text from HTML markup.
///
/// With [`ContentStrategy::ArticleOrAllParagraphs`] paragraphs scoped to a
/// semantic `<article>` container are preferred; the document-wide paragraph
/// set is used only when no such container exists. Paragraphs whose trimmed
/// length is at most [`MIN_UNIT_CHARS`] characters are discarded as
/// boilerplate; the survivors are individually collapsed and joined with
/// single newlines.
///
/// # Errors
///
/// Returns `ExtractError::Empty` when filtering leaves no usable paragraph.
pub fn select_content(html: &str, strategy: ContentStrategy) -> Result<Article, ExtractError> {
    let document = Html::parse_document(html);
    let title = parse_title(&document);

    let paragraphs: Vec<_> = match strategy {
        ContentStrategy::ArticleOrAllParagraphs => {
            let scoped: Vec<_> = document.select(&ARTICLE_PARAGRAPHS).collect();
            if scoped.is_empty() {
                debug!("No article container, falling back to all paragraphs");
                document.select(&ALL_PARAGRAPHS).collect()
            } else {
                scoped
            }
        }
        ContentStrategy::AllParagraphsOnly => document.select(&ALL_PARAGRAPHS).collect(),
    };

    let units: Vec<String> = paragraphs
        .iter()
        .map(|paragraph| normalize::collapse(&paragraph.text().collect::<Vec<_>>().join(" ")))
        .filter(|unit| unit.chars().count() > MIN_UNIT_CHARS)
        .collect();

    if units.is_empty() {
        return Err(ExtractError::Empty);
    }

    Ok(Article {
        title,
        text: NormalizedText::from_units(units),
    })
}

/// Parses the document title, preferring `<title>` over the first heading.
fn parse_title(document: &Html) -> Option<String> {
    for tag in ["title", "h1", "h2"] {
        if let Ok(tag_selector) = Selector::parse(tag)
            && let Some(tag_element) = document.select(&tag_selector).next()
        {
            let tag_text = normalize::collapse(&tag_element.text().collect::<Vec<_>>().join(" "));
            if !tag_text.is_empty() {
                return Some(tag_text);
            }
        }
    }

    None
}
