//! The pdf module extracts text from a local PDF file page by page.

use log::{debug, info};
use lopdf::{Document, Object};

use crate::normalize::{self, NormalizedText};
use crate::{Article, ExtractError};

/// Opens the PDF at `path` and extracts its text.
///
/// Pages are visited in document order. A page without extractable text,
/// a scanned image for example, contributes nothing and is not an error.
/// Per-page text is concatenated with a single separating space and all
/// whitespace runs are collapsed. The document handle is scoped to this
/// call and released on every exit path.
///
/// # Arguments
///
/// * `path` - Filesystem path of the PDF file to read
///
/// # Errors
///
/// Returns `ExtractError::Parse` when the file cannot be opened or decoded,
/// and `ExtractError::Empty` when no page yields any text.
pub fn extract_pdf(path: &str) -> Result<Article, ExtractError> {
    info!("Opening {path}");

    let document =
        Document::load(path).map_err(|load_error| ExtractError::Parse(load_error.to_string()))?;

    let mut concatenated = String::new();
    for (page_number, _object_id) in document.get_pages() {
        match document.extract_text(&[page_number]) {
            Ok(page_text) => {
                concatenated.push_str(&page_text);
                concatenated.push(' ');
            }
            Err(page_error) => {
                debug!("No extractable text on page {page_number}: {page_error}");
            }
        }
    }

    let text = NormalizedText::from_raw(&concatenated);
    if text.is_empty() {
        return Err(ExtractError::Empty);
    }

    Ok(Article {
        title: document_title(&document),
        text,
    })
}

/// Reads the document title from the Info dictionary when present.
fn document_title(document: &Document) -> Option<String> {
    let info = match document.trailer.get(b"Info").ok()? {
        Object::Reference(object_id) => document.get_object(*object_id).ok()?,
        direct => direct,
    };

    let title_bytes = info.as_dict().ok()?.get(b"Title").ok()?.as_str().ok()?;
    let title = normalize::collapse(&String::from_utf8_lossy(title_bytes));

    (!title.is_empty()).then_some(title)
}
