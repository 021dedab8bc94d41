//! Text extraction from PDF event reports.

use pdf::file::FileOptions;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Failed to read PDF file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse PDF content: {0}")]
    Parse(String),
}

/// Extracts the text of every page, in document order.
///
/// Non-empty page texts are joined by newlines. A page that fails to decode
/// or that carries no text is skipped; only a document that cannot be read or
/// opened at all is an error.
pub fn extract_text(path: &Path) -> Result<String, ExtractError> {
    let data = std::fs::read(path)?;
    let file = FileOptions::cached()
        .load(data.as_slice())
        .map_err(|e| ExtractError::Parse(e.to_string()))?;
    let resolver = file.resolver();
    let mut pages: Vec<String> = Vec::new();

    for page_num in 0..file.num_pages() {
        let page = match file.get_page(page_num) {
            Ok(page) => page,
            Err(e) => {
                warn!("Skipping page {page_num}: {e}");
                continue;
            }
        };
        let Some(content) = &page.contents else {
            continue;
        };
        let operations = match content.operations(&resolver) {
            Ok(operations) => operations,
            Err(e) => {
                warn!("Skipping page {page_num}: unreadable content stream: {e}");
                continue;
            }
        };
        let mut page_text = String::new();
        for op in operations.iter() {
            if let pdf::content::Op::TextDraw { text } = op {
                page_text.push_str(&text.to_string_lossy());
            }
        }
        if !page_text.trim().is_empty() {
            pages.push(page_text);
        }
    }

    Ok(pages.join("\n"))
}
