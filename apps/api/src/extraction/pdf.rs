//! PDF text extraction with an ordered strategy chain.
//!
//! Strategy A (`pdf-extract`) is layout-aware and reads page by page. Strategy B
//! (`lopdf`) is a plainer per-page reader over a different parser. B runs only
//! when A errors; the error of the last strategy is what the caller sees.

use std::panic::{self, AssertUnwindSafe};

use lopdf::Document;
use tracing::{debug, warn};

use crate::extraction::ExtractError;

type Strategy = fn(&[u8]) -> Result<String, String>;

/// Tried in order. The first `Ok` wins.
const STRATEGIES: &[(&str, Strategy)] = &[("pdf-extract", layout_text), ("lopdf", plain_text)];

pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractError> {
    run_strategies(bytes, STRATEGIES)
}

fn run_strategies(bytes: &[u8], strategies: &[(&str, Strategy)]) -> Result<String, ExtractError> {
    let mut last_error: Option<String> = None;

    for (name, strategy) in strategies {
        debug!(strategy = name, "Attempting PDF text extraction");
        match strategy(bytes) {
            Ok(text) => {
                debug!(strategy = name, chars = text.len(), "PDF strategy succeeded");
                return Ok(text);
            }
            Err(e) => {
                warn!(strategy = name, error = %e, "PDF strategy failed");
                last_error = Some(format!("{name}: {e}"));
            }
        }
    }

    Err(ExtractError::ExtractionFailure(format!(
        "Failed to extract text from PDF: {}",
        last_error.unwrap_or_else(|| "no extraction strategy available".to_string())
    )))
}

/// Both parsers can panic on hostile streams; a panic counts as a failed attempt.
fn guarded<F>(attempt: F) -> Result<String, String>
where
    F: FnOnce() -> Result<String, String>,
{
    panic::catch_unwind(AssertUnwindSafe(attempt))
        .unwrap_or_else(|_| Err("parser panicked on malformed content".to_string()))
}

/// Strategy A: per-page layout extraction; each non-empty page gets a trailing newline.
fn layout_text(bytes: &[u8]) -> Result<String, String> {
    guarded(|| {
        let pages =
            pdf_extract::extract_text_from_mem_by_pages(bytes).map_err(|e| e.to_string())?;

        let mut text = String::new();
        for page in pages.iter().filter(|p| !p.trim().is_empty()) {
            text.push_str(page);
            text.push('\n');
        }
        Ok(text)
    })
}

/// Strategy B: lopdf's content-stream text operator walk, page by page.
fn plain_text(bytes: &[u8]) -> Result<String, String> {
    guarded(|| {
        let doc = Document::load_mem(bytes).map_err(|e| format!("unable to parse document: {e}"))?;

        if doc.is_encrypted() {
            return Err("document is encrypted (password-protected)".to_string());
        }

        let mut text = String::new();
        for page_number in doc.get_pages().keys() {
            let page_text = doc
                .extract_text(&[*page_number])
                .map_err(|e| format!("page {page_number}: {e}"))?;
            text.push_str(&page_text);
        }
        Ok(text)
    })
}
