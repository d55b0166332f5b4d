//! DOCX paragraph reader.
//!
//! Opens the OOXML zip container, streams `word/document.xml` and rebuilds the
//! text of every `w:p` paragraph in document order. Tabs and breaks inside a
//! paragraph become `\t` / `\n`. Paragraphs that are blank after trimming are
//! dropped; the rest are joined with `\n`.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::extraction::ExtractError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Upper bound for the decompressed main document part.
const MAX_DOCUMENT_PART_BYTES: u64 = 64 * 1024 * 1024;

pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let xml = read_document_part(bytes)?;
    let paragraphs = parse_paragraphs(&xml)?;

    Ok(paragraphs
        .into_iter()
        .filter(|p| !p.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n"))
}

fn failure(detail: impl std::fmt::Display) -> ExtractError {
    ExtractError::ExtractionFailure(format!("Failed to read DOCX document: {detail}"))
}

fn read_document_part(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(failure)?;
    let part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| failure(format!("{DOCUMENT_PART}: {e}")))?;

    if part.size() > MAX_DOCUMENT_PART_BYTES {
        return Err(failure(format!(
            "{DOCUMENT_PART} expands to {} bytes",
            part.size()
        )));
    }

    let mut xml = String::new();
    part.take(MAX_DOCUMENT_PART_BYTES)
        .read_to_string(&mut xml)
        .map_err(failure)?;
    Ok(xml)
}

/// Returns the raw text of each paragraph, nested paragraphs (text boxes)
/// before the paragraph that contains them.
fn parse_paragraphs(xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    // One buffer per open w:p; text boxes nest paragraphs inside runs.
    let mut open: Vec<String> = Vec::new();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:p" => open.push(String::new()),
                b"w:t" => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(e)) => {
                if let Some(current) = open.last_mut() {
                    match e.name().as_ref() {
                        b"w:tab" => current.push('\t'),
                        b"w:br" | b"w:cr" => current.push('\n'),
                        _ => {}
                    }
                }
                if e.name().as_ref() == b"w:p" {
                    paragraphs.push(String::new());
                }
            }
            Ok(Event::Text(t)) if in_text => {
                if let Some(current) = open.last_mut() {
                    current.push_str(&t.unescape().map_err(failure)?);
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:p" => {
                    if let Some(done) = open.pop() {
                        paragraphs.push(done);
                    }
                }
                b"w:t" => in_text = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(failure(format!(
                    "malformed XML at byte {}: {e}",
                    reader.buffer_position()
                )))
            }
            _ => {}
        }
    }

    Ok(paragraphs)
}
