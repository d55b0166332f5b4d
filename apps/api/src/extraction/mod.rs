//! Document text extraction: turns an uploaded PDF/DOCX payload into plain text.
//!
//! Dispatch is by filename suffix only; the payload is never sniffed. A `.docx`
//! name on PDF bytes goes down the DOCX path and fails there.

pub mod docx;
pub mod pdf;

use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

/// Caller-visible extraction failures. None of these are retried by the core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Unsupported file format '{0}'. Only PDF and DOCX files are supported")]
    UnsupportedFormat(String),

    #[error("The uploaded file is empty")]
    EmptyInput,

    #[error("{0}")]
    ExtractionFailure(String),

    #[error("Extracted text is too short ({chars} characters, minimum {min}); the file is likely not a real CV")]
    InsufficientText { chars: usize, min: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    /// Covers both `.doc` and `.docx`; legacy binary `.doc` fails in the zip reader.
    Docx,
}

impl DocumentFormat {
    /// Resolves the format from the filename suffix (case-insensitive).
    pub fn from_filename(filename: &str) -> Result<Self, ExtractError> {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "doc" | "docx" => Ok(DocumentFormat::Docx),
            "" => Err(ExtractError::UnsupportedFormat(filename.to_string())),
            other => Err(ExtractError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Plain text of one uploaded document. Lives for a single request.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractedDocument {
    pub full_text: String,
}

impl ExtractedDocument {
    /// Rejects documents whose trimmed text is shorter than `min_chars`.
    pub fn require_min_chars(&self, min_chars: usize) -> Result<&str, ExtractError> {
        let chars = self.full_text.trim().chars().count();
        if chars < min_chars {
            return Err(ExtractError::InsufficientText {
                chars,
                min: min_chars,
            });
        }
        Ok(&self.full_text)
    }
}

/// Extracts plain text from `bytes`, dispatching on `filename`'s extension.
///
/// The format check runs before the payload is inspected, so an unsupported
/// name is reported as `UnsupportedFormat` even when the payload is empty.
pub fn extract(bytes: &[u8], filename: &str) -> Result<ExtractedDocument, ExtractError> {
    let format = DocumentFormat::from_filename(filename)?;

    if bytes.is_empty() {
        return Err(ExtractError::EmptyInput);
    }

    let full_text = match format {
        DocumentFormat::Pdf => pdf::extract_pdf_text(bytes)?,
        DocumentFormat::Docx => docx::extract_docx_text(bytes)?,
    };

    info!(
        filename,
        format = ?format,
        bytes = bytes.len(),
        chars = full_text.len(),
        "Extracted document text"
    );

    Ok(ExtractedDocument { full_text })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension_is_case_insensitive() {
        assert_eq!(
            DocumentFormat::from_filename("Resume.PDF").unwrap(),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_filename("cv.DocX").unwrap(),
            DocumentFormat::Docx
        );
        assert_eq!(
            DocumentFormat::from_filename("old.doc").unwrap(),
            DocumentFormat::Docx
        );
    }

    #[test]
    fn test_txt_is_unsupported_before_bytes_are_read() {
        // Empty payload on purpose: the format error must win over EmptyInput.
        let err = extract(&[], "resume.txt").unwrap_err();
        assert_eq!(err, ExtractError::UnsupportedFormat("txt".to_string()));
    }

    #[test]
    fn test_missing_extension_is_unsupported() {
        let err = DocumentFormat::from_filename("resume").unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat(ref name) if name == "resume"));
    }

    #[test]
    fn test_empty_pdf_is_empty_input_not_failure() {
        assert_eq!(extract(&[], "cv.pdf").unwrap_err(), ExtractError::EmptyInput);
        assert_eq!(extract(&[], "cv.docx").unwrap_err(), ExtractError::EmptyInput);
    }

    #[test]
    fn test_garbage_pdf_is_extraction_failure() {
        let err = extract(b"definitely not a pdf", "cv.pdf").unwrap_err();
        assert!(matches!(err, ExtractError::ExtractionFailure(_)));
    }

    #[test]
    fn test_pdf_bytes_named_docx_fail_on_docx_path() {
        let err = extract(b"%PDF-1.5\n%%EOF", "cv.docx").unwrap_err();
        match err {
            ExtractError::ExtractionFailure(msg) => assert!(msg.contains("DOCX"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_require_min_chars() {
        let doc = ExtractedDocument {
            full_text: "   short text   ".to_string(),
        };
        assert_eq!(
            doc.require_min_chars(50).unwrap_err(),
            ExtractError::InsufficientText { chars: 10, min: 50 }
        );
        assert!(doc.require_min_chars(10).is_ok());
    }
}
