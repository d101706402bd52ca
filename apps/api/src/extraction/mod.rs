//! Text extraction: turns an uploaded resume document into plain text for
//! the scorers. PDF goes through `pdf-extract`; plain text is UTF-8 decoded.
//! Extraction is blocking; async callers should run it on the blocking pool.

pub mod upload;

use thiserror::Error;
use tracing::debug;

use crate::scoring::models::ResumeText;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("document could not be read: {0}")]
    Unreadable(String),

    #[error("document contains no extractable text")]
    NoText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// Picks the document kind from the declared content type, falling back to
    /// the file extension when the content type is missing or generic.
    pub fn detect(
        content_type: Option<&str>,
        file_name: Option<&str>,
    ) -> Result<Self, ExtractionError> {
        let mime = content_type
            .map(|ct| ct.split(';').next().unwrap_or(ct).trim().to_ascii_lowercase())
            .unwrap_or_default();

        match mime.as_str() {
            "application/pdf" => return Ok(DocumentKind::Pdf),
            "text/plain" => return Ok(DocumentKind::PlainText),
            "" | "application/octet-stream" => {}
            other => return Err(ExtractionError::UnsupportedFormat(other.to_string())),
        }

        let extension = file_name
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("pdf") => Ok(DocumentKind::Pdf),
            Some("txt") => Ok(DocumentKind::PlainText),
            Some(ext) => Err(ExtractionError::UnsupportedFormat(format!(".{ext}"))),
            None => Err(ExtractionError::UnsupportedFormat(
                "unknown (no content type or file extension)".to_string(),
            )),
        }
    }
}

/// Extracts text from a document. Blank output is an error here, even though
/// the scoring engine itself accepts empty text.
pub fn extract_text(bytes: &[u8], kind: DocumentKind) -> Result<ResumeText, ExtractionError> {
    let text = match kind {
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map(ResumeText::from)
            .map_err(|e| ExtractionError::Unreadable(e.to_string()))?,
        DocumentKind::PlainText => ResumeText::from_utf8(bytes.to_vec())
            .map_err(|e| ExtractionError::Unreadable(e.to_string()))?,
    };

    if text.is_blank() {
        return Err(ExtractionError::NoText);
    }

    debug!(
        "Extracted {} chars from {:?} document ({} bytes)",
        text.as_str().chars().count(),
        kind,
        bytes.len()
    );
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_content_type() {
        assert_eq!(
            DocumentKind::detect(Some("application/pdf"), None).unwrap(),
            DocumentKind::Pdf
        );
        assert_eq!(
            DocumentKind::detect(Some("text/plain; charset=utf-8"), Some("cv.pdf")).unwrap(),
            DocumentKind::PlainText
        );
    }

    #[test]
    fn test_detect_falls_back_to_extension() {
        assert_eq!(
            DocumentKind::detect(Some("application/octet-stream"), Some("Resume.PDF")).unwrap(),
            DocumentKind::Pdf
        );
        assert_eq!(
            DocumentKind::detect(None, Some("resume.txt")).unwrap(),
            DocumentKind::PlainText
        );
    }

    #[test]
    fn test_detect_rejects_docx() {
        let err = DocumentKind::detect(
            Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
            Some("resume.docx"),
        )
        .unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedFormat(_)));

        let err = DocumentKind::detect(None, Some("resume.docx")).unwrap_err();
        assert_eq!(err.to_string(), "unsupported document format: .docx");
    }

    #[test]
    fn test_detect_without_any_hint_fails() {
        assert!(DocumentKind::detect(None, Some("resume")).is_err());
        assert!(DocumentKind::detect(None, None).is_err());
    }

    #[test]
    fn test_plain_text_extraction() {
        let text = extract_text(b"Skills: Rust, SQL", DocumentKind::PlainText).unwrap();
        assert_eq!(text.as_str(), "Skills: Rust, SQL");
    }

    #[test]
    fn test_blank_text_is_no_text() {
        let err = extract_text(b"  \n\t ", DocumentKind::PlainText).unwrap_err();
        assert!(matches!(err, ExtractionError::NoText));
    }

    #[test]
    fn test_non_utf8_plain_text_is_unreadable() {
        let err = extract_text(&[0xff, 0xfe, 0x00], DocumentKind::PlainText).unwrap_err();
        assert!(matches!(err, ExtractionError::Unreadable(_)));
    }

    #[test]
    fn test_garbage_pdf_is_unreadable() {
        let err = extract_text(b"definitely not a pdf", DocumentKind::Pdf).unwrap_err();
        assert!(matches!(err, ExtractionError::Unreadable(_)));
    }
}
