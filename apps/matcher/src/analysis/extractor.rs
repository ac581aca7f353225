//! Text Extractor: turns uploaded document bytes into raw text.

use std::panic::{self, AssertUnwindSafe};

use crate::errors::MatchError;

/// Pulls raw text out of a binary document. Implementations are pure: no
/// disk or network access.
pub trait DocumentExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<String, MatchError>;
}

/// Page-based PDF documents. Pages are joined with a single space.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl DocumentExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, MatchError> {
        // pdf-extract panics on some malformed inputs instead of erroring
        let pages = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(bytes)
        }))
        .map_err(|_| MatchError::Extraction("PDF parser aborted on malformed input".to_string()))?
        .map_err(|e| MatchError::Extraction(e.to_string()))?;

        if pages.is_empty() {
            return Err(MatchError::Extraction("document has no pages".to_string()));
        }

        Ok(pages.join(" ").trim().to_string())
    }
}

/// UTF-8 plain-text documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl DocumentExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, MatchError> {
        std::str::from_utf8(bytes)
            .map(|text| text.trim().to_string())
            .map_err(|e| MatchError::Extraction(format!("document is not valid UTF-8: {e}")))
    }
}

/// Builds a minimal single-font PDF with one text line per page.
#[cfg(test)]
pub(crate) fn build_test_pdf(pages: &[&str]) -> Vec<u8> {
    let mut objects = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            (0..pages.len())
                .map(|i| format!("{} 0 R", 4 + i * 2))
                .collect::<Vec<_>>()
                .join(" "),
            pages.len()
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
    ];
    for (i, text) in pages.iter().enumerate() {
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
            5 + i * 2
        ));
        let stream = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
        objects.push(format!(
            "<< /Length {} >>\nstream\n{stream}\nendstream",
            stream.len()
        ));
    }

    let mut out = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
    }

    let xref_offset = out.len();
    let mut tail = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        tail.push_str(&format!("{offset:010} 00000 n \n"));
    }
    tail.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
        objects.len() + 1
    ));
    out.extend_from_slice(tail.as_bytes());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_text_is_extracted() {
        let pdf = build_test_pdf(&["Experienced Rust developer"]);
        let text = PdfExtractor.extract(&pdf).unwrap();
        assert!(text.contains("Rust"), "extracted: {text:?}");
        assert_eq!(text, text.trim());
    }

    #[test]
    fn test_pdf_pages_are_all_included() {
        let pdf = build_test_pdf(&["FirstPage", "SecondPage"]);
        let text = PdfExtractor.extract(&pdf).unwrap();
        let first = text.find("FirstPage").unwrap();
        let second = text.find("SecondPage").unwrap();
        assert!(first < second);
        assert!(text[first..second].contains(char::is_whitespace));
    }

    #[test]
    fn test_garbage_bytes_fail_extraction() {
        let err = PdfExtractor
            .extract(b"definitely not a pdf document")
            .unwrap_err();
        assert_eq!(err.code(), "EXTRACTION_ERROR");
    }

    #[test]
    fn test_empty_bytes_fail_extraction() {
        assert!(matches!(
            PdfExtractor.extract(&[]),
            Err(MatchError::Extraction(_))
        ));
    }

    #[test]
    fn test_pdf_without_pages_fails_extraction() {
        assert!(matches!(
            PdfExtractor.extract(&build_test_pdf(&[])),
            Err(MatchError::Extraction(_))
        ));
    }

    #[test]
    fn test_truncated_pdf_fails_extraction() {
        let pdf = build_test_pdf(&["Experienced Rust developer"]);
        let truncated = &pdf[..pdf.len() / 3];
        assert!(PdfExtractor.extract(truncated).is_err());
    }

    #[test]
    fn test_plain_text_is_trimmed() {
        let text = PlainTextExtractor.extract(b"  Rust developer\n").unwrap();
        assert_eq!(text, "Rust developer");
    }

    #[test]
    fn test_invalid_utf8_fails_extraction() {
        let err = PlainTextExtractor.extract(&[0xff, 0xfe, 0xfd]).unwrap_err();
        assert!(matches!(err, MatchError::Extraction(_)));
    }
}
