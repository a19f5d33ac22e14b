//! Veriscan Extract
//!
//! Turns an uploaded file into text for classification. Dispatch is purely
//! on the lower-cased filename suffix:
//! - `.pdf` — best-effort text extraction over the whole document; scanned
//!   PDFs legitimately come back empty
//! - `.png` / `.jpg` / `.jpeg` — OCR via the `tesseract` binary
//! - anything else — strict UTF-8 decode
//!
//! Every failure is returned as an [`Error`](veriscan_core::Error), never a
//! panic; callers fold errors into the uniform report shape.

pub mod ocr;

use veriscan_core::{Error, Result};

/// Extract text content from an uploaded file.
pub fn extract_text(filename: &str, bytes: &[u8]) -> Result<String> {
    let name = filename.to_ascii_lowercase();

    if name.ends_with(".pdf") {
        pdf_to_text(bytes)
    } else if name.ends_with(".png") || name.ends_with(".jpg") || name.ends_with(".jpeg") {
        ocr::image_to_text(&name, bytes)
    } else {
        String::from_utf8(bytes.to_vec())
            .map_err(|e| Error::extraction(format!("file is not valid UTF-8 text: {e}")))
    }
}

/// Extract text from an in-memory PDF.
///
/// Extraction quality varies by PDF (text layer vs scanned images); an empty
/// string is a valid outcome, not an error.
fn pdf_to_text(bytes: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| Error::extraction(format!("failed to extract text from PDF: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_files_decode_as_utf8() {
        let text = extract_text("note.txt", b"hello world").unwrap();
        assert_eq!(text, "hello world");
    }

    #[test]
    fn extension_matching_ignores_case() {
        let text = extract_text("NOTE.TXT", b"hello world").unwrap();
        assert_eq!(text, "hello world");
    }

    #[test]
    fn files_without_extension_decode_as_utf8() {
        let text = extract_text("README", b"plain contents").unwrap();
        assert_eq!(text, "plain contents");
    }

    #[test]
    fn invalid_utf8_is_an_extraction_error() {
        let err = extract_text("blob.bin", &[0xff, 0xfe, 0x00, 0x80]).unwrap_err();
        assert!(err.to_string().contains("UTF-8"));
    }

    #[test]
    fn corrupt_pdf_is_an_extraction_error() {
        let err = extract_text("report.pdf", b"this is not a pdf at all").unwrap_err();
        assert!(matches!(err, Error::Extraction(_)));
    }

    #[test]
    fn empty_plain_file_yields_empty_text() {
        let text = extract_text("empty.txt", b"").unwrap();
        assert_eq!(text, "");
    }
}
