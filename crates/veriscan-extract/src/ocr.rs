//! Image OCR via the `tesseract` binary
//!
//! The image bytes are written to a scratch file and handed to `tesseract
//! <file> stdout`. A missing binary is reported with a dedicated message so
//! the caller can tell "OCR is not installed" apart from "this image has no
//! readable text".

use std::io::Write;
use std::process::Command;
use veriscan_core::{Error, Result};

/// Error string returned when the tesseract binary cannot be found.
pub const OCR_UNAVAILABLE: &str = "Tesseract not installed or not in PATH.";

/// Run OCR over an image and return the recognized text.
///
/// `name` is the lower-cased filename; its suffix picks the scratch-file
/// extension so tesseract detects the image format.
pub fn image_to_text(name: &str, bytes: &[u8]) -> Result<String> {
    let suffix = if name.ends_with(".png") {
        ".png"
    } else if name.ends_with(".jpeg") {
        ".jpeg"
    } else {
        ".jpg"
    };

    let mut scratch = tempfile::Builder::new()
        .prefix("veriscan-")
        .suffix(suffix)
        .tempfile()
        .map_err(|e| Error::extraction(format!("failed to create OCR scratch file: {e}")))?;
    scratch
        .write_all(bytes)
        .map_err(|e| Error::extraction(format!("failed to write OCR scratch file: {e}")))?;

    let output = Command::new("tesseract")
        .arg(scratch.path())
        .arg("stdout")
        .output();

    match output {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(Error::extraction(OCR_UNAVAILABLE))
        }
        Err(e) => Err(Error::extraction(format!("failed to run tesseract: {e}"))),
        Ok(out) => {
            if !out.status.success() {
                let stderr = String::from_utf8_lossy(&out.stderr);
                return Err(Error::extraction(format!(
                    "tesseract failed: {}",
                    stderr.trim()
                )));
            }
            Ok(String::from_utf8_lossy(&out.stdout).into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // OCR results depend on a locally installed tesseract, so tests stay on
    // the error paths that are deterministic everywhere.

    #[test]
    fn unreadable_image_never_panics() {
        // Whatever the local tesseract situation, garbage bytes must come
        // back as Ok(text) or Err(extraction), not a panic.
        let result = image_to_text(".png", b"not really a png");
        if let Err(err) = result {
            assert!(matches!(err, Error::Extraction(_)));
        }
    }

    #[test]
    fn unavailable_message_names_the_dependency() {
        assert!(OCR_UNAVAILABLE.contains("Tesseract"));
    }
}
