//! Upload handling: file type detection and text extraction

pub mod file_detector;
pub mod text_extractor;

use crate::error::{Result, ResumeAnalyzerError};
use file_detector::FileType;
use text_extractor::{DocxExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};

/// Extract plain text from uploaded file bytes, routed by the filename
/// extension.
pub fn extract_text(bytes: &[u8], filename: &str) -> Result<String> {
    match FileType::from_filename(filename) {
        FileType::Pdf => {
            log::info!("Extracting text from PDF upload: {}", filename);
            PdfExtractor.extract(bytes)
        }
        FileType::Docx => {
            log::info!("Extracting text from DOCX upload: {}", filename);
            DocxExtractor.extract(bytes)
        }
        FileType::Text => {
            log::info!("Reading plain text upload: {}", filename);
            PlainTextExtractor.extract(bytes)
        }
        FileType::Unknown => Err(ResumeAnalyzerError::UnsupportedFormat(filename.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_txt_by_extension() {
        let text = extract_text(b"Rust engineer", "resume.txt").unwrap();
        assert_eq!(text, "Rust engineer");
    }

    #[test]
    fn test_unknown_extension_is_unsupported() {
        let result = extract_text(b"whatever", "resume.xyz");
        match result {
            Err(ResumeAnalyzerError::UnsupportedFormat(name)) => {
                assert_eq!(name, "resume.xyz");
            }
            other => panic!("expected UnsupportedFormat, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_missing_extension_is_unsupported() {
        assert!(extract_text(b"whatever", "resume").is_err());
    }
}
