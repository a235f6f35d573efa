//! Text extraction from uploaded file bytes
//!
//! One extractor per supported format. Decoding policy: invalid UTF-8 is
//! replaced, never an error, so a half-broken upload still gets scored.

use crate::error::{Result, ResumeAnalyzerError};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};

pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            ResumeAnalyzerError::PdfExtraction(format!("Failed to extract text from PDF: {}", e))
        })?;
        Ok(text.trim().to_string())
    }
}

/// DOCX files are zip archives; the document body lives in
/// `word/document.xml`. Paragraph runs are concatenated, one paragraph per
/// line.
pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| ResumeAnalyzerError::DocxExtraction(format!("Not a DOCX archive: {}", e)))?;

        let mut document_xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| {
                ResumeAnalyzerError::DocxExtraction(format!("Missing word/document.xml: {}", e))
            })?
            .read_to_string(&mut document_xml)
            .map_err(|e| {
                ResumeAnalyzerError::DocxExtraction(format!("Unreadable document.xml: {}", e))
            })?;

        Self::paragraph_text(&document_xml)
    }
}

impl DocxExtractor {
    fn paragraph_text(document_xml: &str) -> Result<String> {
        let mut reader = Reader::from_str(document_xml);
        let mut text = String::new();
        let mut in_run_text = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) if e.local_name().as_ref() == b"t" => in_run_text = true,
                Ok(Event::End(e)) => match e.local_name().as_ref() {
                    b"t" => in_run_text = false,
                    b"p" => text.push('\n'),
                    _ => {}
                },
                Ok(Event::Empty(e)) if e.local_name().as_ref() == b"p" => text.push('\n'),
                Ok(Event::Text(t)) if in_run_text => {
                    let unescaped = t.unescape().map_err(|e| {
                        ResumeAnalyzerError::DocxExtraction(format!("Bad XML text: {}", e))
                    })?;
                    text.push_str(&unescaped);
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => {
                    return Err(ResumeAnalyzerError::DocxExtraction(format!(
                        "Malformed document.xml: {}",
                        e
                    )))
                }
            }
        }

        Ok(text.trim().to_string())
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        Ok(String::from_utf8_lossy(bytes).trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn docx_bytes(document_xml: &str) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        writer.start_file("word/document.xml", options).unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_plain_text_roundtrip_modulo_trim() {
        let text = PlainTextExtractor
            .extract("  Python developer with AWS\n".as_bytes())
            .unwrap();
        assert_eq!(text, "Python developer with AWS");
    }

    #[test]
    fn test_plain_text_tolerates_invalid_utf8() {
        let bytes = [b'P', b'y', 0xFF, 0xFE, b't', b'h', b'o', b'n'];
        let text = PlainTextExtractor.extract(&bytes).unwrap();
        assert!(text.starts_with("Py"));
        assert!(text.ends_with("thon"));
    }

    #[test]
    fn test_docx_paragraphs_one_per_line() {
        let xml = r#"<?xml version="1.0"?>
            <w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
              <w:body>
                <w:p><w:r><w:t>John Doe</w:t></w:r></w:p>
                <w:p><w:r><w:t>Python </w:t></w:r><w:r><w:t>developer</w:t></w:r></w:p>
              </w:body>
            </w:document>"#;
        let text = DocxExtractor.extract(&docx_bytes(xml)).unwrap();
        assert_eq!(text, "John Doe\nPython developer");
    }

    #[test]
    fn test_docx_unescapes_entities() {
        let xml = r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
              <w:body><w:p><w:r><w:t>C&amp;D Engineering</w:t></w:r></w:p></w:body>
            </w:document>"#;
        let text = DocxExtractor.extract(&docx_bytes(xml)).unwrap();
        assert_eq!(text, "C&D Engineering");
    }

    #[test]
    fn test_docx_rejects_non_archive_bytes() {
        let result = DocxExtractor.extract(b"definitely not a zip");
        assert!(matches!(
            result,
            Err(ResumeAnalyzerError::DocxExtraction(_))
        ));
    }

    #[test]
    fn test_docx_rejects_archive_without_document_xml() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        writer.start_file("other.txt", options).unwrap();
        writer.write_all(b"hello").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let result = DocxExtractor.extract(&bytes);
        assert!(matches!(
            result,
            Err(ResumeAnalyzerError::DocxExtraction(_))
        ));
    }
}
