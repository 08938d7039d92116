//! Text extraction from supported document formats
//!
//! Extractors work on in-memory bytes so the same code path serves files,
//! fixtures, and anything already buffered. File IO lives in the input
//! manager.

use crate::error::{CareerHarmonyError, Result};
use crate::input::file_detector::DocumentFormat;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};

pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| CareerHarmonyError::PdfExtraction(format!("Failed to extract text from PDF: {}", e)))?;

        // Pages are concatenated in order; pages without text contribute
        // nothing.
        Ok(pages.concat())
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let cursor = Cursor::new(bytes);
        let mut archive = zip::ZipArchive::new(cursor)
            .map_err(|e| CareerHarmonyError::DocxExtraction(format!("Not a DOCX archive: {}", e)))?;

        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| CareerHarmonyError::DocxExtraction(format!("Missing word/document.xml: {}", e)))?
            .read_to_string(&mut xml)
            .map_err(|e| CareerHarmonyError::DocxExtraction(format!("Unreadable document body: {}", e)))?;

        // Word splits runs arbitrarily, sometimes mid-word, so text events
        // concatenate directly. Paragraph ends and explicit breaks become
        // newlines, tabs become spaces.
        let mut reader = Reader::from_str(&xml);
        let mut text = String::new();
        loop {
            match reader.read_event() {
                Ok(Event::Text(t)) => {
                    let chunk = t.unescape().map_err(|e| {
                        CareerHarmonyError::DocxExtraction(format!("Malformed document body: {}", e))
                    })?;
                    text.push_str(&chunk);
                }
                Ok(Event::End(e)) if e.name().as_ref() == b"w:p" => text.push('\n'),
                Ok(Event::Empty(e)) if e.name().as_ref() == b"w:br" => text.push('\n'),
                Ok(Event::Empty(e)) if e.name().as_ref() == b"w:tab" => text.push(' '),
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => {
                    return Err(CareerHarmonyError::DocxExtraction(format!(
                        "Malformed document body: {}",
                        e
                    )));
                }
            }
        }

        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        String::from_utf8(bytes.to_vec())
            .map_err(|e| CareerHarmonyError::Encoding(format!("File is not valid UTF-8: {}", e)))
    }
}

/// Extract plain text from document bytes with a known format.
pub fn extract_bytes(bytes: &[u8], format: DocumentFormat) -> Result<String> {
    match format {
        DocumentFormat::Pdf => PdfExtractor.extract(bytes),
        DocumentFormat::Docx => DocxExtractor.extract(bytes),
        DocumentFormat::Text => PlainTextExtractor.extract(bytes),
        DocumentFormat::Unknown => Err(CareerHarmonyError::UnsupportedFormat(
            "No extractor for this document format".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn docx_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            for (name, content) in entries {
                writer.start_file(*name, SimpleFileOptions::default()).unwrap();
                writer.write_all(content.as_bytes()).unwrap();
            }
            writer.finish().unwrap();
        }
        cursor.into_inner()
    }

    #[test]
    fn test_plain_text_extraction() {
        let text = PlainTextExtractor.extract("Python and Excel".as_bytes()).unwrap();
        assert_eq!(text, "Python and Excel");
    }

    #[test]
    fn test_plain_text_rejects_invalid_utf8() {
        let result = PlainTextExtractor.extract(&[0x50, 0xff, 0xfe, 0x79]);
        assert!(matches!(result, Err(CareerHarmonyError::Encoding(_))));
    }

    #[test]
    fn test_docx_extraction_joins_runs_and_paragraphs() {
        let document = concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
            "<w:body>",
            "<w:p><w:r><w:t>Experienced in Pyt</w:t></w:r><w:r><w:t>hon</w:t></w:r></w:p>",
            "<w:p><w:r><w:t>Advanced Excel &amp; SQL</w:t></w:r></w:p>",
            "</w:body></w:document>"
        );
        let bytes = docx_bytes(&[("word/document.xml", document)]);

        let text = DocxExtractor.extract(&bytes).unwrap();
        assert!(text.contains("Experienced in Python"));
        assert!(text.contains("Advanced Excel & SQL"));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_docx_without_document_body_fails() {
        let bytes = docx_bytes(&[("word/styles.xml", "<w:styles/>")]);
        let result = DocxExtractor.extract(&bytes);
        assert!(matches!(result, Err(CareerHarmonyError::DocxExtraction(_))));
    }

    #[test]
    fn test_pdf_extraction_rejects_garbage() {
        let result = PdfExtractor.extract(b"definitely not a pdf");
        assert!(matches!(result, Err(CareerHarmonyError::PdfExtraction(_))));
    }

    #[test]
    fn test_unknown_format_has_no_extractor() {
        let result = extract_bytes(b"anything", DocumentFormat::Unknown);
        assert!(matches!(result, Err(CareerHarmonyError::UnsupportedFormat(_))));
    }
}
