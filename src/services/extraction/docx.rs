use std::io::{Cursor, Read};

use async_trait::async_trait;
use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use super::TextExtractor;
use crate::{
    errors::{AppError, AppResult},
    models::domain::UploadedFile,
};

const DOCUMENT_PART: &str = "word/document.xml";

/// Paragraph text from the main document part, one line per paragraph.
pub struct DocxExtractor;

fn read_document_part(bytes: &[u8]) -> AppResult<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| AppError::ExtractionError(format!("not a valid DOCX archive: {}", e)))?;

    let mut part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| AppError::ExtractionError(format!("DOCX is missing {}: {}", DOCUMENT_PART, e)))?;

    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .map_err(|e| AppError::ExtractionError(format!("failed to read {}: {}", DOCUMENT_PART, e)))?;
    Ok(xml)
}

/// Collects the text of every `w:p` element. Runs inside a paragraph are
/// concatenated; `w:tab` and `w:br` become a tab and a newline. Paragraphs
/// nested in text boxes are emitted when they close, ahead of their parent.
pub fn parse_document_xml(xml: &str) -> AppResult<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut open: Vec<String> = Vec::new();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"p" => open.push(String::new()),
                b"t" => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"p" => paragraphs.push(String::new()),
                b"tab" => {
                    if let Some(paragraph) = open.last_mut() {
                        paragraph.push('\t');
                    }
                }
                b"br" | b"cr" => {
                    if let Some(paragraph) = open.last_mut() {
                        paragraph.push('\n');
                    }
                }
                _ => {}
            },
            Ok(Event::Text(t)) if in_text => {
                let text = t
                    .unescape()
                    .map_err(|e| AppError::ExtractionError(format!("invalid DOCX text: {}", e)))?;
                if let Some(paragraph) = open.last_mut() {
                    paragraph.push_str(&text);
                }
            }
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" => {
                    if let Some(paragraph) = open.pop() {
                        paragraphs.push(paragraph);
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(AppError::ExtractionError(format!(
                    "malformed DOCX XML at position {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
            _ => {}
        }
    }

    Ok(paragraphs)
}

#[async_trait]
impl TextExtractor for DocxExtractor {
    async fn extract(&self, file: &UploadedFile) -> AppResult<String> {
        let bytes = file.data.clone();
        let paragraphs = actix_web::web::block(move || {
            read_document_part(&bytes).and_then(|xml| parse_document_xml(&xml))
        })
        .await??;

        Ok(paragraphs.join("\n"))
    }

    fn name(&self) -> &'static str {
        "docx"
    }
}
