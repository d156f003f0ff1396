//! File content extraction: TXT, PDF, and DOCX bytes into clean text.
//!
//! Decoding sits behind the `FileDecoder` trait so the intake handlers do
//! not care which backends produced the text. `StandardDecoder` dispatches
//! on the lowercased extension; PDF extraction tries `pdf-extract` first
//! and falls back to walking pages with `lopdf` when that yields nothing.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::errors::AppError;
use crate::intake::validation::file_suffix;
use crate::text::normalize;

/// Turns an uploaded file into clean text, or fails with a human-readable
/// cause carried in `AppError::FileParsing`.
pub trait FileDecoder: Send + Sync {
    fn decode(&self, filename: &str, bytes: &[u8]) -> Result<String, AppError>;
}

/// Production decoder for the supported upload formats.
pub struct StandardDecoder;

impl FileDecoder for StandardDecoder {
    fn decode(&self, filename: &str, bytes: &[u8]) -> Result<String, AppError> {
        match file_suffix(filename).as_str() {
            ".txt" => decode_txt(bytes),
            ".pdf" => decode_pdf(bytes),
            ".docx" => decode_docx(bytes),
            other => Err(AppError::FileParsing(format!(
                "Unsupported file extension: {other}."
            ))),
        }
    }
}

/// UTF-8 first, then Latin-1. Latin-1 decoding cannot fail, so the error
/// case is a file that cleans down to nothing under both encodings.
fn decode_txt(bytes: &[u8]) -> Result<String, AppError> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        let cleaned = normalize(text);
        if !cleaned.is_empty() {
            return Ok(cleaned);
        }
    }
    let cleaned = normalize(&encoding_rs::mem::decode_latin1(bytes));
    if !cleaned.is_empty() {
        return Ok(cleaned);
    }
    Err(AppError::FileParsing(
        "Unable to decode text file. Please ensure UTF-8 or Latin-1 encoding.".to_string(),
    ))
}

fn decode_pdf(bytes: &[u8]) -> Result<String, AppError> {
    if let Ok(text) = pdf_extract::extract_text_from_mem(bytes) {
        let cleaned = normalize(&text);
        if !cleaned.is_empty() {
            return Ok(cleaned);
        }
    }

    let doc = lopdf::Document::load_mem(bytes)
        .map_err(|e| AppError::FileParsing(format!("Unable to open PDF: {e}")))?;
    let mut page_texts = Vec::new();
    for &page_num in doc.get_pages().keys() {
        if let Ok(text) = doc.extract_text(&[page_num]) {
            page_texts.push(text);
        }
    }
    let cleaned = normalize(&page_texts.join("\n"));
    if cleaned.is_empty() {
        return Err(AppError::FileParsing(
            "PDF appears to be empty or contains unsupported text layers.".to_string(),
        ));
    }
    Ok(cleaned)
}

fn decode_docx(bytes: &[u8]) -> Result<String, AppError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| AppError::FileParsing(format!("Unable to open DOCX archive: {e}")))?;
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|_| {
            AppError::FileParsing("DOCX file is missing its main document part.".to_string())
        })?
        .read_to_string(&mut xml)
        .map_err(|e| AppError::FileParsing(format!("Unable to read DOCX document: {e}")))?;

    let parts = collect_docx_parts(&xml)?;
    let cleaned = normalize(&parts.join("\n"));
    if cleaned.is_empty() {
        return Err(AppError::FileParsing(
            "DOCX file contains no extractable text.".to_string(),
        ));
    }
    Ok(cleaned)
}

/// Walks the WordprocessingML body: top-level paragraphs become one part
/// each; table rows become one part with cell texts joined by " | ".
fn collect_docx_parts(xml: &str) -> Result<Vec<String>, AppError> {
    let mut reader = Reader::from_str(xml);
    let mut parts: Vec<String> = Vec::new();
    let mut table_depth = 0usize;
    let mut paragraph = String::new();
    let mut cell = String::new();
    let mut row: Vec<String> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:tbl" => table_depth += 1,
                b"w:p" if table_depth == 0 => paragraph.clear(),
                b"w:tr" => row.clear(),
                b"w:tc" => cell.clear(),
                _ => {}
            },
            Ok(Event::Text(t)) => {
                let text = t.unescape().map_err(|e| {
                    AppError::FileParsing(format!("Malformed DOCX document XML: {e}"))
                })?;
                if table_depth > 0 {
                    cell.push_str(&text);
                } else {
                    paragraph.push_str(&text);
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:tbl" => table_depth = table_depth.saturating_sub(1),
                b"w:p" if table_depth == 0 => {
                    let trimmed = paragraph.trim();
                    if !trimmed.is_empty() {
                        parts.push(trimmed.to_string());
                    }
                }
                // Paragraph breaks inside a cell become spaces.
                b"w:p" => cell.push(' '),
                b"w:tc" => {
                    let trimmed = cell.trim();
                    if !trimmed.is_empty() {
                        row.push(trimmed.to_string());
                    }
                }
                b"w:tr" => {
                    if !row.is_empty() {
                        parts.push(row.join(" | "));
                        row.clear();
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(AppError::FileParsing(format!(
                    "Malformed DOCX document XML: {e}"
                )))
            }
            Ok(_) => {}
        }
    }

    Ok(parts)
}
