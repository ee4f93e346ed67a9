//! Document text extraction.
//!
//! PDF runs a two-tier strategy: whole-document extraction first, then a
//! simpler page-by-page pass when the primary errors or comes back empty.
//! DOCX concatenates paragraph text in document order. Legacy .doc is
//! recognized but never extracted.

use anyhow::{anyhow, Context};
use tracing::warn;

use crate::errors::ScreeningError;
use crate::models::{DocumentFormat, RawDocument};

/// Extracts and normalizes the text of a document.
///
/// Fails with `UnsupportedFormat` before any extraction attempt when the
/// format is not handled, and with `Extraction` when every strategy for a
/// supported format yields no usable text.
pub fn extract(document: &RawDocument) -> Result<String, ScreeningError> {
    let raw = match document.format {
        DocumentFormat::Pdf => extract_pdf(&document.bytes)?,
        DocumentFormat::Docx => extract_docx(&document.bytes)?,
        DocumentFormat::Doc => {
            return Err(ScreeningError::UnsupportedFormat(
                ".doc (legacy Word; convert to .docx or .pdf)".to_string(),
            ))
        }
        DocumentFormat::Unsupported => {
            return Err(ScreeningError::UnsupportedFormat(document.extension()))
        }
    };

    let cleaned = clean_text(&raw);
    if cleaned.is_empty() {
        return Err(ScreeningError::Extraction(anyhow!(
            "no text could be extracted from {}",
            document.file_name
        )));
    }
    Ok(cleaned)
}

fn extract_pdf(bytes: &[u8]) -> Result<String, ScreeningError> {
    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) if !text.trim().is_empty() => Ok(text),
        Ok(_) => {
            warn!("Primary PDF extraction returned no text, trying page-by-page fallback");
            extract_pdf_pages(bytes)
        }
        Err(e) => {
            warn!("Primary PDF extraction failed ({e}), trying page-by-page fallback");
            extract_pdf_pages(bytes)
        }
    }
}

/// Fallback PDF strategy: load with lopdf and extract each page separately.
fn extract_pdf_pages(bytes: &[u8]) -> Result<String, ScreeningError> {
    let doc = lopdf::Document::load_mem(bytes).context("failed to load PDF document")?;

    let mut text = String::new();
    for &page_number in doc.get_pages().keys() {
        let page_text = doc
            .extract_text(&[page_number])
            .with_context(|| format!("failed to extract text from PDF page {page_number}"))?;
        if !page_text.trim().is_empty() {
            text.push_str(&page_text);
            text.push('\n');
        }
    }
    Ok(text)
}

fn extract_docx(bytes: &[u8]) -> Result<String, ScreeningError> {
    let docx = docx_rs::read_docx(bytes)
        .map_err(|e| ScreeningError::Extraction(anyhow!("failed to read DOCX document: {e}")))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            docx_rs::DocumentChild::Paragraph(p) => Some(paragraph_text(p)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let docx_rs::ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let docx_rs::RunChild::Text(t) = run_child {
                    text.push_str(&t.text);
                }
            }
        }
    }
    text
}

/// Normalizes extracted text: drops blank lines, then collapses every
/// whitespace run into a single space. Total and idempotent.
pub fn clean_text(text: &str) -> String {
    let without_blank_lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    without_blank_lines
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
