//! PDF page-text extraction
//!
//! Thin wrapper over lopdf for pulling per-page text out of digitally
//! authored report PDFs. Scanned pages come back empty; OCR is out of
//! scope. Pages are extracted in parallel and returned in page order.

use crate::Error;
use lopdf::Document;
use log::warn;
use rayon::prelude::*;
use std::path::Path;

/// Extract per-page text from a PDF file.
pub fn extract_pages<P: AsRef<Path>>(path: P) -> Result<Vec<String>, Error> {
    let doc = Document::load(path)?;
    extract_from_document(&doc)
}

/// Extract per-page text from an in-memory PDF buffer.
pub fn extract_pages_mem(buffer: &[u8]) -> Result<Vec<String>, Error> {
    if buffer.is_empty() {
        return Err(Error::InvalidInput("empty PDF buffer".to_string()));
    }
    let doc = Document::load_mem(buffer)?;
    extract_from_document(&doc)
}

/// Per-page extraction on a loaded document. A page whose content stream
/// cannot be decoded yields an empty string rather than failing the
/// document.
pub fn extract_from_document(doc: &Document) -> Result<Vec<String>, Error> {
    if doc.is_encrypted() {
        return Err(Error::Encrypted);
    }

    let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
    let pages = page_numbers
        .par_iter()
        .map(|&page| match doc.extract_text(&[page]) {
            Ok(text) => text,
            Err(e) => {
                warn!("failed to extract text from page {}: {}", page, e);
                String::new()
            }
        })
        .collect();

    Ok(pages)
}
