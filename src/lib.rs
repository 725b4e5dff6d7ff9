//! Structured record extraction from well/drilling report text
//!
//! This crate provides:
//! - Layout classification of extracted report text (table, key-value, prose)
//! - Column inference from whitespace gaps with domain schema mapping
//! - Record building into ordered field -> value maps
//! - Optional PDF page-text extraction via lopdf
//!
//! The parser itself is pure: every input string maps to a (possibly
//! empty) record sequence, never an error. LLM-assisted extraction, OCR,
//! and file/HTTP surfaces are outside this crate; whatever text the caller
//! supplies is parsed best-effort.

pub mod classify;
pub mod columns;
pub mod parser;
pub mod pdftext;
pub mod record;
pub mod schema;
pub mod segment;

pub use classify::{classify, ClassifyConfig, Mode};
pub use columns::ColumnSpan;
pub use parser::{parse_native_table, parse_text, parse_text_with_vocabulary};
pub use record::{NativeTable, ParseResult, Record, TEXT_FIELD};
pub use schema::{normalize_label, Vocabulary, CASING_VOCABULARY};

use rayon::prelude::*;
use std::path::Path;
use std::time::Instant;

/// High-level extraction result for one report document
#[derive(Debug)]
pub struct ReportResult {
    /// Records from every page, in page order
    pub records: ParseResult,
    /// Page count
    pub page_count: u32,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Extract a report PDF and parse every page into structured records.
///
/// Pages are parsed in parallel; the output keeps page order.
pub fn process_report<P: AsRef<Path>>(path: P) -> Result<ReportResult, Error> {
    let start = Instant::now();
    let pages = pdftext::extract_pages(path)?;
    Ok(assemble_result(pages, start))
}

/// Process a report PDF from a memory buffer.
pub fn process_report_mem(buffer: &[u8]) -> Result<ReportResult, Error> {
    let start = Instant::now();
    let pages = pdftext::extract_pages_mem(buffer)?;
    Ok(assemble_result(pages, start))
}

fn assemble_result(pages: Vec<String>, start: Instant) -> ReportResult {
    let per_page: Vec<ParseResult> = pages.par_iter().map(|page| parse_text(page)).collect();

    ReportResult {
        records: per_page.into_iter().flatten().collect(),
        page_count: pages.len() as u32,
        processing_time_ms: start.elapsed().as_millis() as u64,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF parsing error: {0}")]
    Pdf(String),
    #[error("PDF is encrypted")]
    Encrypted,
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl From<lopdf::Error> for Error {
    fn from(e: lopdf::Error) -> Self {
        Error::Pdf(e.to_string())
    }
}
