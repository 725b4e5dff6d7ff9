//! Parse pipeline
//!
//! Orchestrates segmentation, layout classification, and record building.
//! The pipeline is a pure transformation: text in, ordered records out,
//! with no I/O and no state shared across calls.

use crate::classify::{classify, ClassifyConfig, Mode};
use crate::columns::{infer_spans, slice_row};
use crate::record::{NativeTable, ParseResult, Record, TEXT_FIELD};
use crate::schema::{normalize_label, Vocabulary, CASING_VOCABULARY};
use crate::segment::{split_segments, LogicalLine};
use log::debug;

/// Parse extracted report text into structured records using the built-in
/// casing vocabulary.
pub fn parse_text(text: &str) -> ParseResult {
    parse_text_with_vocabulary(text, &CASING_VOCABULARY)
}

/// Parse extracted report text against a caller-supplied vocabulary.
///
/// The text is split at blank-line boundaries; each contiguous segment is
/// classified and built independently and the results are concatenated in
/// document order. A segment whose chosen mode yields no usable records
/// falls back to a prose record, so non-empty input always produces at
/// least one observable record.
pub fn parse_text_with_vocabulary(text: &str, vocabulary: &Vocabulary) -> ParseResult {
    let config = ClassifyConfig::default();
    let mut records = ParseResult::new();

    for segment in split_segments(text) {
        let mode = classify(&segment, &config);
        debug!("segment of {} lines parsed as {:?}", segment.len(), mode);

        let built = match mode {
            Mode::Table => build_table_records(&segment, vocabulary, &config),
            Mode::KeyValue => build_key_value_records(&segment),
            Mode::Prose => vec![prose_record(&segment)],
        };

        if built.is_empty() {
            records.push(prose_record(&segment));
        } else {
            records.extend(built);
        }
    }

    records
}

/// Map a native-table grid (first row is the header) straight through
/// schema mapping and row building, bypassing layout classification.
///
/// Rows shorter than the header are padded with empty values; all-empty
/// rows are dropped. An empty grid yields an empty result.
pub fn parse_native_table(table: &NativeTable, vocabulary: &Vocabulary) -> ParseResult {
    if table.is_empty() {
        return ParseResult::new();
    }

    let fields = map_header_fields(&table.cells[0], vocabulary);
    let mut records = ParseResult::new();

    for row in &table.cells[1..] {
        let mut record = Record::new();
        let mut any_value = false;
        for (i, field) in fields.iter().enumerate() {
            let value = row.get(i).map(|cell| cell.trim()).unwrap_or("");
            if !value.is_empty() {
                any_value = true;
            }
            record.insert(field.clone(), value.to_string());
        }
        if any_value {
            records.push(record);
        }
    }

    records
}

/// Resolve header labels to canonical field names; blank labels get a
/// positional name so their column is never dropped.
fn map_header_fields<S: AsRef<str>>(labels: &[S], vocabulary: &Vocabulary) -> Vec<String> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let field = vocabulary.resolve(label.as_ref());
            if field.is_empty() {
                format!("column_{}", i + 1)
            } else {
                field
            }
        })
        .collect()
}

/// One record per data line, zipping header-derived fields with cells
/// sliced at the header's column spans. All-empty rows (trailing blanks,
/// footer artifacts) are dropped. Values stay verbatim strings.
fn build_table_records(
    lines: &[LogicalLine],
    vocabulary: &Vocabulary,
    config: &ClassifyConfig,
) -> Vec<Record> {
    let header = &lines[0];
    let spans = infer_spans(header.raw(), config.min_gap_width);
    let labels = slice_row(header.raw(), &spans, config.align_tolerance);
    let fields = map_header_fields(&labels, vocabulary);

    let mut records = Vec::new();
    for line in &lines[1..] {
        let values = slice_row(line.raw(), &spans, config.align_tolerance);
        if values.iter().all(|value| value.is_empty()) {
            continue;
        }
        records.push(fields.iter().cloned().zip(values).collect());
    }
    records
}

/// All `label: value` pairs of a block accumulate into one combined record
/// so metadata fields that belong together stay joined. Lines with an
/// empty label or value are skipped.
fn build_key_value_records(lines: &[LogicalLine]) -> Vec<Record> {
    let mut record = Record::new();
    for line in lines {
        if let Some((label, value)) = split_key_value(line.text()) {
            record.insert(normalize_label(label), value.to_string());
        }
    }
    if record.is_empty() {
        vec![]
    } else {
        vec![record]
    }
}

/// Split a `label: value` line at its first colon, trimming both sides.
fn split_key_value(text: &str) -> Option<(&str, &str)> {
    let (label, value) = text.split_once(':')?;
    let label = label.trim();
    let value = value.trim();
    if label.is_empty() || value.is_empty() {
        None
    } else {
        Some((label, value))
    }
}

/// Single record carrying the block's trimmed text under the fixed `text`
/// field.
fn prose_record(lines: &[LogicalLine]) -> Record {
    let text = lines
        .iter()
        .map(LogicalLine::text)
        .collect::<Vec<_>>()
        .join("\n");
    let mut record = Record::new();
    record.insert(TEXT_FIELD.to_string(), text);
    record
}
