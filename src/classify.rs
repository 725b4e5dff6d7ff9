//! Layout classification
//!
//! Decides whether a contiguous block of extracted report text is a
//! fixed-layout table, a colon-delimited key-value block, or unstructured
//! prose. The decision is pure and stateless; the chosen mode picks the
//! downstream builder with no transition back.

use crate::columns::{infer_spans, ColumnSpan};
use crate::segment::LogicalLine;
use log::debug;

/// Layout classification outcome for one block of lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Columnar table: header line plus data lines aligned under it.
    Table,
    /// Colon-delimited `label: value` block.
    KeyValue,
    /// Neither of the above.
    Prose,
}

/// Minimum run of spaces treated as a column separator.
pub const MIN_GAP_WIDTH: usize = 2;
/// Maximum character drift allowed when checking that data tokens line up
/// under header columns (absorbs proportional-width extraction artifacts).
pub const ALIGN_TOLERANCE: usize = 3;
/// Fraction of lines that must carry a `label: value` separator before a
/// block counts as key-value.
pub const KV_LINE_RATIO: f32 = 0.5;

/// Configuration for layout classification
#[derive(Debug, Clone)]
pub struct ClassifyConfig {
    /// Minimum whitespace-gap width for column separation
    pub min_gap_width: usize,
    /// Tolerance for data-token drift under header columns
    pub align_tolerance: usize,
    /// Required ratio of key-value lines (exclusive lower bound)
    pub kv_line_ratio: f32,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            min_gap_width: MIN_GAP_WIDTH,
            align_tolerance: ALIGN_TOLERANCE,
            kv_line_ratio: KV_LINE_RATIO,
        }
    }
}

/// Classify a block of logical lines. First match wins: key-value, then
/// table, then prose.
pub fn classify(lines: &[LogicalLine], config: &ClassifyConfig) -> Mode {
    if lines.is_empty() {
        return Mode::Prose;
    }

    let table = is_table_block(lines, config);

    if !table && is_key_value_block(lines, config) {
        debug!("classified {} lines as key-value", lines.len());
        return Mode::KeyValue;
    }
    if table {
        debug!("classified {} lines as columnar table", lines.len());
        return Mode::Table;
    }
    debug!("classified {} lines as prose", lines.len());
    Mode::Prose
}

/// True when a line holds exactly one `label: value` separator (a colon
/// followed by whitespace or end of line) with a non-empty label and a
/// non-trivial value.
pub fn is_key_value_line(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    let mut separators = 0;
    for (i, &c) in chars.iter().enumerate() {
        if c == ':' && chars.get(i + 1).map_or(true, |n| n.is_whitespace()) {
            separators += 1;
        }
    }
    if separators != 1 {
        return false;
    }
    match text.split_once(':') {
        Some((label, value)) => !label.trim().is_empty() && !value.trim().is_empty(),
        None => false,
    }
}

fn is_key_value_block(lines: &[LogicalLine], config: &ClassifyConfig) -> bool {
    let kv_lines = lines
        .iter()
        .filter(|line| is_key_value_line(line.text()))
        .count();
    kv_lines as f32 / lines.len() as f32 > config.kv_line_ratio
}

/// Columnar table signature: the first line splits into at least three
/// columns at gaps of `min_gap_width`+ spaces, and at least one subsequent
/// line has tokens aligned under those columns within the drift tolerance.
fn is_table_block(lines: &[LogicalLine], config: &ClassifyConfig) -> bool {
    let spans = infer_spans(lines[0].raw(), config.min_gap_width);
    // Three columns means two qualifying gaps
    if spans.len() < 3 {
        return false;
    }
    lines[1..]
        .iter()
        .any(|line| line_aligns(line.raw(), &spans, config))
}

/// A data line aligns when it carries the wide-gap signature itself and at
/// least two of its column starts sit under header columns within the
/// drift tolerance. Requiring the line's own gaps keeps prose (whose words
/// often start near header offsets by chance) from qualifying.
fn line_aligns(line: &str, header_spans: &[ColumnSpan], config: &ClassifyConfig) -> bool {
    let data_spans = infer_spans(line, config.min_gap_width);
    if data_spans.len() < 2 {
        return false;
    }
    let aligned = data_spans
        .iter()
        .filter(|data| {
            header_spans
                .iter()
                .any(|header| header.start.abs_diff(data.start) <= config.align_tolerance)
        })
        .count();
    aligned >= 2
}
