//! Line segmentation
//!
//! Splits raw report text into non-empty logical lines, keeping original
//! spacing for column-gap detection, and groups lines into contiguous
//! segments separated by blank lines. Mixed documents (a header block
//! followed by a table) are classified per segment, not as a whole.

/// One non-empty line of input text.
///
/// The raw form keeps leading and interior spacing intact (only the line
/// ending and trailing spaces are stripped) so the column inferencer can
/// measure whitespace gaps. `text()` is the trimmed content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    raw: String,
}

impl LogicalLine {
    /// Returns None for lines that are empty after trimming.
    pub fn new(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self {
                raw: raw.trim_end().to_string(),
            })
        }
    }

    /// Line with original leading/interior spacing.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Trimmed content.
    pub fn text(&self) -> &str {
        self.raw.trim()
    }
}

/// Split raw text into logical lines, dropping blank lines.
pub fn split_lines(text: &str) -> Vec<LogicalLine> {
    text.lines().filter_map(LogicalLine::new).collect()
}

/// Split raw text into contiguous line groups separated by blank lines.
///
/// Each group is classified and built independently, so a key-value header
/// block followed by a casing table produces one record set per group.
pub fn split_segments(text: &str) -> Vec<Vec<LogicalLine>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for line in text.lines() {
        match LogicalLine::new(line) {
            Some(logical) => current.push(logical),
            None => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }

    segments
}
