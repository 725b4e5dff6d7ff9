//! Column inference from whitespace gaps
//!
//! PDF text extraction preserves the horizontal layout of fixed-width
//! tables approximately: columns are separated by runs of two or more
//! spaces, and data tokens sit within a few characters of the header token
//! above them. This module infers column spans from a header line and
//! slices data lines at those offsets, snapping each cut to a nearby token
//! boundary to absorb proportional-width drift.

/// Half-open character-offset range `[start, end)` of one table column
/// within the header line.
///
/// Spans are non-overlapping and ordered left to right. The last span is
/// open-ended (`end == usize::MAX`) so ragged trailing data is never
/// truncated. A span runs from the start of its header token to the start
/// of the next one, which keeps data cells wider than their header intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    pub start: usize,
    pub end: usize,
}

/// Infer column spans from a header line.
///
/// Whitespace runs of at least `min_gap_width` characters separate
/// columns; narrower runs are interior to a column ("Hole Size" stays one
/// column). Offsets are character offsets, not byte offsets.
pub fn infer_spans(header: &str, min_gap_width: usize) -> Vec<ColumnSpan> {
    let mut starts: Vec<usize> = Vec::new();
    let mut in_token = false;
    let mut gap_len = usize::MAX; // leading whitespace always separates

    for (i, c) in header.chars().enumerate() {
        if c.is_whitespace() {
            if in_token {
                in_token = false;
                gap_len = 1;
            } else {
                gap_len = gap_len.saturating_add(1);
            }
        } else if !in_token {
            if starts.is_empty() || gap_len >= min_gap_width {
                starts.push(i);
            }
            in_token = true;
        }
    }

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| ColumnSpan {
            start,
            end: starts.get(i + 1).copied().unwrap_or(usize::MAX),
        })
        .collect()
}

/// Character offsets where a token (non-whitespace run) begins.
pub fn token_starts(line: &str) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut prev_ws = true;
    for (i, c) in line.chars().enumerate() {
        let ws = c.is_whitespace();
        if !ws && prev_ws {
            starts.push(i);
        }
        prev_ws = ws;
    }
    starts
}

/// Slice one data line at the given spans, trimming each cell.
///
/// Each span start snaps to the nearest token start of the data line
/// within `tolerance` characters, so a value that drifts a couple of
/// characters off its header column still lands in the right cell. Cuts
/// are clipped to the line's actual length: a line shorter than the span
/// set yields empty strings for the missing columns, not an error.
pub fn slice_row(line: &str, spans: &[ColumnSpan], tolerance: usize) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    let starts = token_starts(line);

    let mut cuts: Vec<usize> = Vec::with_capacity(spans.len());
    let mut prev = 0usize;
    for span in spans {
        let snapped = starts
            .iter()
            .copied()
            .filter(|&t| t.abs_diff(span.start) <= tolerance)
            .min_by_key(|&t| t.abs_diff(span.start))
            .unwrap_or(span.start);
        let cut = snapped.max(prev);
        cuts.push(cut);
        prev = cut;
    }

    cuts.iter()
        .enumerate()
        .map(|(i, &cut)| {
            let end = cuts.get(i + 1).copied().unwrap_or(usize::MAX);
            let lo = cut.min(chars.len());
            let hi = end.min(chars.len());
            chars[lo..hi].iter().collect::<String>().trim().to_string()
        })
        .collect()
}
