//! Header-to-field schema mapping
//!
//! Report PDFs from different operators word the same column many ways
//! ("Depth MD KB", "Depth m", "DEPTH"). A vocabulary of key phrases maps
//! raw header labels to stable canonical field names; anything unrecognized
//! falls back to a mechanically normalized form so no column is ever
//! dropped.

use once_cell::sync::Lazy;
use regex::Regex;

/// Priority-ordered list of (key phrase, canonical field) pairs.
///
/// Phrases are matched by case-insensitive containment and the first match
/// in declaration order wins, so more specific phrases must be declared
/// before their substrings ("test depth" before "depth"). Swapping in a
/// different vocabulary supports additional table schemas without touching
/// parsing logic.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    entries: Vec<(String, String)>,
}

impl Vocabulary {
    pub fn new<I, P, F>(entries: I) -> Self
    where
        I: IntoIterator<Item = (P, F)>,
        P: Into<String>,
        F: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(phrase, field)| (phrase.into().to_lowercase(), field.into()))
                .collect(),
        }
    }

    /// Resolve a raw header label to a canonical field name.
    ///
    /// Falls back to [`normalize_label`] when no phrase matches.
    pub fn resolve(&self, label: &str) -> String {
        let lowered = label.trim().to_lowercase();
        for (phrase, field) in &self.entries {
            if lowered.contains(phrase.as_str()) {
                return field.clone();
            }
        }
        normalize_label(label)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

static NON_ALNUM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Mechanically derive a snake_case field name from a header label:
/// lowercase, punctuation stripped, whitespace collapsed to underscores.
pub fn normalize_label(label: &str) -> String {
    let lowered = label.trim().to_lowercase();
    NON_ALNUM_RE
        .replace_all(&lowered, "_")
        .trim_matches('_')
        .to_string()
}

/// Built-in vocabulary for the recurring well-casing table type.
///
/// Process-wide and read-only. Entry order matters: "casing depth" and
/// "test depth" must win over the bare "depth" catch-all.
pub static CASING_VOCABULARY: Lazy<Vocabulary> = Lazy::new(|| {
    Vocabulary::new([
        ("hole size", "hole_size"),
        ("casing diameter", "casing_diameter"),
        ("casing size", "casing_diameter"),
        ("casing depth", "casing_depth_md_kb"),
        ("test fit", "test_fit_lot"),
        ("test date", "test_date"),
        ("test result", "test_result_ppg"),
        ("test depth", "test_depth_md_kb"),
        ("depth", "depth_md_kb"),
        ("type", "type"),
    ])
});
