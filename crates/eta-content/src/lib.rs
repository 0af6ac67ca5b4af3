//! # eta-content
//!
//! Content scanning helpers for eta scope analysis.

use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

/// Whole-word technical-debt markers. Case-sensitive.
static DEBT_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(TODO|FIXME|HACK|XXX)\b").expect("valid regex literal"));

/// Read a file as text, replacing malformed UTF-8 instead of failing.
pub fn read_text_lossy(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Number of `\n` characters plus one; an empty text is one line.
pub fn count_lines(text: &str) -> usize {
    text.bytes().filter(|b| *b == b'\n').count() + 1
}

/// Occurrences of TODO, FIXME, HACK and XXX as whole words.
pub fn count_debt_markers(text: &str) -> usize {
    DEBT_MARKER.find_iter(text).count()
}

/// Whether a file name looks like a test or spec file.
pub fn is_test_file_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.contains("test") || lower.contains("spec")
}
