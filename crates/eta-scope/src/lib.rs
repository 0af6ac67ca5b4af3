//! # eta-scope
//!
//! **Tier 3 (Analysis)**
//!
//! Walks a codebase and aggregates [`ScopeMetrics`]: file and line counts,
//! test files, technical-debt markers, observed extensions and the largest
//! file.
//!
//! The scan never fails. A missing root yields empty metrics, and a file
//! that cannot be read is logged and left out of every count.

use std::path::Path;

use eta_content::{count_debt_markers, count_lines, is_test_file_name, read_text_lossy};
use eta_settings::ScopeSettings;
use eta_types::ScopeMetrics;
use eta_walk::{SourceFile, list_source_files};

/// Per-file numbers folded into [`ScopeMetrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FileStats {
    lines: usize,
    markers: usize,
    is_test: bool,
}

/// Read and measure one file. Any failure skips the file.
fn scan_file(file: &SourceFile) -> Option<FileStats> {
    let text = match read_text_lossy(&file.path) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!(path = %file.path.display(), error = %format!("{err:#}"), "skipping unreadable file");
            return None;
        }
    };
    let name = file
        .path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    Some(FileStats {
        lines: count_lines(&text),
        markers: count_debt_markers(&text),
        is_test: is_test_file_name(&name),
    })
}

fn accumulate(metrics: &mut ScopeMetrics, extension: &str, stats: FileStats) {
    metrics.total_files += 1;
    metrics.total_lines += stats.lines;
    metrics.complexity_markers += stats.markers;
    if stats.is_test {
        metrics.test_files += 1;
    }
    metrics.largest_file_lines = metrics.largest_file_lines.max(stats.lines);
    if !metrics.languages.contains(extension) {
        metrics.languages.insert(extension.to_string());
    }
}

/// Scan `root` and aggregate scope metrics.
pub fn analyze_scope(root: &Path, settings: &ScopeSettings) -> ScopeMetrics {
    let mut metrics = ScopeMetrics::default();
    let files = list_source_files(root, settings);
    let listed = files.len();

    for file in &files {
        if let Some(stats) = scan_file(file) {
            accumulate(&mut metrics, &file.extension, stats);
        }
    }

    tracing::debug!(
        root = %root.display(),
        listed,
        scanned = metrics.total_files,
        lines = metrics.total_lines,
        "scope analysis complete"
    );
    metrics
}
