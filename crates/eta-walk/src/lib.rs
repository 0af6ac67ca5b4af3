//! # eta-walk
//!
//! **Tier 2 (Utilities)**
//!
//! Source file discovery for the scope analyzer and the risk scanner.
//! Walks a directory tree, prunes skipped directories before descending,
//! and keeps files whose name ends with an allowed extension.
//!
//! ## What belongs here
//! * Filesystem traversal
//! * The directory-skip predicate
//! * Extension matching
//!
//! ## What does NOT belong here
//! * Reading file contents (use eta-content)
//! * Aggregating metrics (use eta-scope)

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use eta_settings::ScopeSettings;
use ignore::WalkBuilder;

/// A file selected for scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Root-joined path, as handed out by the walker.
    pub path: PathBuf,
    /// The allow-list entry that matched, e.g. `.rs`.
    pub extension: String,
}

/// Returns true when a directory with this name must not be descended into.
pub fn is_skipped_dir(name: &OsStr, skip_dirs: &[String]) -> bool {
    let name = name.to_string_lossy();
    skip_dirs.iter().any(|skip| *skip == name)
}

/// First allow-list entry that `file_name` ends with.
pub fn matching_extension<'a>(file_name: &str, extensions: &'a [String]) -> Option<&'a str> {
    extensions
        .iter()
        .find(|ext| !ext.is_empty() && file_name.ends_with(ext.as_str()))
        .map(String::as_str)
}

/// List every source file under `root` selected by `settings`.
///
/// A missing root, or a root that is not a directory, yields an empty list.
/// Entries the walker cannot read are logged and skipped. Output is sorted
/// by path.
pub fn list_source_files(root: &Path, settings: &ScopeSettings) -> Vec<SourceFile> {
    if !root.is_dir() {
        tracing::debug!(root = %root.display(), "scan root is not a directory");
        return Vec::new();
    }

    let skip_dirs = settings.skip_dirs.clone();
    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(settings.respect_ignore_files);
    builder.hidden(false);
    builder.follow_links(false);
    builder.filter_entry(move |entry| {
        let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
        !(is_dir && entry.depth() > 0 && is_skipped_dir(entry.file_name(), &skip_dirs))
    });

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(error = %err, "skipping unreadable walk entry");
                continue;
            }
        };
        if entry.file_type().is_none_or(|t| t.is_dir()) {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if let Some(ext) = matching_extension(&name, &settings.extensions) {
            files.push(SourceFile {
                extension: ext.to_string(),
                path: entry.into_path(),
            });
        }
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    tracing::debug!(root = %root.display(), files = files.len(), "walk complete");
    files
}
