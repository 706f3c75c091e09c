//! Core data structures for scan statistics

use std::collections::BTreeMap;

use serde::Serialize;

use crate::source::filter::file_extension;

use super::counter::LineCount;

/// Label used for files whose name has no extension.
pub const NO_EXTENSION: &str = "(no extension)";

/// Statistics for one counted file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// Path relative to the scan root
    pub path: String,
    /// Number of lines
    pub lines: u64,
    /// Number of bytes
    pub bytes: u64,
}

impl FileRecord {
    /// Create a record from a relative path and its counts
    pub fn new(path: impl Into<String>, count: LineCount) -> Self {
        Self {
            path: path.into(),
            lines: count.lines,
            bytes: count.bytes,
        }
    }

    /// Grouping key for the extension leaderboard.
    ///
    /// Lower-cased extension of the last path component, or [`NO_EXTENSION`].
    pub fn extension_key(&self) -> String {
        let name = self
            .path
            .rsplit(['/', std::path::MAIN_SEPARATOR])
            .next()
            .unwrap_or(&self.path);
        file_extension(name).unwrap_or_else(|| NO_EXTENSION.to_string())
    }
}

/// Statistics for all files sharing an extension
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtensionRecord {
    /// Lower-cased extension with leading dot, or [`NO_EXTENSION`]
    pub extension: String,
    /// Number of files with this extension
    pub files: u64,
    /// Sum of their lines
    pub lines: u64,
}

/// Result of scanning a directory tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    /// Number of files counted
    pub file_count: u64,
    /// Total lines across counted files
    pub line_count: u64,
    /// Total bytes across counted files
    pub byte_count: u64,
    /// Per-file records in traversal order
    pub files: Vec<FileRecord>,
}

impl ScanResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a counted file and add it to the totals
    pub fn add_file(&mut self, record: FileRecord) {
        self.file_count += 1;
        self.line_count += record.lines;
        self.byte_count += record.bytes;
        self.files.push(record);
    }

    /// Aggregate the per-file records by extension, ordered by extension.
    pub fn extensions(&self) -> Vec<ExtensionRecord> {
        group_by_extension(&self.files)
    }
}

/// Aggregate file records by extension, ordered by extension.
pub fn group_by_extension(files: &[FileRecord]) -> Vec<ExtensionRecord> {
    let mut by_ext: BTreeMap<String, ExtensionRecord> = BTreeMap::new();
    for file in files {
        let key = file.extension_key();
        let entry = by_ext
            .entry(key.clone())
            .or_insert_with(|| ExtensionRecord {
                extension: key,
                ..Default::default()
            });
        entry.files += 1;
        entry.lines += file.lines;
    }
    by_ext.into_values().collect()
}
