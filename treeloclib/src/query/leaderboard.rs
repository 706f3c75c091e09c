//! Ranked top-N lists of files and extensions by line count.
//!
//! Orderings are total, so the same records always produce the same
//! leaderboard regardless of traversal order:
//!
//! - files: lines descending, then path ascending
//! - extensions: lines descending, then file count descending, then
//!   extension ascending

use std::cmp::Ordering;
use std::num::NonZeroUsize;

use serde::Serialize;

use crate::data::stats::{group_by_extension, ExtensionRecord, FileRecord, ScanResult};

/// Default number of entries per leaderboard.
pub const DEFAULT_TOP: NonZeroUsize = match NonZeroUsize::new(3) {
    Some(n) => n,
    None => unreachable!(),
};

/// A ranked, truncated list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leaderboard<T> {
    /// Number of entries asked for
    pub requested: usize,
    /// Ranked entries, at most `requested` of them
    pub entries: Vec<T>,
}

impl<T> Leaderboard<T> {
    fn from_ranked(mut entries: Vec<T>, top: NonZeroUsize) -> Self {
        entries.truncate(top.get());
        Self {
            requested: top.get(),
            entries,
        }
    }

    /// Number of entries actually present
    pub fn showing(&self) -> usize {
        self.entries.len()
    }

    /// True when fewer entries exist than were requested
    pub fn is_short(&self) -> bool {
        self.showing() < self.requested
    }
}

/// Both leaderboards for one scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leaderboards {
    /// Largest files
    pub files: Leaderboard<FileRecord>,
    /// Largest extensions
    pub extensions: Leaderboard<ExtensionRecord>,
}

impl Leaderboards {
    /// Build both leaderboards from a scan result.
    pub fn from_result(result: &ScanResult, top: NonZeroUsize) -> Self {
        Self {
            files: rank_files(&result.files, top),
            extensions: rank_extensions(&result.files, top),
        }
    }
}

fn file_order(a: &FileRecord, b: &FileRecord) -> Ordering {
    b.lines.cmp(&a.lines).then_with(|| a.path.cmp(&b.path))
}

fn extension_order(a: &ExtensionRecord, b: &ExtensionRecord) -> Ordering {
    b.lines
        .cmp(&a.lines)
        .then_with(|| b.files.cmp(&a.files))
        .then_with(|| a.extension.cmp(&b.extension))
}

/// Rank files by line count and keep the first `top`.
pub fn rank_files(files: &[FileRecord], top: NonZeroUsize) -> Leaderboard<FileRecord> {
    let mut ranked = files.to_vec();
    ranked.sort_by(file_order);
    Leaderboard::from_ranked(ranked, top)
}

/// Group files by extension, rank the groups and keep the first `top`.
pub fn rank_extensions(files: &[FileRecord], top: NonZeroUsize) -> Leaderboard<ExtensionRecord> {
    let mut ranked = group_by_extension(files);
    ranked.sort_by(extension_order);
    Leaderboard::from_ranked(ranked, top)
}
