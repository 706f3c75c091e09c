//! Directory tree scanning.
//!
//! This module provides the main entry points: walk a tree depth-first,
//! prune directories and reject files through [`FilterConfig`], count the
//! remaining files and collect a [`ScanResult`].

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::TreelocError;
use crate::source::filter::{FileDecision, FileRule, FilterConfig};
use crate::Result;

use super::counter::{count_file_lines, LineCount};
use super::stats::{FileRecord, ScanResult};

/// Options for a scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Directory to scan
    pub root: PathBuf,
    /// Filter configuration
    pub filter: FilterConfig,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            filter: FilterConfig::new(),
        }
    }
}

impl ScanOptions {
    /// Create new default options (current directory, default filter).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scan root.
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Set the filter configuration.
    pub fn filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }
}

/// Scan with the given options.
///
/// # Example
///
/// ```rust,ignore
/// use treeloclib::{scan, FilterConfig, ScanOptions};
///
/// let filter = FilterConfig::new().count_extensions(["go"]);
/// let result = scan(&ScanOptions::new().root("src").filter(filter))?;
/// println!("{} lines in {} files", result.line_count, result.file_count);
/// ```
pub fn scan(options: &ScanOptions) -> Result<ScanResult> {
    scan_directory(&options.root, &options.filter)
}

/// Scan a directory tree.
///
/// Siblings are visited in file name order. Any enumeration or read failure
/// aborts the scan, except a permission-denied error while counting a file,
/// which drops that file from the result.
///
/// A root that is a symlink to a directory is followed; a root that is a
/// symlink to a file is not a regular file and yields an empty result.
pub fn scan_directory(root: impl AsRef<Path>, filter: &FilterConfig) -> Result<ScanResult> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(TreelocError::PathNotFound(root.to_path_buf()));
    }

    if is_symlinked_file(root) {
        log::debug!(
            "skipping file {} ({})",
            root.display(),
            FileRule::NotRegular.name()
        );
        return Ok(ScanResult::new());
    }

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| keep_entry(e, filter));

    let mut result = ScanResult::new();

    for entry in walker {
        let entry = entry.map_err(|err| walk_error(root, err))?;
        let file_type = entry.file_type();
        if file_type.is_dir() {
            continue;
        }

        let path = entry.path();
        if let FileDecision::Skip(rule) = filter.file_decision(path, file_type.is_file()) {
            log::debug!("skipping file {} ({})", path.display(), rule.name());
            continue;
        }

        let Some(count) = counted_or_skipped(path, count_file_lines(path))? else {
            continue;
        };

        log::trace!("{}: {} lines, {} bytes", path.display(), count.lines, count.bytes);
        result.add_file(FileRecord::new(relative_label(path, root), count));
    }

    log::info!(
        "scanned {}: {} files, {} lines, {} bytes",
        root.display(),
        result.file_count,
        result.line_count,
        result.byte_count
    );

    Ok(result)
}

/// Split a file count failure: permission-denied drops the file (`None`),
/// anything else aborts the scan.
fn counted_or_skipped(
    path: &Path,
    counted: io::Result<LineCount>,
) -> Result<Option<LineCount>> {
    match counted {
        Ok(count) => Ok(Some(count)),
        Err(err) if err.kind() == ErrorKind::PermissionDenied => {
            log::debug!("permission denied, skipping {}", path.display());
            Ok(None)
        }
        Err(source) => Err(TreelocError::FileRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn is_symlinked_file(root: &Path) -> bool {
    let is_link = fs::symlink_metadata(root)
        .map(|meta| meta.file_type().is_symlink())
        .unwrap_or(false);
    is_link && root.is_file()
}

/// Walker predicate: prune directories, pass everything else through.
fn keep_entry(entry: &DirEntry, filter: &FilterConfig) -> bool {
    if !entry.file_type().is_dir() {
        return true;
    }
    let name = entry.file_name().to_string_lossy();
    match filter.dir_decision(&name, entry.depth() == 0) {
        Some(rule) => {
            log::debug!("pruning {} ({})", entry.path().display(), rule.name());
            false
        }
        None => true,
    }
}

fn walk_error(root: &Path, err: walkdir::Error) -> TreelocError {
    let path = err.path().unwrap_or(root).to_path_buf();
    TreelocError::Walk { path, source: err }
}

/// Path label relative to the scan root.
///
/// A root that is itself a file is labeled with its file name.
fn relative_label(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.to_string_lossy().into_owned(),
        _ => path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned()),
    }
}
