//! # treeloclib
//!
//! A directory-tree line counter library: lines, bytes and files, plus
//! leaderboards of the largest files and extensions.
//!
//! ## Overview
//!
//! The library is a small pipeline with no printing of its own:
//!
//! - **Source**: decide which directories to descend into and which files to
//!   count (skip sets, hidden entries, extension allow-list, lock-file
//!   list, text-versus-binary sniffing)
//! - **Data**: walk the tree, count lines and bytes of every accepted file,
//!   collect a [`ScanResult`]
//! - **Query**: rank the per-file records into [`Leaderboards`]
//!
//! ## Counting rules
//!
//! - Every `\n` ends a line; a non-empty file not ending in `\n` has one more
//! - Without an extension allow-list, lock/manifest files, files without an
//!   extension, `.exe` files and files that sniff as binary are skipped
//! - With an allow-list, only the extension decides
//! - Symlinks and other non-regular files are never counted
//!
//! ## Example
//!
//! ```rust
//! use std::fs;
//! use std::num::NonZeroUsize;
//! use tempfile::tempdir;
//! use treeloclib::{scan, FilterConfig, Leaderboards, ScanOptions};
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("main.go"), "package main\n\nfunc main() {}\n").unwrap();
//! fs::write(dir.path().join("README.md"), "# Demo\n").unwrap();
//! fs::write(dir.path().join("go.sum"), "example.com/x v1.0.0 h1:abc=\n").unwrap();
//!
//! // Count with the default rules (go.sum is skipped)
//! let result = scan(&ScanOptions::new().root(dir.path())).unwrap();
//! assert_eq!(result.file_count, 2);
//! assert_eq!(result.line_count, 4);
//!
//! // Count only Go files
//! let filter = FilterConfig::new().count_extensions(["go"]);
//! let result = scan(&ScanOptions::new().root(dir.path()).filter(filter)).unwrap();
//! assert_eq!(result.line_count, 3);
//!
//! // Rank
//! let boards = Leaderboards::from_result(&result, NonZeroUsize::new(5).unwrap());
//! assert_eq!(boards.files.entries[0].path, "main.go");
//! assert!(boards.files.is_short());
//! ```

pub mod data;
pub mod error;
pub mod query;
pub mod source;

pub use data::{
    count_file_lines, count_lines, scan, scan_directory, ExtensionRecord, FileRecord, LineCount,
    ScanOptions, ScanResult, NO_EXTENSION,
};
pub use error::TreelocError;
pub use query::{rank_extensions, rank_files, Leaderboard, Leaderboards, DEFAULT_TOP};
pub use source::{is_likely_text, FilterConfig, DEFAULT_SKIP_DIRS, DEFAULT_SKIP_FILES};

/// Result type for treeloclib operations
pub type Result<T> = std::result::Result<T, TreelocError>;
