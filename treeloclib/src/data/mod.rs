//! Data collection: count files and collect statistics.
//!
//! This module handles the second stage of the pipeline - walking the tree
//! and counting what the source rules accept. It provides:
//!
//! - **Counting**: streaming line/byte counter for a single file
//! - **Scanning**: depth-first traversal producing a `ScanResult`
//! - **Statistics**: `ScanResult`, `FileRecord`, `ExtensionRecord`
//!
//! ## Example
//!
//! ```rust,ignore
//! use treeloclib::data::{scan_directory};
//! use treeloclib::FilterConfig;
//!
//! let result = scan_directory(".", &FilterConfig::new())?;
//! println!("Total lines: {}", result.line_count);
//! ```

pub mod counter;
pub mod scanner;
pub mod stats;

pub use counter::{count_file_lines, count_lines, LineCount, READ_CHUNK_SIZE};
pub use scanner::{scan, scan_directory, ScanOptions};
pub use stats::{group_by_extension, ExtensionRecord, FileRecord, ScanResult, NO_EXTENSION};
