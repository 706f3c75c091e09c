//! Source selection: decide which entries of the tree get counted.
//!
//! This module handles the first stage of the pipeline. It provides:
//!
//! - **Filtering**: skip sets, the extension allow-list and the ordered
//!   directory/file rule chains
//! - **Classification**: a cheap text-versus-binary sniff of a file's head
//!
//! ## Example
//!
//! ```rust
//! use std::path::Path;
//! use treeloclib::source::FilterConfig;
//!
//! let filter = FilterConfig::new()
//!     .skip_dir("generated")
//!     .count_extensions(["go", "md"]);
//!
//! assert!(!filter.should_descend("generated", false));
//! assert!(filter.accepts_file(Path::new("cmd/main.go"), true));
//! assert!(!filter.accepts_file(Path::new("cmd/main.rs"), true));
//! ```

pub mod classify;
pub mod filter;

pub use classify::{classify_sample, is_likely_text, MAX_NON_TEXT_RATIO, SNIFF_SIZE};
pub use filter::{
    file_extension, normalize_extension, path_extension, DirRule, FileDecision, FileRule,
    FilterConfig, DEFAULT_SKIP_DIRS, DEFAULT_SKIP_FILES, DIR_RULES, EXECUTABLE_EXTENSION,
    FILE_RULES, HIDDEN_MARKER,
};
